mod completion_client_http;
mod roster_csv;

pub use completion_client_http::HttpCompletionClient;
pub use roster_csv::{UploadedRoster, parse_roster_csv};
