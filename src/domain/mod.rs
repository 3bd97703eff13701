pub mod config;
pub mod error;
pub mod prompt;
pub mod request;

pub use config::{API_KEY_VAR, ApiConfig, BASE_URL_VAR, MODEL_VAR};
pub use error::AppError;
pub use prompt::{PromptPair, app_name_prompt, assignment_prompt};
pub use request::{AssignmentRequest, Language, RosterEntry};
