mod completion_client;

pub use completion_client::{
    CompletionClient, CompletionError, CompletionRequest, MockCompletionClient,
};
