//! Completion endpoint port definition.

use thiserror::Error;

/// One two-message chat-completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Fixed persona sent as the system message.
    pub system_prompt: String,
    /// Synthesized prompt sent as the user message.
    pub user_prompt: String,
}

/// Failure of a single completion call, categorized for display.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// The service answered with a recognized error condition
    /// (authentication, quota, malformed request).
    #[error("{0}")]
    Api(String),

    /// Anything else: transport failure, undecodable response.
    #[error("{0}")]
    Unexpected(String),
}

/// Port for chat-completion operations.
///
/// One synchronous round trip per call; no retry, no streaming, no caching.
pub trait CompletionClient {
    /// Submit one request and return the reply text.
    fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

/// Mock client for exercising the flow without network calls.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient;

impl CompletionClient for MockCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        println!("=== MOCK MODE ===");
        println!("Would request a completion with:");
        println!("  System prompt length: {} chars", request.system_prompt.len());
        println!("  User prompt length: {} chars", request.user_prompt.len());

        Ok("mock completion".to_string())
    }
}
