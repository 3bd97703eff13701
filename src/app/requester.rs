//! Assignment Requester: turns a validated request into completion calls
//! and display-ready text.
//!
//! Both operations are stateless single-shot calls and always return a
//! printable string; remote failures are rendered, never propagated.

use crate::domain::{AssignmentRequest, PromptPair, app_name_prompt, assignment_prompt};
use crate::ports::{CompletionClient, CompletionError, CompletionRequest};

const ASSIGNMENT_LABEL: &str = "Assistant: ";
const APP_NAME_LABEL: &str = "Suggested App Name: ";

/// Request a task assignment for a validated submission.
pub fn request_assignment<C: CompletionClient>(client: &C, request: &AssignmentRequest) -> String {
    complete_labeled(client, assignment_prompt(request), ASSIGNMENT_LABEL)
}

/// Request a creative app-name suggestion for a project description.
pub fn request_app_name<C: CompletionClient>(client: &C, description: &str) -> String {
    complete_labeled(client, app_name_prompt(description), APP_NAME_LABEL)
}

/// Shared call-and-render path for both operations.
fn complete_labeled<C: CompletionClient>(client: &C, prompt: PromptPair, label: &str) -> String {
    let request =
        CompletionRequest { system_prompt: prompt.system, user_prompt: prompt.user };

    match client.complete(request) {
        Ok(text) => format!("{label}{text}"),
        Err(CompletionError::Api(details)) => format!("API request failed: {details}"),
        Err(CompletionError::Unexpected(details)) => format!("An error occurred: {details}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, RosterEntry};

    /// Stub client returning a scripted outcome per call.
    struct ScriptedClient {
        outcome: Result<String, CompletionError>,
    }

    impl CompletionClient for ScriptedClient {
        fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
            self.outcome.clone()
        }
    }

    fn request() -> AssignmentRequest {
        AssignmentRequest::new(
            "Build a chat app".to_string(),
            vec![
                RosterEntry::from_fields("Alice", "backend").unwrap(),
                RosterEntry::from_fields("Bob", "frontend").unwrap(),
            ],
            Some(Language::Python),
        )
        .unwrap()
    }

    #[test]
    fn assignment_success_is_labeled() {
        let client = ScriptedClient { outcome: Ok("Alice handles the API.".to_string()) };
        let output = request_assignment(&client, &request());
        assert_eq!(output, "Assistant: Alice handles the API.");
    }

    #[test]
    fn app_name_success_is_labeled() {
        let client = ScriptedClient { outcome: Ok("ChatterBox".to_string()) };
        let output = request_app_name(&client, "Build a chat app");
        assert_eq!(output, "Suggested App Name: ChatterBox");
    }

    #[test]
    fn api_failure_renders_exact_prefix() {
        let client = ScriptedClient {
            outcome: Err(CompletionError::Api("API error (401): invalid api key".to_string())),
        };
        let output = request_assignment(&client, &request());
        assert_eq!(output, "API request failed: API error (401): invalid api key");
    }

    #[test]
    fn unexpected_failure_renders_exact_prefix() {
        let client = ScriptedClient {
            outcome: Err(CompletionError::Unexpected("connection reset".to_string())),
        };
        let output = request_app_name(&client, "Build a chat app");
        assert_eq!(output, "An error occurred: connection reset");
    }

    #[test]
    fn operations_fail_independently() {
        let failing = ScriptedClient {
            outcome: Err(CompletionError::Api("quota exceeded".to_string())),
        };
        let succeeding = ScriptedClient { outcome: Ok("NameDrop".to_string()) };

        let assignment = request_assignment(&failing, &request());
        let name = request_app_name(&succeeding, "Build a chat app");

        assert_eq!(assignment, "API request failed: quota exceeded");
        assert_eq!(name, "Suggested App Name: NameDrop");
    }
}
