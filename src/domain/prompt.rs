//! Prompt and persona construction for the two completion operations.
//!
//! Pure string assembly over a validated request; no I/O. The wording is
//! fixed and the description is embedded verbatim.

use super::AssignmentRequest;

/// System persona and user prompt for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Build the task-assignment prompt for a validated request.
pub fn assignment_prompt(request: &AssignmentRequest) -> PromptPair {
    let roster = request.roster_summary();

    let (system, user) = match request.preferred_language() {
        Some(language) => (
            "You are an AI assistant who assigns project tasks intelligently based on \
             expertise and the preferred programming language."
                .to_string(),
            format!(
                "The project is described as: '{}'. The following people with different \
                 expertise are involved: {}. The preferred programming language is {}. \
                 Please intelligently assign tasks based on their expertise and guide them, \
                 ensuring to use {} where applicable.",
                request.description(),
                roster,
                language,
                language
            ),
        ),
        None => (
            "You are an AI assistant who assigns project tasks intelligently based on \
             expertise."
                .to_string(),
            format!(
                "The project is described as: '{}'. The following people with different \
                 expertise are involved: {}. Please intelligently assign tasks based on \
                 their expertise and guide them.",
                request.description(),
                roster
            ),
        ),
    };

    PromptPair { system, user }
}

/// Build the app-name suggestion prompt for a project description.
pub fn app_name_prompt(description: &str) -> PromptPair {
    PromptPair {
        system: "You are a creative branding assistant who suggests unique, memorable app \
                 names for software projects."
            .to_string(),
        user: format!(
            "Suggest a creative, unique app name for the following project: '{description}'."
        ),
    }
}
