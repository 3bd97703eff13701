//! workup: Collect a project description and team roster, then request AI
//! task assignments from a chat-completion endpoint.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::AssignOptions;
pub use domain::AppError;

/// Run one assignment interaction.
///
/// Collects input (interactively, or from `options.file`), echoes it,
/// validates it, and either prints the constructed prompts (`dry_run`) or
/// submits them to the configured completion endpoint and prints the
/// labeled results. Incomplete input and remote failures are displayed, not
/// returned as errors.
pub fn assign(options: AssignOptions) -> Result<(), AppError> {
    app::assign::execute(&options)
}
