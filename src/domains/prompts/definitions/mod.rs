//! Prompt definitions module.
//!
//! Each prompt version is defined in its own file with:
//! - Metadata (name, version, description, arguments)
//! - The system text and the example request text as `&'static str` constants
//!
//! ## Adding a New Prompt Version
//!
//! 1. Create a new file (e.g., `sas_to_python_v3.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

use rmcp::model::PromptArgument;

pub mod sas_to_python_v1;
pub mod sas_to_python_v2;

pub use sas_to_python_v1::SasToPythonV1Prompt;
pub use sas_to_python_v2::SasToPythonV2Prompt;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and texts.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// Revision number of the prompt text.
    const VERSION: u32;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// Instructions for the model (system role).
    fn system_message() -> &'static str;

    /// Example request (user role). May contain the placeholder token.
    fn user_message() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}
