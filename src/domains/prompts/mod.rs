//! Prompts domain module.
//!
//! Holds the SAS-to-Python translation prompts. Each version is a pair of
//! texts: translation rules for the system role and an example request for
//! the user role. Version 1 ships a concrete request; version 2 ships a
//! template whose [`PLACEHOLDER`] the caller fills with SAS source.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per prompt version, holding the raw texts
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and rendering
//! - `templates.rs` - Prompt and request types, placeholder substitution

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use definitions::sas_to_python_v2::{PLACEHOLDER, SAS_CODE_ARG};
pub use error::PromptError;
pub use registry::get_all_prompts;
pub use service::PromptService;
pub use templates::{ExampleRequest, PromptTemplate, RenderedPrompt};
