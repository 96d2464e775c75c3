//! SAS-to-Python prompt server library.
//!
//! This crate holds the SAS-to-Python translation prompts (two revisions of a
//! system text plus example request) and serves them over the Model Context
//! Protocol (MCP). It never calls a language model itself: clients fetch the
//! texts and forward them to whatever completion API they use.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **prompts**: the prompt texts, placeholder substitution, prompt service
//!   - **resources**: the raw prompt texts as readable resources
//!   - **tools**: a check for unresolved placeholders in a request
//!
//! # Example
//!
//! ```rust
//! use sas_prompt_server::domains::prompts::definitions::sas_to_python_v2;
//! use sas_prompt_server::domains::prompts::ExampleRequest;
//!
//! let request = ExampleRequest::new(sas_to_python_v2::USER_MESSAGE);
//! let user = request.fill("DATA out; SET in; RUN;").unwrap();
//! assert!(!user.contains(sas_to_python_v2::PLACEHOLDER));
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};

use crate::core::TransportService;
use tracing::info;

/// Build the server from `config` and serve it on the configured transport.
///
/// Returns once the transport shuts down.
pub async fn serve(config: Config) -> Result<()> {
    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config);

    info!("Server initialized");

    transport.run(server).await?;
    Ok(())
}
