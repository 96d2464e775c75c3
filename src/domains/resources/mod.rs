//! Resources domain module.
//!
//! Resources are read-only data MCP clients can fetch. This server publishes
//! the raw text of every prompt version plus a small server info document.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::get_all_resources;
pub use service::{ResourceContent, ResourceEntry, ResourceService};
