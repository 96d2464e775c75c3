//! Resource definitions module.
//!
//! Each resource is defined with:
//! - URI and metadata
//! - Content provider
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

use rmcp::model::ResourceContents;

use super::service::ResourceContent;

pub mod prompt_assets;
pub mod server_info;

pub use prompt_assets::{V1SystemResource, V1UserResource, V2SystemResource, V2UserResource};
pub use server_info::ServerInfoResource;

/// Scheme and prefix shared by the prompt text resources.
pub const PROMPT_URI_PREFIX: &str = "prompt://sas-to-python/";

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}

/// Trait for resources whose content is computed at read time.
pub trait DynamicResourceProvider {
    /// Resolve the dynamic content for the server named `server_name`.
    fn resolve(
        uri: &str,
        server_name: &str,
        prompt_names: &[&str],
    ) -> Result<ResourceContents, String>;
}
