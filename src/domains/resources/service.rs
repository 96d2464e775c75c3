//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::BTreeMap;
use tracing::info;

use super::definitions::{DynamicResourceProvider, ServerInfoResource};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::ResourcesConfig;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: BTreeMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,

    /// Configured server name, reported by the info resource.
    server_name: String,

    /// Names of the prompts the server exposes, reported by the info resource.
    prompt_names: Vec<String>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Server information computed at read time.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(
        config: ResourcesConfig,
        server_name: impl Into<String>,
        prompt_names: Vec<String>,
    ) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: BTreeMap::new(),
            templates: Vec::new(),
            server_name: server_name.into(),
            prompt_names,
        };

        service.register_from_registry(&config);
        service.register_templates_from_registry(&config);

        service
    }

    /// Register resources from the registry.
    fn register_from_registry(&mut self, config: &ResourcesConfig) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            if !config.expose_assets && matches!(entry.content, ResourceContent::Text(_)) {
                continue;
            }
            self.register_resource(entry);
        }
    }

    /// Register resource templates from the registry.
    fn register_templates_from_registry(&mut self, config: &ResourcesConfig) {
        if !config.expose_assets {
            info!("Prompt text resources disabled, skipping resource templates");
            return;
        }
        info!("Registering resource templates from registry");
        self.templates = get_all_resource_templates();
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::ServerInfo => {
                let names: Vec<&str> = self.prompt_names.iter().map(String::as_str).collect();
                ServerInfoResource::resolve(uri, &self.server_name, &names)
                    .map_err(ResourceError::internal)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}
