//! Server info resource definition.

use super::{DynamicResourceProvider, ResourceDefinition};
use crate::domains::prompts::PLACEHOLDER;
use crate::domains::resources::service::ResourceContent;
use rmcp::model::ResourceContents;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "mcp://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Server version, registered prompts and placeholder token";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::ServerInfo
    }
}

impl DynamicResourceProvider for ServerInfoResource {
    fn resolve(
        uri: &str,
        server_name: &str,
        prompt_names: &[&str],
    ) -> Result<ResourceContents, String> {
        let info = serde_json::json!({
            "server": server_name,
            "version": env!("CARGO_PKG_VERSION"),
            "prompts": prompt_names,
            "placeholder": PLACEHOLDER,
        });

        Ok(ResourceContents::text(
            serde_json::to_string_pretty(&info).map_err(|e| e.to_string())?,
            uri,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "mcp://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_server_info_resolve() {
        let result = ServerInfoResource::resolve(
            "mcp://server/info",
            "sas-prompts-staging",
            &["sas_to_python_v2"],
        );
        let text = match result.unwrap() {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["server"], "sas-prompts-staging");
        assert_eq!(value["prompts"][0], "sas_to_python_v2");
        assert_eq!(value["placeholder"], "[PASTE YOUR SAS CODE HERE]");
    }
}
