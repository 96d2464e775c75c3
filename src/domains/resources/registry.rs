//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    PROMPT_URI_PREFIX, ResourceDefinition, ServerInfoResource, V1SystemResource, V1UserResource,
    V2SystemResource, V2UserResource,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get the raw prompt text resources.
pub fn get_asset_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<V1SystemResource>(),
        build_resource::<V1UserResource>(),
        build_resource::<V2SystemResource>(),
        build_resource::<V2UserResource>(),
    ]
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    let mut resources = vec![build_resource::<ServerInfoResource>()];
    resources.extend(get_asset_resources());
    resources
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: format!("{}{{version}}/{{role}}", PROMPT_URI_PREFIX),
            name: "SAS to Python Prompt Texts".to_string(),
            title: Some("Prompt Text by Version and Role".to_string()),
            description: Some(
                "Raw prompt text; version is v1 or v2, role is system or user".to_string(),
            ),
            mime_type: Some("text/markdown".to_string()),
        }
        .no_annotation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 5);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(
            uris,
            vec![
                "mcp://server/info",
                "prompt://sas-to-python/v1/system",
                "prompt://sas-to-python/v1/user",
                "prompt://sas-to-python/v2/system",
                "prompt://sas-to-python/v2/user",
            ]
        );
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates[0].raw.uri_template,
            "prompt://sas-to-python/{version}/{role}"
        );
    }

    #[test]
    fn test_template_covers_asset_uris() {
        let template = &get_all_resource_templates()[0].raw.uri_template;
        for entry in get_asset_resources() {
            let uri = entry.resource.raw.uri.as_str();
            let (version, role) = uri
                .strip_prefix(PROMPT_URI_PREFIX)
                .and_then(|rest| rest.split_once('/'))
                .unwrap();
            let expanded = template.replace("{version}", version).replace("{role}", role);
            assert_eq!(expanded, uri);
        }
    }

    #[test]
    fn test_asset_resources_are_markdown() {
        for entry in get_asset_resources() {
            assert_eq!(entry.resource.raw.mime_type.as_deref(), Some("text/markdown"));
        }
    }
}
