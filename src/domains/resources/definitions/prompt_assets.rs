//! Raw prompt text resources.
//!
//! Every prompt version publishes its system and user texts unchanged, so
//! clients with a real system slot can use them directly. The v2 user text
//! still carries the placeholder.

use super::ResourceDefinition;
use crate::domains::prompts::definitions::{sas_to_python_v1, sas_to_python_v2};
use crate::domains::resources::service::ResourceContent;

/// Version 1 system text.
pub struct V1SystemResource;

impl ResourceDefinition for V1SystemResource {
    const URI: &'static str = "prompt://sas-to-python/v1/system";
    const NAME: &'static str = "SAS to Python v1 - system";
    const DESCRIPTION: &'static str = "Translation rules of prompt version 1 (system role)";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(sas_to_python_v1::SYSTEM_MESSAGE.to_string())
    }
}

/// Version 1 example request.
pub struct V1UserResource;

impl ResourceDefinition for V1UserResource {
    const URI: &'static str = "prompt://sas-to-python/v1/user";
    const NAME: &'static str = "SAS to Python v1 - user";
    const DESCRIPTION: &'static str = "Concrete example request of prompt version 1 (user role)";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(sas_to_python_v1::USER_MESSAGE.to_string())
    }
}

/// Version 2 system text.
pub struct V2SystemResource;

impl ResourceDefinition for V2SystemResource {
    const URI: &'static str = "prompt://sas-to-python/v2/system";
    const NAME: &'static str = "SAS to Python v2 - system";
    const DESCRIPTION: &'static str = "Translation rules of prompt version 2 (system role)";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(sas_to_python_v2::SYSTEM_PROMPT.to_string())
    }
}

/// Version 2 request template.
pub struct V2UserResource;

impl ResourceDefinition for V2UserResource {
    const URI: &'static str = "prompt://sas-to-python/v2/user";
    const NAME: &'static str = "SAS to Python v2 - user";
    const DESCRIPTION: &'static str =
        "Request template of prompt version 2 (user role); replace the placeholder before sending";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(sas_to_python_v2::USER_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::PLACEHOLDER;
    use crate::domains::resources::definitions::PROMPT_URI_PREFIX;

    fn text_of(content: ResourceContent) -> String {
        match content {
            ResourceContent::Text(text) => text,
            _ => panic!("Expected Text content"),
        }
    }

    #[test]
    fn test_uris_share_prefix() {
        for uri in [
            V1SystemResource::URI,
            V1UserResource::URI,
            V2SystemResource::URI,
            V2UserResource::URI,
        ] {
            assert!(uri.starts_with(PROMPT_URI_PREFIX));
        }
    }

    #[test]
    fn test_contents_match_assets() {
        assert_eq!(
            text_of(V1SystemResource::content()),
            sas_to_python_v1::SYSTEM_MESSAGE
        );
        assert_eq!(text_of(V2SystemResource::content()), sas_to_python_v2::SYSTEM_PROMPT);
    }

    #[test]
    fn test_placeholder_only_in_v2_user() {
        assert!(!text_of(V1UserResource::content()).contains(PLACEHOLDER));
        assert!(text_of(V2UserResource::content()).contains(PLACEHOLDER));
    }
}
