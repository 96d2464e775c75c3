//! Prompt Registry - central registration of all prompt versions.
//!
//! When adding a new prompt version:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{PromptDefinition, SasToPythonV1Prompt, SasToPythonV2Prompt};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        P::VERSION,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::system_message(),
        P::user_message(),
    )
}

/// Get all registered prompts as PromptTemplates, oldest version first.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<SasToPythonV1Prompt>(),
        build_template::<SasToPythonV2Prompt>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 2);

        assert_eq!(prompts[0].name, "sas_to_python_v1");
        assert_eq!(prompts[0].version, 1);
        assert!(!prompts[0].request.has_placeholder());

        assert_eq!(prompts[1].name, "sas_to_python_v2");
        assert_eq!(prompts[1].version, 2);
        assert_eq!(prompts[1].request.placeholder_count(), 1);
    }

    #[test]
    fn test_prompt_names_are_unique() {
        let mut names: Vec<_> = get_all_prompts().into_iter().map(|p| p.name).collect();
        names.dedup();
        assert_eq!(names, vec!["sas_to_python_v1", "sas_to_python_v2"]);
    }
}
