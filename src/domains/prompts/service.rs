//! Prompt service implementation.
//!
//! The PromptService keeps the registered prompt versions and turns them into
//! MCP prompt results, substituting the SAS source where a version needs it.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt version does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use super::definitions::{PromptDefinition, SasToPythonV1Prompt};
use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::{PromptTemplate, RenderedPrompt};
use crate::core::config::PromptsConfig;

/// Service for listing and rendering prompts.
pub struct PromptService {
    /// Registry of available prompts.
    /// Key: prompt name, Value: prompt template
    prompts: BTreeMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with the given configuration.
    pub fn new(config: PromptsConfig) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: BTreeMap::new(),
        };

        service.register_from_registry(&config);

        service
    }

    /// Register all prompts from the registry.
    fn register_from_registry(&mut self, config: &PromptsConfig) {
        info!("Registering prompts from registry");
        for template in get_all_prompts() {
            if !config.include_v1 && template.name == SasToPythonV1Prompt::NAME {
                info!("Skipping prompt: {} (disabled by configuration)", template.name);
                continue;
            }
            self.register_prompt(template);
        }
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        info!("Registering prompt: {} (v{})", template.name, template.version);
        self.prompts.insert(template.name.clone(), template);
    }

    /// Names of the registered prompts, in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.prompts.keys().map(String::as_str).collect()
    }

    fn template(&self, name: &str) -> Result<&PromptTemplate, PromptError> {
        self.prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))
    }

    /// The raw system text of a prompt.
    pub fn system_message(&self, name: &str) -> Result<&str, PromptError> {
        Ok(&self.template(name)?.system_message)
    }

    /// The raw user text of a prompt, placeholder included.
    pub fn user_message(&self, name: &str) -> Result<&str, PromptError> {
        Ok(self.template(name)?.request.text())
    }

    /// Render a prompt into its system/user pair.
    pub fn render(
        &self,
        name: &str,
        arguments: &HashMap<String, String>,
    ) -> Result<RenderedPrompt, PromptError> {
        let template = self.template(name)?;

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let rendered = template.render(arguments)?;
        debug!(
            "Rendered prompt {}: {} system bytes, {} user bytes",
            name,
            rendered.system.len(),
            rendered.user.len()
        );
        Ok(rendered)
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: Some(format!("SAS to Python (v{})", template.version)),
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with the SAS source substituted.
    ///
    /// MCP prompt messages have no system role, so the system text is sent as
    /// the leading user message and the request follows it.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let arguments = arguments.unwrap_or_default();
        let rendered = self.render(name, &arguments)?;
        let template = self.template(name)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![
                PromptMessage::new_text(PromptMessageRole::User, rendered.system),
                PromptMessage::new_text(PromptMessageRole::User, rendered.user),
            ],
        })
    }
}
