//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the ExampleRequest it
//! carries, plus the one substitution the prompts support: replacing the
//! literal SAS placeholder with caller-supplied source.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::definitions::sas_to_python_v2::{PLACEHOLDER, SAS_CODE_ARG};
use super::error::PromptError;

/// The user-role text of a prompt.
///
/// Either fully concrete or a template holding [`PLACEHOLDER`]. Placeholder
/// presence is read from the text, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRequest {
    text: String,
}

impl ExampleRequest {
    /// Wrap a request text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text, placeholder included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of placeholder occurrences in the text.
    pub fn placeholder_count(&self) -> usize {
        self.text.matches(PLACEHOLDER).count()
    }

    /// Whether the caller must substitute SAS source before sending.
    pub fn has_placeholder(&self) -> bool {
        self.text.contains(PLACEHOLDER)
    }

    /// Produce the sendable request text.
    ///
    /// Concrete requests come back unchanged. For templates the single
    /// placeholder is replaced by `sas_code` verbatim.
    pub fn fill(&self, sas_code: &str) -> Result<String, PromptError> {
        if !self.has_placeholder() {
            return Ok(self.text.clone());
        }

        if sas_code.trim().is_empty() {
            return Err(PromptError::invalid_argument(
                SAS_CODE_ARG,
                "SAS source must not be empty",
            ));
        }

        if sas_code.contains(PLACEHOLDER) {
            return Err(PromptError::invalid_argument(
                SAS_CODE_ARG,
                format!("SAS source must not contain the placeholder {}", PLACEHOLDER),
            ));
        }

        Ok(self.text.replacen(PLACEHOLDER, sas_code, 1))
    }
}

/// A system/user text pair ready to be sent to a completion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    /// Instructions for the system role.
    pub system: String,

    /// Request for the user role, with no placeholder left.
    pub user: String,
}

/// A named, versioned prompt.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// Revision number of the prompt text.
    pub version: u32,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// Instructions for the system role.
    pub system_message: String,

    /// The example request for the user role.
    pub request: ExampleRequest,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        version: u32,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        system_message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            description,
            arguments,
            system_message: system_message.into(),
            request: ExampleRequest::new(user_message),
        }
    }

    /// Render the prompt with the given arguments.
    ///
    /// Templates need the `sas_code` argument; concrete prompts ignore
    /// arguments entirely.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<RenderedPrompt, PromptError> {
        let user = if self.request.has_placeholder() {
            let sas_code = arguments
                .get(SAS_CODE_ARG)
                .ok_or_else(|| PromptError::missing_argument(SAS_CODE_ARG))?;
            self.request.fill(sas_code)?
        } else {
            self.request.text().to_string()
        };

        Ok(RenderedPrompt {
            system: self.system_message.clone(),
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "Translate:\n```sas\n[PASTE YOUR SAS CODE HERE]\n";

    fn template_prompt() -> PromptTemplate {
        PromptTemplate::new("test", 2, None, vec![], "rules", TEMPLATE)
    }

    #[test]
    fn test_concrete_request_has_no_placeholder() {
        let request = ExampleRequest::new("DATA a; SET b; RUN;");
        assert!(!request.has_placeholder());
        assert_eq!(request.placeholder_count(), 0);
        assert_eq!(request.fill("ignored").unwrap(), "DATA a; SET b; RUN;");
    }

    #[test]
    fn test_fill_replaces_placeholder() {
        let request = ExampleRequest::new(TEMPLATE);
        assert_eq!(request.placeholder_count(), 1);

        let sas = "PROC SORT DATA=sales; BY region; RUN;";
        let filled = request.fill(sas).unwrap();
        assert!(filled.contains(sas));
        assert!(!filled.contains(PLACEHOLDER));
        assert!(filled.starts_with("Translate:\n```sas\n"));
    }

    #[test]
    fn test_fill_v2_template_inserts_code_verbatim() {
        use crate::domains::prompts::definitions::sas_to_python_v2::USER_MESSAGE;

        let sas = concat!(
            "%let cutoff = 100;\n",
            "DATA out_$; SET in; /* {not a format arg} */\n",
            "  label = \"`quoted` $&cutoff {}\";\n",
            "  if amount > &cutoff then flag = '${x}';\n",
            "RUN;"
        );

        let filled = ExampleRequest::new(USER_MESSAGE).fill(sas).unwrap();
        let (before, after) = USER_MESSAGE.split_once(PLACEHOLDER).unwrap();

        assert_eq!(filled, format!("{}{}{}", before, sas, after));
        assert_eq!(filled.matches(sas).count(), 1);
        assert!(!filled.contains(PLACEHOLDER));
    }

    #[test]
    fn test_fill_rejects_blank_code() {
        let request = ExampleRequest::new(TEMPLATE);
        let err = request.fill("   \n").unwrap_err();
        assert!(matches!(err, PromptError::InvalidArgument(ref arg, _) if arg == "sas_code"));
    }

    #[test]
    fn test_fill_rejects_placeholder_in_code() {
        let request = ExampleRequest::new(TEMPLATE);
        assert!(request.fill(PLACEHOLDER).is_err());
    }

    #[test]
    fn test_render_template_with_code() {
        let mut args = HashMap::new();
        args.insert("sas_code".to_string(), "DATA x; RUN;".to_string());

        let rendered = template_prompt().render(&args).unwrap();
        assert_eq!(rendered.system, "rules");
        assert!(rendered.user.contains("DATA x; RUN;"));
    }

    #[test]
    fn test_render_template_without_code() {
        let err = template_prompt().render(&HashMap::new()).unwrap_err();
        assert!(matches!(err, PromptError::MissingArgument(ref arg) if arg == "sas_code"));
    }

    #[test]
    fn test_render_concrete_ignores_arguments() {
        let prompt = PromptTemplate::new("test", 1, None, vec![], "rules", "concrete");
        let mut args = HashMap::new();
        args.insert("sas_code".to_string(), "unused".to_string());

        let rendered = prompt.render(&args).unwrap();
        assert_eq!(rendered.user, "concrete");
    }
}
