use crate::{Error, Result};
use std::path::Path;

pub const ILLUSTRATION: &str = include_str!("../data/prompts/illustration.txt");

const PARAGRAPH_PLACEHOLDER: &str = "{{paragraph}}";

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Template used to turn one paragraph into an image prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    template: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: ILLUSTRATION.to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn new(template: String) -> Result<Self> {
        if !template.contains(PARAGRAPH_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "Prompt template must contain the {} placeholder",
                PARAGRAPH_PLACEHOLDER
            )));
        }
        Ok(Self { template })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let template = std::fs::read_to_string(path).map_err(|source| Error::Input {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(template.trim_end().to_string())
    }

    pub fn build(&self, paragraph: &str) -> String {
        render(&self.template, &[("paragraph", paragraph)])
    }
}
