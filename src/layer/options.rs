use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::CompileOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerOptions {
    pub name: Option<String>,
    pub sensitive: bool,
    pub strict: bool,
    pub end: bool,
    pub ignore_captures: bool,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            name: None,
            sensitive: false,
            strict: false,
            end: true,
            ignore_captures: false,
        }
    }
}

impl LayerOptions {
    pub fn builder() -> LayerOptionsBuilder {
        LayerOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), LayerOptionsError> {
        if self
            .name
            .as_ref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(LayerOptionsError::EmptyName);
        }
        Ok(())
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            sensitive: self.sensitive,
            strict: self.strict,
            end: self.end,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct LayerOptionsBuilder {
    options: LayerOptions,
}

impl LayerOptionsBuilder {
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.options.name = Some(name.into());
        self
    }

    pub fn sensitive(mut self, value: bool) -> Self {
        self.options.sensitive = value;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    pub fn end(mut self, value: bool) -> Self {
        self.options.end = value;
        self
    }

    pub fn ignore_captures(mut self, value: bool) -> Self {
        self.options.ignore_captures = value;
        self
    }

    pub fn build(self) -> Result<LayerOptions, LayerOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerOptionsError {
    #[error("route name must not be empty")]
    EmptyName,
}
