//! Deployment configuration.
//!
//! Decides which linked optional modules a deployment actually carries.
//! Validated at load time, with defaults for every optional field.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BazError, Result};
use crate::types::ModuleName;

/// Deployment configuration.
///
/// ```toml
/// name = "baz"
///
/// [modules]
/// disabled = ["com.example.bar.Bar"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Deployment name (alphanumerics, hyphens, underscores).
    #[serde(default = "default_name")]
    pub name: String,

    /// Optional module settings.
    #[serde(default)]
    pub modules: ModulesConfig,
}

fn default_name() -> String {
    "baz".to_string()
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            modules: ModulesConfig::default(),
        }
    }
}

impl DeploymentConfig {
    /// Creates a configuration with the given deployment name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modules: ModulesConfig::default(),
        }
    }

    /// Marks a module as disabled for this deployment.
    #[must_use]
    pub fn disable(mut self, module: ModuleName) -> Self {
        if !self.modules.disabled.contains(&module) {
            self.modules.disabled.push(module);
        }
        self
    }

    /// Returns true if the module is disabled.
    #[must_use]
    pub fn is_disabled(&self, module: &ModuleName) -> bool {
        self.modules.disabled.contains(module)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(BazError::config("name cannot be empty"));
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(BazError::config(
                "name must contain only alphanumeric characters, hyphens, and underscores",
            ));
        }
        self.modules.validate()
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text cannot be parsed or is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), name = %config.name, "loaded deployment config");
        Ok(config)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Optional module settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// Modules excluded from the deployment even when linked in.
    #[serde(default)]
    pub disabled: Vec<ModuleName>,
}

impl ModulesConfig {
    /// Validates module settings.
    ///
    /// # Errors
    /// Returns an error if a module is listed twice.
    pub fn validate(&self) -> Result<()> {
        for (i, module) in self.disabled.iter().enumerate() {
            if self.disabled[..i].contains(module) {
                return Err(BazError::config(format!(
                    "module {module} is disabled more than once"
                )));
            }
        }
        Ok(())
    }
}
