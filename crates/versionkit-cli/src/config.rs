use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// A version attribute declared on a record.
#[derive(Debug, Deserialize, Clone)]
pub struct FieldConfig {
    pub record: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Last persisted version; absent for a record that was never written.
    pub current: Option<String>,
}

impl FieldConfig {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.record, self.name)
    }
}

impl Config {
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        Self::from_toml(&contents).with_context(|| format!("loading config {path}"))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.fields.is_empty() {
            return Err(anyhow::anyhow!("no version fields configured"));
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(anyhow::anyhow!(format!(
                    "record {} has a version field with an empty name",
                    field.record
                )));
            }
            if !seen.insert((field.record.as_str(), field.name.as_str())) {
                return Err(anyhow::anyhow!(format!(
                    "version field {} declared more than once",
                    field.qualified_name()
                )));
            }
        }
        Ok(())
    }
}
