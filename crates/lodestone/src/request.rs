use crate::config::LoaderConfig;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// A single resolution request.
///
/// Built once per partial and handed to the selected lookup unchanged;
/// lookups see every field, including options they do not interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// The dependency reference exactly as written in source.
    pub partial: String,

    /// File containing the reference. Its extension picks the lookup
    /// and its directory anchors relative partials.
    pub filename: PathBuf,

    /// Project root for non-relative resolution.
    pub directory: PathBuf,

    /// Inline module-loader settings. Wins over `config_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<LoaderConfig>,

    /// Path to a module-loader config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<PathBuf>,

    /// Path to a bundler config file. Its presence routes `.js`
    /// partials to the bundler lookup before any classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpack_config: Option<PathBuf>,

    /// Open-ended options for custom lookups, forwarded untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Request {
    /// Create a request for `partial` as referenced from `filename`,
    /// with `directory` as the project root.
    pub fn new(
        partial: impl Into<String>,
        filename: impl Into<PathBuf>,
        directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            partial: partial.into(),
            filename: filename.into(),
            directory: directory.into(),
            config: None,
            config_path: None,
            webpack_config: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set inline loader settings.
    #[must_use]
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the loader config file path.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Set the bundler config file path.
    #[must_use]
    pub fn with_webpack_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.webpack_config = Some(path.into());
        self
    }

    /// Attach an option for custom lookups.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Whether loader settings were supplied, inline or by path.
    #[must_use]
    pub fn has_loader_config(&self) -> bool {
        self.config.is_some() || self.config_path.is_some()
    }

    /// The effective loader settings: inline `config` when present,
    /// otherwise loaded from `config_path`.
    pub fn loader_config(&self) -> Result<Option<LoaderConfig>, Error> {
        if let Some(config) = &self.config {
            return Ok(Some(config.clone()));
        }
        match &self.config_path {
            Some(path) => LoaderConfig::from_file(path).map(Some),
            None => Ok(None),
        }
    }
}
