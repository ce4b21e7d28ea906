//! Loader and bundler configuration.
//!
//! Config files come in two shapes: plain JSON, or JavaScript carrying a
//! config object literal. JS files are read statically through the
//! [`literal`] extractor; nothing is ever executed.

mod literal;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Markers a loader config object can sit behind in a JS file.
const LOADER_MARKERS: &[&str] = &[
    "require.config",
    "requirejs.config",
    "module.exports",
    "export default",
];

/// Markers a bundler config object can sit behind in a JS file.
const BUNDLER_MARKERS: &[&str] = &["module.exports", "export default"];

/// Module-loader settings in requirejs form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderConfig {
    /// Root all non-relative module ids resolve against.
    pub base_url: Option<String>,
    /// Module id remappings, longest matching segment prefix wins.
    pub paths: HashMap<String, String>,
    /// Fields this crate does not interpret, kept for custom lookups.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

impl LoaderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_path(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.paths.insert(alias.into(), target.into());
        self
    }

    /// Load loader settings from a JSON file or a JS file carrying a
    /// `require.config({...})` call or exported object.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let value = read_config_value(path, LOADER_MARKERS)?;
        serde_json::from_value(value).map_err(|e| parse_error(path, e.to_string()))
    }
}

/// The `resolve` portion of a bundler config, plus the config root.
#[derive(Debug, Clone)]
pub struct WebpackConfig {
    /// Directory containing the config file. Module search and relative
    /// alias targets resolve against it.
    pub root: PathBuf,
    /// `resolve.alias`: exact and prefix remappings. A key ending in `$`
    /// matches the bare specifier only.
    pub alias: HashMap<String, String>,
    /// `resolve.modules`: extra module directories, relative to `root`
    /// unless absolute.
    pub modules: Vec<String>,
    /// `resolve.extensions`: probe list, `.js`/`.json` when unset.
    pub extensions: Vec<String>,
}

impl WebpackConfig {
    /// Load the `resolve` settings from a bundler config file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let value = read_config_value(path, BUNDLER_MARKERS)?;

        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut config = Self {
            root,
            alias: HashMap::new(),
            modules: Vec::new(),
            extensions: Vec::new(),
        };

        if let Some(resolve) = value.get("resolve") {
            if let Some(alias) = resolve.get("alias").and_then(Value::as_object) {
                for (key, target) in alias {
                    if let Some(target) = target.as_str() {
                        config.alias.insert(key.clone(), target.to_string());
                    }
                }
            }
            if let Some(modules) = resolve.get("modules").and_then(Value::as_array) {
                for dir in modules {
                    if let Some(dir) = dir.as_str() {
                        config.modules.push(dir.to_string());
                    }
                }
            }
            if let Some(extensions) = resolve.get("extensions").and_then(Value::as_array) {
                for ext in extensions {
                    if let Some(ext) = ext.as_str() {
                        config.extensions.push(ext.to_string());
                    }
                }
            }
        }

        if config.extensions.is_empty() {
            config.extensions = vec![".js".to_string(), ".json".to_string()];
        }

        Ok(config)
    }

    /// Apply `resolve.alias` to a specifier.
    ///
    /// Returns the remapped specifier and whether an alias fired, so the
    /// caller knows which root a now-relative target belongs to.
    #[must_use]
    pub fn apply_alias(&self, specifier: &str) -> (String, bool) {
        if let Some(target) = self.alias.get(specifier) {
            return (target.clone(), true);
        }

        if let Some(target) = self.alias.get(&format!("{specifier}$")) {
            return (target.clone(), true);
        }

        let mut best: Option<(&str, &str)> = None;
        for (key, target) in &self.alias {
            if key.ends_with('$') {
                continue;
            }
            if specifier.len() > key.len()
                && specifier.starts_with(key.as_str())
                && specifier.as_bytes()[key.len()] == b'/'
                && best.map_or(true, |(k, _)| key.len() > k.len())
            {
                best = Some((key, target));
            }
        }
        if let Some((key, target)) = best {
            return (format!("{target}{}", &specifier[key.len()..]), true);
        }

        (specifier.to_string(), false)
    }
}

/// Read a config file into a `Value`: JSON files directly, JS files via
/// object-literal extraction.
fn read_config_value(path: &Path, markers: &[&str]) -> Result<Value, Error> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        return serde_json::from_str(&source).map_err(|e| parse_error(path, e.to_string()));
    }

    let object = match markers
        .iter()
        .find_map(|marker| literal::object_after(&source, marker))
    {
        Some(object) => Some(object),
        // A config file may also be nothing but the object itself
        None => {
            let stripped = literal::strip_comments(&source);
            literal::balanced_object(stripped.trim_start())
        }
    };

    let Some(object) = object else {
        return Err(parse_error(path, "no config object literal found"));
    };

    literal::parse(&object).map_err(|message| parse_error(path, message))
}

fn parse_error(path: &Path, message: impl Into<String>) -> Error {
    Error::ConfigParse {
        path: path.to_path_buf(),
        message: message.into(),
    }
}
