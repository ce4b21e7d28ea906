use super::probe;
use super::Lookup;
use crate::config::WebpackConfig;
use crate::error::Error;
use crate::request::Request;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lookup driven by a webpack config file.
///
/// Loader chains are stripped (`style-loader!./thing` names the module
/// last), `resolve.alias` is applied, then the specifier is searched
/// under `node_modules` from the config file's directory upward and
/// under any `resolve.modules` roots. Extension probing follows
/// `resolve.extensions`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpackLookup;

impl Lookup for WebpackLookup {
    fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error> {
        let Some(config_path) = &request.webpack_config else {
            return Ok(None);
        };
        let config = WebpackConfig::from_file(config_path)?;
        let extensions: Vec<&str> = config.extensions.iter().map(String::as_str).collect();

        let specifier = request
            .partial
            .rsplit_once('!')
            .map_or(request.partial.as_str(), |(_, spec)| spec);
        let (specifier, aliased) = config.apply_alias(specifier);
        debug!(
            partial = %request.partial,
            specifier = %specifier,
            aliased,
            "Bundler lookup"
        );

        if probe::is_relative(&specifier) {
            // An alias target is written relative to the config file
            let root = if aliased {
                config.root.clone()
            } else {
                probe::containing_dir(&request.filename)
            };
            return Ok(probe::load_path(&root.join(&specifier), &extensions));
        }

        if probe::is_absolute(&specifier) {
            return Ok(probe::load_path(Path::new(&specifier), &extensions));
        }

        let mut current: Option<&Path> = Some(&config.root);
        while let Some(dir) = current {
            let base = dir.join("node_modules").join(&specifier);
            if let Some(found) = probe::load_path(&base, &extensions) {
                return Ok(Some(found));
            }
            current = dir.parent();
        }

        for module_dir in &config.modules {
            let root = if Path::new(module_dir).is_absolute() {
                PathBuf::from(module_dir)
            } else {
                config.root.join(module_dir)
            };
            if let Some(found) = probe::load_path(&root.join(&specifier), &extensions) {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}
