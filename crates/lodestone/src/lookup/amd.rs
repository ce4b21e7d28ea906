use super::probe;
use super::Lookup;
use crate::error::Error;
use crate::request::Request;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// requirejs-flavored lookup.
///
/// Loader-plugin prefixes (`text!tmpl/home.html`) name the resource
/// after the last `!`. Module ids are remapped through the loader
/// config's `paths` and anchored at `baseUrl`, itself resolved from the
/// config file's directory when `config_path` is given and from the
/// project directory otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmdLookup;

impl Lookup for AmdLookup {
    fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error> {
        let resource = strip_plugin_prefix(&request.partial);

        if probe::is_relative(resource) {
            let base = probe::containing_dir(&request.filename).join(resource);
            return Ok(probe::load_path(&base, probe::JS_EXTENSIONS));
        }

        if probe::is_absolute(resource) {
            return Ok(probe::load_path(Path::new(resource), probe::JS_EXTENSIONS));
        }

        let config = request.loader_config()?.unwrap_or_default();
        let module_id = remap_paths(resource, &config.paths);

        let root = match &request.config_path {
            Some(path) => probe::containing_dir(path),
            None => request.directory.clone(),
        };
        let base = match &config.base_url {
            Some(base_url) => root.join(base_url).join(&module_id),
            None => root.join(&module_id),
        };
        Ok(probe::load_path(&base, probe::JS_EXTENSIONS))
    }
}

/// Drop loader-plugin prefixes, keeping what follows the last `!`.
fn strip_plugin_prefix(partial: &str) -> &str {
    partial
        .rsplit_once('!')
        .map_or(partial, |(_, resource)| resource)
}

/// Remap a module id through `paths`. The longest key matching the id
/// exactly or as a segment prefix wins, and the remainder re-attaches.
fn remap_paths(module_id: &str, paths: &HashMap<String, String>) -> String {
    let mut best: Option<(&str, &str)> = None;
    for (key, target) in paths {
        let matches = module_id == key.as_str()
            || (module_id.starts_with(key.as_str())
                && module_id.as_bytes().get(key.len()) == Some(&b'/'));
        if matches && best.map_or(true, |(k, _)| key.len() > k.len()) {
            best = Some((key, target));
        }
    }
    match best {
        Some((key, target)) if module_id.len() == key.len() => target.to_string(),
        Some((key, target)) => format!("{target}{}", &module_id[key.len()..]),
        None => module_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoaderConfig;
    use std::fs;

    fn paths(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_strips_plugin_prefixes() {
        assert_eq!(strip_plugin_prefix("hgn!resolve"), "resolve");
        assert_eq!(strip_plugin_prefix("a!b!c"), "c");
        assert_eq!(strip_plugin_prefix("resolve"), "resolve");
    }

    #[test]
    fn test_remaps_exact_and_prefix_ids() {
        let paths = paths(&[("views", "src/views"), ("views/admin", "src/admin")]);
        assert_eq!(remap_paths("views", &paths), "src/views");
        assert_eq!(remap_paths("views/home", &paths), "src/views/home");
        assert_eq!(remap_paths("views/admin/panel", &paths), "src/admin/panel");
        assert_eq!(remap_paths("viewset", &paths), "viewset");
    }

    #[test]
    fn test_resolves_relative_ids_against_the_referencing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("js")).unwrap();
        fs::write(dir.path().join("js/bar.js"), "define({});").unwrap();

        let request = Request::new("./bar", dir.path().join("js/foo.js"), dir.path());
        let found = AmdLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("js/bar.js"));
    }

    #[test]
    fn test_resolves_ids_through_base_url() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("js/lib")).unwrap();
        fs::write(dir.path().join("js/lib/mod.js"), "define({});").unwrap();

        let config = LoaderConfig::new().with_base_url("js");
        let request = Request::new("lib/mod", dir.path().join("main.js"), dir.path())
            .with_config(config);
        let found = AmdLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("js/lib/mod.js"));
    }

    #[test]
    fn test_anchors_at_the_config_file_when_loaded_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("app/assets")).unwrap();
        fs::write(dir.path().join("app/assets/thing.js"), "define({});").unwrap();
        fs::write(
            dir.path().join("app/require.config.js"),
            "require.config({ baseUrl: './assets' });",
        )
        .unwrap();

        let request = Request::new("thing", dir.path().join("elsewhere/main.js"), dir.path())
            .with_config_path(dir.path().join("app/require.config.js"));
        let found = AmdLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("app/assets/thing.js"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::new("thing", dir.path().join("main.js"), dir.path())
            .with_config_path(dir.path().join("no-such-config.js"));
        assert!(AmdLookup.resolve(&request).is_err());
    }
}
