use super::{AmdLookup, CommonJsLookup, Es6Lookup, Lookup, WebpackLookup};
use crate::error::Error;
use crate::request::Request;
use moddef::ModuleSystem;
use std::path::PathBuf;
use tracing::debug;

/// Strategy selection for `.js` files.
///
/// A bundler config on the request routes straight to the bundler
/// lookup. Otherwise the referencing file's own syntax decides: ES6
/// sources use the generic lookup and retry as CommonJS when it comes
/// up empty, AMD sources use the requirejs lookup, everything else
/// resolves Node-style. ES6 sources carrying loader settings are
/// treated as AMD.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsLookup;

impl Lookup for JsLookup {
    fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error> {
        if request.webpack_config.is_some() {
            debug!(partial = %request.partial, "Bundler config present, using bundler lookup");
            return WebpackLookup.resolve(request);
        }

        // An unreadable file classifies as CommonJS
        let source = std::fs::read_to_string(&request.filename).unwrap_or_default();
        let module_system = moddef::detect(&source);
        debug!(
            filename = %request.filename.display(),
            module_system = module_system.as_str(),
            "Classified module system"
        );

        match module_system {
            ModuleSystem::Es6 if request.has_loader_config() => AmdLookup.resolve(request),
            ModuleSystem::Es6 => {
                let found = Es6Lookup.resolve(request)?;
                if found.is_some() {
                    return Ok(found);
                }
                debug!(partial = %request.partial, "Empty ES6 result, retrying as CommonJS");
                CommonJsLookup.resolve(request)
            }
            ModuleSystem::Amd => AmdLookup.resolve(request),
            ModuleSystem::CommonJs => CommonJsLookup.resolve(request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_es6_sources_use_the_generic_lookup() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("es6")).unwrap();
        fs::write(dir.path().join("es6/foo.js"), "import bar from './bar';").unwrap();
        fs::write(dir.path().join("es6/bar.js"), "export default 1;").unwrap();

        let request = Request::new("./bar", dir.path().join("es6/foo.js"), dir.path());
        let found = JsLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("es6/bar.js"));
    }

    #[test]
    fn test_es6_sources_with_loader_config_go_through_amd() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("es6")).unwrap();
        fs::write(dir.path().join("es6/foo.js"), "import bar from './bar';").unwrap();
        fs::write(dir.path().join("es6/bar.js"), "export default 1;").unwrap();

        let request = Request::new("./bar", dir.path().join("es6/foo.js"), dir.path())
            .with_config(crate::config::LoaderConfig::new().with_base_url("./"));
        let found = JsLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("es6/bar.js"));
    }

    #[test]
    fn test_empty_es6_results_retry_as_commonjs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("foo.js"), "export default require('pkg');").unwrap();
        let pkg = dir.path().join("node_modules/pkg");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("index.js"), "module.exports = 1;").unwrap();

        let request = Request::new("pkg", dir.path().join("foo.js"), dir.path());
        let found = JsLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("node_modules/pkg/index.js"));
    }

    #[test]
    fn test_amd_sources_use_the_requirejs_lookup() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("foo.js"),
            "define(['./bar'], function (bar) {});",
        )
        .unwrap();
        fs::write(dir.path().join("bar.js"), "define({});").unwrap();

        let request = Request::new("./bar", dir.path().join("foo.js"), dir.path());
        let found = JsLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("bar.js"));
    }

    #[test]
    fn test_unreadable_sources_default_to_commonjs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bar.js"), "module.exports = 1;").unwrap();

        let request = Request::new("./bar", dir.path().join("no-such-file.js"), dir.path());
        let found = JsLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("bar.js"));
    }

    #[test]
    fn test_bundler_config_preempts_classification() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("foo.js"), "import R from 'R';").unwrap();
        let pkg = dir.path().join("node_modules/resolve");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("index.js"), "module.exports = 1;").unwrap();
        fs::write(
            dir.path().join("webpack.config.js"),
            "module.exports = { resolve: { alias: { R: 'resolve' } } };",
        )
        .unwrap();

        let request = Request::new("R", dir.path().join("foo.js"), dir.path())
            .with_webpack_config(dir.path().join("webpack.config.js"));
        let found = JsLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("node_modules/resolve/index.js"));
    }
}
