use super::probe;
use super::Lookup;
use crate::error::Error;
use crate::request::Request;
use std::path::{Path, PathBuf};

/// Node-style lookup.
///
/// Relative and absolute partials load as file or directory. Bare
/// partials walk `node_modules` upward from the referencing file, and
/// as a last resort probe straight under the project directory so
/// sibling packages inside the project resolve too.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonJsLookup;

impl Lookup for CommonJsLookup {
    fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error> {
        let partial = request.partial.as_str();

        if probe::is_relative(partial) {
            let base = probe::containing_dir(&request.filename).join(partial);
            return Ok(probe::load_path(&base, probe::JS_EXTENSIONS));
        }

        if probe::is_absolute(partial) {
            return Ok(probe::load_path(Path::new(partial), probe::JS_EXTENSIONS));
        }

        let start = probe::containing_dir(&request.filename);
        let mut current: Option<&Path> = Some(&start);
        while let Some(dir) = current {
            let base = dir.join("node_modules").join(partial);
            if let Some(found) = probe::load_path(&base, probe::JS_EXTENSIONS) {
                return Ok(Some(found));
            }
            current = dir.parent();
        }

        Ok(probe::load_path(
            &request.directory.join(partial),
            probe::JS_EXTENSIONS,
        ))
    }
}
