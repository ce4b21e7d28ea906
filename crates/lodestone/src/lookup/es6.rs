use super::probe;
use super::Lookup;
use crate::error::Error;
use crate::request::Request;
use std::path::PathBuf;

/// Plain path-joining lookup for ES6 sources.
///
/// Relative partials resolve against the referencing file, absolute
/// ones stand alone, and anything else joins onto the project
/// directory. There is no `node_modules` traversal here; a bare
/// partial that only lives in `node_modules` comes back `None` and
/// reaches the CommonJS lookup through the dispatcher's fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct Es6Lookup;

impl Lookup for Es6Lookup {
    fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error> {
        let partial = request.partial.as_str();
        let base = if probe::is_relative(partial) {
            probe::containing_dir(&request.filename).join(partial)
        } else if probe::is_absolute(partial) {
            PathBuf::from(partial)
        } else {
            request.directory.join(partial)
        };
        Ok(probe::load_path(&base, probe::JS_EXTENSIONS))
    }
}
