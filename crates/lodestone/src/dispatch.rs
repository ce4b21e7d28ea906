//! Extension dispatch.

use crate::error::Error;
use crate::lookup::{probe, JsLookup, Lookup, SassLookup, StylusLookup};
use crate::registry::ExtensionRegistry;
use crate::request::Request;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// The resolver: an extension registry plus the dispatch that picks a
/// lookup per request.
///
/// A fresh instance carries the built-in lookups for `.js`, `.scss`,
/// `.sass`, and `.styl`. Custom lookups are added, and built-ins
/// replaced, through [`register`](Self::register).
pub struct Lodestone {
    registry: ExtensionRegistry,
}

impl Lodestone {
    /// A resolver with the built-in lookups registered.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = ExtensionRegistry::new();
        registry.insert(".js", Box::new(JsLookup));
        registry.insert(".scss", Box::new(SassLookup));
        registry.insert(".sass", Box::new(SassLookup));
        registry.insert(".styl", Box::new(StylusLookup));
        Self { registry }
    }

    /// Resolve a request to an absolute path.
    ///
    /// Returns `Ok(None)` when the partial does not resolve or the
    /// filename's extension has no registered lookup. Errors surface
    /// only from the lookup itself, a malformed config file for one.
    pub fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error> {
        let Some(extension) = probe::file_extension(&request.filename) else {
            debug!(filename = %request.filename.display(), "Filename has no extension");
            return Ok(None);
        };
        let Some(lookup) = self.registry.get(&extension) else {
            debug!(extension = %extension, "No lookup registered for extension");
            return Ok(None);
        };
        debug!(extension = %extension, partial = %request.partial, "Dispatching");
        lookup.resolve(request)
    }

    /// Bind a lookup to a file extension, replacing any previous one.
    /// The leading dot is optional.
    pub fn register(&mut self, extension: &str, lookup: impl Lookup + 'static) {
        self.registry.insert(extension, Box::new(lookup));
    }

    /// The registered extensions, built-ins first, in registration
    /// order.
    #[must_use]
    pub fn supported_file_extensions(&self) -> Vec<&str> {
        self.registry.extensions().collect()
    }
}

impl Default for Lodestone {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Lodestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lodestone")
            .field("extensions", &self.supported_file_extensions())
            .finish()
    }
}
