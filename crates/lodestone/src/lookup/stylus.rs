use super::probe;
use super::Lookup;
use crate::error::Error;
use crate::request::Request;
use std::path::PathBuf;

/// Sibling-file lookup for Stylus sources: the partial as written,
/// with `.styl` appended, or as a directory holding `index.styl`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StylusLookup;

impl Lookup for StylusLookup {
    fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error> {
        let base = probe::containing_dir(&request.filename).join(&request.partial);
        let mut candidates = Vec::new();
        if request.partial.ends_with(".styl") {
            candidates.push(base.clone());
        } else {
            candidates.push(probe::append_extension(&base, ".styl"));
        }
        candidates.push(base.join("index.styl"));
        Ok(probe::first_existing(&candidates))
    }
}
