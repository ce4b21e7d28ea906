use super::probe;
use super::Lookup;
use crate::error::Error;
use crate::request::Request;
use std::path::{Path, PathBuf};

/// Sibling-file lookup for Sass sources.
///
/// Candidates stay within the extension of the referencing file, so an
/// `@import` in a `.scss` file never lands on a `.sass` partial. The
/// `_partial` naming convention and `index` files inside imported
/// directories are both honored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SassLookup;

impl Lookup for SassLookup {
    fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error> {
        let Some(extension) = probe::file_extension(&request.filename) else {
            return Ok(None);
        };
        let dir = probe::containing_dir(&request.filename);
        Ok(probe::first_existing(&candidates(
            &dir,
            &request.partial,
            &extension,
        )))
    }
}

fn candidates(dir: &Path, partial: &str, extension: &str) -> Vec<PathBuf> {
    let base = dir.join(partial);
    let mut list = Vec::new();

    if partial.ends_with(extension) {
        with_underscore_variant(&mut list, base);
        return list;
    }

    with_underscore_variant(&mut list, probe::append_extension(&base, extension));
    list.push(base.join(format!("index{extension}")));
    list.push(base.join(format!("_index{extension}")));
    list
}

// Underscore applies to the basename only, so `sub/bar` also tries
// `sub/_bar`.
fn with_underscore_variant(list: &mut Vec<PathBuf>, path: PathBuf) {
    let underscored = path
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.starts_with('_'))
        .map(|name| path.with_file_name(format!("_{name}")));
    list.push(path);
    if let Some(underscored) = underscored {
        list.push(underscored);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolves_siblings_with_the_referencing_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bar.scss"), "$a: 1;").unwrap();
        fs::write(dir.path().join("bar.sass"), "$a: 1").unwrap();

        let scss = Request::new("bar", dir.path().join("foo.scss"), dir.path());
        let found = SassLookup.resolve(&scss).unwrap().unwrap();
        assert!(found.ends_with("bar.scss"));

        let sass = Request::new("bar", dir.path().join("foo.sass"), dir.path());
        let found = SassLookup.resolve(&sass).unwrap().unwrap();
        assert!(found.ends_with("bar.sass"));
    }

    #[test]
    fn test_resolves_underscored_partials() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/_mixins.scss"), "$a: 1;").unwrap();

        let request = Request::new("sub/mixins", dir.path().join("foo.scss"), dir.path());
        let found = SassLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("sub/_mixins.scss"));
    }

    #[test]
    fn test_resolves_directory_index_partials() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("theme")).unwrap();
        fs::write(dir.path().join("theme/_index.scss"), "$a: 1;").unwrap();

        let request = Request::new("theme", dir.path().join("foo.scss"), dir.path());
        let found = SassLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("theme/_index.scss"));
    }

    #[test]
    fn test_never_crosses_into_the_sibling_dialect() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("only.sass"), "$a: 1").unwrap();

        let request = Request::new("only", dir.path().join("foo.scss"), dir.path());
        assert_eq!(SassLookup.resolve(&request).unwrap(), None);
    }

    #[test]
    fn test_accepts_partials_spelled_with_the_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bar.scss"), "$a: 1;").unwrap();

        let request = Request::new("bar.scss", dir.path().join("foo.scss"), dir.path());
        let found = SassLookup.resolve(&request).unwrap().unwrap();
        assert!(found.ends_with("bar.scss"));
    }
}
