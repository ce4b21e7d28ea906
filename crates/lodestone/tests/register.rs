//! Registry behavior through the public API: built-in extensions,
//! custom lookups, and re-registration.

use lodestone::{Error, Lodestone, Request};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_supported_file_extensions_lists_built_ins_in_order() {
    let resolver = Lodestone::new();
    assert_eq!(
        resolver.supported_file_extensions(),
        vec![".js", ".scss", ".sass", ".styl"]
    );
}

#[test]
fn test_custom_lookup_result_is_passed_through_unmodified() {
    let mut resolver = Lodestone::new();
    resolver.register(
        ".foobar",
        |_: &Request| -> Result<Option<PathBuf>, Error> {
            Ok(Some(PathBuf::from("/custom/result.foobar")))
        },
    );

    let request = Request::new("./whatever", "module.foobar", ".");
    let found = resolver.resolve(&request).unwrap().unwrap();
    assert_eq!(found, PathBuf::from("/custom/result.foobar"));
}

#[test]
fn test_registering_accepts_extensions_without_the_dot() {
    let mut resolver = Lodestone::new();
    resolver.register(
        "foobar",
        |_: &Request| -> Result<Option<PathBuf>, Error> { Ok(Some(PathBuf::from("/r"))) },
    );

    assert!(resolver.supported_file_extensions().contains(&".foobar"));
    let request = Request::new("x", "module.foobar", ".");
    assert!(resolver.resolve(&request).unwrap().is_some());
}

#[test]
fn test_re_registering_does_not_duplicate_the_entry() {
    let mut resolver = Lodestone::new();
    let noop = |_: &Request| -> Result<Option<PathBuf>, Error> { Ok(None) };
    resolver.register(".foobar", noop);
    resolver.register(".foobar", noop);

    let extensions = resolver.supported_file_extensions();
    let count = extensions.iter().filter(|ext| **ext == ".foobar").count();
    assert_eq!(count, 1);
    assert_eq!(extensions.len(), 5);
}

#[test]
fn test_registering_a_custom_extension_keeps_built_ins_working() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("foo.js"), "var bar = require('./bar');").unwrap();
    fs::write(dir.path().join("bar.js"), "module.exports = 1;").unwrap();

    let mut resolver = Lodestone::new();
    resolver.register(
        ".foobar",
        |_: &Request| -> Result<Option<PathBuf>, Error> { Ok(None) },
    );

    let request = Request::new("./bar", dir.path().join("foo.js"), dir.path());
    let found = resolver.resolve(&request).unwrap().unwrap();
    assert!(found.ends_with("bar.js"));
}

#[test]
fn test_re_registering_a_built_in_replaces_its_machinery() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("foo.js"), "var bar = require('./bar');").unwrap();
    fs::write(dir.path().join("bar.js"), "module.exports = 1;").unwrap();

    let mut resolver = Lodestone::new();
    resolver.register(
        ".js",
        |_: &Request| -> Result<Option<PathBuf>, Error> {
            Ok(Some(PathBuf::from("/overridden")))
        },
    );

    let request = Request::new("./bar", dir.path().join("foo.js"), dir.path());
    let found = resolver.resolve(&request).unwrap().unwrap();
    assert_eq!(found, PathBuf::from("/overridden"));
    assert_eq!(resolver.supported_file_extensions().len(), 4);
}

#[test]
fn test_unregistered_extension_resolves_to_none() {
    let resolver = Lodestone::new();
    let request = Request::new("./bar", "foo.coffee", ".");
    assert_eq!(resolver.resolve(&request).unwrap(), None);
}

#[test]
fn test_filename_without_extension_resolves_to_none() {
    let resolver = Lodestone::new();
    let request = Request::new("./bar", "Rakefile", ".");
    assert_eq!(resolver.resolve(&request).unwrap(), None);
}
