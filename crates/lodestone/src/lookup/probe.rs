//! Filesystem probing shared by the lookup strategies.

use std::path::{Path, PathBuf};

/// Extension probe order for the JS-family lookups.
pub(crate) const JS_EXTENSIONS: &[&str] = &[".js", ".json"];

/// Whether a partial is relative to the file that references it.
pub(crate) fn is_relative(partial: &str) -> bool {
    partial == "." || partial == ".." || partial.starts_with("./") || partial.starts_with("../")
}

pub(crate) fn is_absolute(partial: &str) -> bool {
    Path::new(partial).is_absolute()
}

/// Directory of the file a request came from.
pub(crate) fn containing_dir(filename: &Path) -> PathBuf {
    match filename.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Extension of `filename` with its leading dot, `None` when absent.
pub(crate) fn file_extension(filename: &Path) -> Option<String> {
    filename
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
}

/// Canonicalize a path known to exist, keeping it as joined when the
/// filesystem refuses.
pub(crate) fn canonical(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Append an extension without clobbering an existing one, so a
/// partial like `lodash.assign` probes as `lodash.assign.js`.
pub(crate) fn append_extension(base: &Path, extension: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", base.display(), extension))
}

/// First candidate that exists as a file, canonicalized.
pub(crate) fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .map(|candidate| canonical(candidate))
}

/// Node-style load-as-file: the exact path, then each extension.
pub(crate) fn load_as_file(base: &Path, extensions: &[&str]) -> Option<PathBuf> {
    if base.is_file() {
        return Some(canonical(base));
    }
    for ext in extensions {
        let candidate = append_extension(base, ext);
        if candidate.is_file() {
            return Some(canonical(&candidate));
        }
    }
    None
}

/// Node-style load-as-directory: `package.json` main, then `index.*`.
pub(crate) fn load_as_directory(dir: &Path, extensions: &[&str]) -> Option<PathBuf> {
    if let Some(main) = read_package_main(&dir.join("package.json")) {
        let main_path = dir.join(main);
        if let Some(file) = load_as_file(&main_path, extensions) {
            return Some(file);
        }
        if main_path.is_dir() {
            if let Some(index) = load_index(&main_path, extensions) {
                return Some(index);
            }
        }
    }
    load_index(dir, extensions)
}

/// load-as-file, then load-as-directory.
pub(crate) fn load_path(base: &Path, extensions: &[&str]) -> Option<PathBuf> {
    load_as_file(base, extensions).or_else(|| load_as_directory(base, extensions))
}

fn load_index(dir: &Path, extensions: &[&str]) -> Option<PathBuf> {
    for ext in extensions {
        let index = dir.join(format!("index{ext}"));
        if index.is_file() {
            return Some(canonical(&index));
        }
    }
    None
}

// A missing or broken package.json falls through to index probing.
fn read_package_main(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let json: serde_json::Value = serde_json::from_str(&content).ok()?;
    json.get("main")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}
