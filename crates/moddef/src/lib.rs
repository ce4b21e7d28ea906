//! moddef: module-system detection for JavaScript sources.
//!
//! Classifies a source file as AMD, CommonJS, or ES6 by scanning for
//! syntax markers. No AST is built; a single forward pass skips comments
//! and string literals and matches keywords at word boundaries, so
//! `exports.foo` never reads as an `export` declaration and a commented
//! `import` never reads as a module import.
//!
//! # Example
//!
//! ```
//! use moddef::{detect, ModuleSystem};
//!
//! assert_eq!(detect("import x from './x';"), ModuleSystem::Es6);
//! assert_eq!(detect("define(['./x'], function(x) {});"), ModuleSystem::Amd);
//! assert_eq!(detect("const x = require('./x');"), ModuleSystem::CommonJs);
//! ```

mod scan;

pub use scan::detect;

use serde::{Deserialize, Serialize};

/// Module system of a JavaScript source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModuleSystem {
    Amd,
    /// The default when no marker is found.
    #[default]
    CommonJs,
    Es6,
}

impl ModuleSystem {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amd => "amd",
            Self::CommonJs => "commonjs",
            Self::Es6 => "es6",
        }
    }
}
