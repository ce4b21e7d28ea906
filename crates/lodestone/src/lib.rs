#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Resolves a dependency partial to the file it points at.
//!
//! Given the raw reference (`./bar`, `lodash.assign`, `hgn!resolve`),
//! the file it was found in, and the project root, [`Lodestone`] picks
//! the lookup implied by the referencing file's extension and runs it:
//!
//! * `.js` files are classified as ES6, AMD, or CommonJS from their
//!   own syntax, with a bundler config on the request overriding the
//!   classification entirely,
//! * `.scss`, `.sass`, and `.styl` files follow their stylesheet
//!   import conventions,
//! * any other extension can be wired up through
//!   [`Lodestone::register`].
//!
//! An unresolvable partial is `Ok(None)`, never an error.
//!
//! ```no_run
//! use lodestone::{Lodestone, Request};
//!
//! # fn main() -> Result<(), lodestone::Error> {
//! let resolver = Lodestone::new();
//! let request = Request::new("./bar", "src/app.js", "src");
//! if let Some(path) = resolver.resolve(&request)? {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod lookup;
pub mod registry;
pub mod request;

pub use config::{LoaderConfig, WebpackConfig};
pub use dispatch::Lodestone;
pub use error::Error;
pub use lookup::Lookup;
pub use registry::ExtensionRegistry;
pub use request::Request;
