//! Lookup strategies.
//!
//! Every registered extension maps to one [`Lookup`]. The built-ins
//! cover the JS family (with classification and fallback inside
//! [`JsLookup`]) and the stylesheet conventions; anything else can be
//! supplied as a custom implementation or a plain closure.

mod amd;
mod commonjs;
mod es6;
mod js;
pub(crate) mod probe;
mod sass;
mod stylus;
mod webpack;

pub use amd::AmdLookup;
pub use commonjs::CommonJsLookup;
pub use es6::Es6Lookup;
pub use js::JsLookup;
pub use sass::SassLookup;
pub use stylus::StylusLookup;
pub use webpack::WebpackLookup;

use crate::error::Error;
use crate::request::Request;
use std::path::PathBuf;

/// A resolver strategy.
///
/// `Ok(None)` means the partial did not resolve; that is the normal
/// outcome for a dangling reference, not an error. `Err` is reserved
/// for failures the lookup cannot work around, such as a malformed
/// config file.
pub trait Lookup: Send + Sync {
    fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error>;
}

/// Plain functions and closures work as lookups.
impl<F> Lookup for F
where
    F: Fn(&Request) -> Result<Option<PathBuf>, Error> + Send + Sync,
{
    fn resolve(&self, request: &Request) -> Result<Option<PathBuf>, Error> {
        self(request)
    }
}
