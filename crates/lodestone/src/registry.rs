//! The extension registry.

use crate::lookup::Lookup;
use std::fmt;

/// Ordered mapping from file extension to lookup.
///
/// Extensions keep their registration order. Re-registering an
/// extension swaps the lookup in place without adding a second entry.
#[derive(Default)]
pub struct ExtensionRegistry {
    entries: Vec<(String, Box<dyn Lookup>)>,
}

impl ExtensionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Bind `lookup` to `extension`, normalized to a leading dot.
    pub fn insert(&mut self, extension: &str, lookup: Box<dyn Lookup>) {
        let key = normalize(extension);
        if let Some(entry) = self.entries.iter_mut().find(|(ext, _)| *ext == key) {
            entry.1 = lookup;
        } else {
            self.entries.push((key, lookup));
        }
    }

    #[must_use]
    pub fn get(&self, extension: &str) -> Option<&dyn Lookup> {
        let key = normalize(extension);
        self.entries
            .iter()
            .find(|(ext, _)| *ext == key)
            .map(|(_, lookup)| lookup.as_ref())
    }

    /// Registered extensions in registration order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(ext, _)| ext.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.extensions()).finish()
    }
}

fn normalize(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}
