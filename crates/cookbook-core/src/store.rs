//! In-memory cookbook store.

use std::collections::HashMap;

use crate::schema::Entry;
use crate::validation::{validate_entry, ValidationError};

/// The cookbook: a process-lifetime registry of entries keyed by unique name.
///
/// Entries are immutable once inserted; there is no update or delete. The
/// store is volatile and starts empty at process startup.
#[derive(Debug, Default)]
pub struct Cookbook {
    entries: HashMap<String, Entry>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a validated entry under its name.
    ///
    /// Rejects duplicates and shape violations, accumulating every failure.
    /// A rejected insert leaves the cookbook untouched.
    pub fn insert(&mut self, entry: Entry) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.entries.contains_key(entry.name()) {
            errors.push(ValidationError::DuplicateName(entry.name().to_string()));
        }

        if let Err(shape_errors) = validate_entry(&entry) {
            errors.extend(shape_errors);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        self.entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
