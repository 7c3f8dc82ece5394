//! Entry payload parsing and shape validation.

use std::collections::HashSet;

use thiserror::Error;

use crate::schema::Entry;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("entry payload is malformed: {0}")]
    Malformed(String),

    #[error("entry name cannot be empty")]
    EmptyName,

    #[error("entry '{0}' already exists in the cookbook")]
    DuplicateName(String),

    #[error("recipe '{0}' must require at least one item")]
    NoRequiredItems(String),

    #[error("recipe '{0}' has a required item with an empty name")]
    EmptyRequirementName(String),

    #[error("recipe '{0}' requires '{1}' with a zero quantity")]
    ZeroQuantity(String, String),

    #[error("recipe '{0}' lists '{1}' more than once")]
    DuplicateRequirement(String, String),
}

/// Parse an untyped JSON payload into a typed [`Entry`].
///
/// This is the single parse-or-reject step at the transport boundary: a
/// missing or unknown `type` tag, absent fields, and negative or fractional
/// numbers all fail deserialization and collapse into
/// [`ValidationError::Malformed`].
pub fn parse_entry(payload: serde_json::Value) -> Result<Entry, ValidationError> {
    serde_json::from_value(payload).map_err(|e| ValidationError::Malformed(e.to_string()))
}

/// Validate the shape rules the type system cannot express.
///
/// Non-negative cook times and integer quantities are already guaranteed by
/// the `u64` fields; what remains is emptiness and uniqueness.
pub fn validate_entry(entry: &Entry) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if entry.name().is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    if let Entry::Recipe(recipe) = entry {
        if recipe.required_items.is_empty() {
            errors.push(ValidationError::NoRequiredItems(recipe.name.clone()));
        }

        let mut seen = HashSet::new();
        for item in &recipe.required_items {
            if item.name.is_empty() {
                errors.push(ValidationError::EmptyRequirementName(recipe.name.clone()));
                continue;
            }
            if item.quantity == 0 {
                errors.push(ValidationError::ZeroQuantity(
                    recipe.name.clone(),
                    item.name.clone(),
                ));
            }
            if !seen.insert(item.name.as_str()) {
                errors.push(ValidationError::DuplicateRequirement(
                    recipe.name.clone(),
                    item.name.clone(),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
