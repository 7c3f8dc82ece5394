//! Cookbook entry schema and wire format.

use serde::{Deserialize, Serialize};

/// A cookbook entry, discriminated by the `type` field on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    /// Terminal entry with a fixed preparation cost.
    Ingredient(Ingredient),
    /// Composite entry whose cost and ingredient set derive from its requirements.
    Recipe(Recipe),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }
}

/// A base ingredient. `cook_time` is minutes to prepare one unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    #[serde(rename = "cookTime")]
    pub cook_time: u64,
}

/// A composite recipe built from other entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    #[serde(rename = "requiredItems")]
    pub required_items: Vec<Requirement>,
}

/// A reference to another entry by name, with the quantity needed.
///
/// The referenced name is not checked against the cookbook at insert time;
/// dangling references only surface during resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub quantity: u64,
}
