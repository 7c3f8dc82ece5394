//! Summary report shaping for resolved recipes.

use serde::{Deserialize, Serialize};

use crate::resolve::Resolution;

/// One line of a recipe summary: a base ingredient and its total quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: u64,
}

/// The external summary shape for a resolved recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    pub name: String,
    #[serde(rename = "cookTime")]
    pub cook_time: u64,
    pub ingredients: Vec<IngredientLine>,
}

/// Shape a resolution into the summary returned to callers.
///
/// Ingredients come out sorted by name; the resolution's map iterates in key
/// order already.
pub fn build_summary(recipe_name: &str, resolution: &Resolution) -> RecipeSummary {
    RecipeSummary {
        name: recipe_name.to_string(),
        cook_time: resolution.total_cook_time,
        ingredients: resolution
            .quantities
            .iter()
            .map(|(name, quantity)| IngredientLine {
                name: name.clone(),
                quantity: *quantity,
            })
            .collect(),
    }
}
