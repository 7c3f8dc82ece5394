//! Recipe resolution: flattening a recipe's dependency tree into base
//! ingredient quantities and total cook time.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::schema::Entry;
use crate::store::Cookbook;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no cookbook entry named '{0}'")]
    NotFound(String),

    #[error("'{0}' is not a recipe")]
    NotARecipe(String),

    #[error("'{0}' is not a base ingredient")]
    NotAnIngredient(String),

    #[error("recipe '{0}' depends on itself")]
    CircularDependency(String),
}

/// The flattened form of a recipe: base ingredient quantities for one unit,
/// and the total cook time they imply.
///
/// Quantities are keyed by ingredient name in a `BTreeMap` so iteration order
/// is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub total_cook_time: u64,
    pub quantities: BTreeMap<String, u64>,
}

/// Resolve `recipe_name` against the cookbook.
///
/// The name must refer to a recipe. Its requirement tree is expanded
/// recursively, scaling quantities through every level of nesting; an
/// ingredient reachable along several paths accumulates the sum of its
/// scaled contributions. Any reference to an absent entry fails the whole
/// resolution, and a recipe that transitively requires itself is rejected
/// rather than expanded forever.
pub fn resolve(cookbook: &Cookbook, recipe_name: &str) -> Result<Resolution, ResolveError> {
    match cookbook.get(recipe_name) {
        None => return Err(ResolveError::NotFound(recipe_name.to_string())),
        Some(Entry::Ingredient(_)) => {
            return Err(ResolveError::NotARecipe(recipe_name.to_string()))
        }
        Some(Entry::Recipe(_)) => {}
    }

    let mut quantities = BTreeMap::new();
    let mut path = HashSet::new();
    expand(cookbook, recipe_name, 1, &mut path, &mut quantities)?;

    // Fold the flat quantity map into a total cook time. Every key came from
    // an ingredient during expansion; the lookup re-checks that anyway.
    let mut total_cook_time = 0;
    for (name, quantity) in &quantities {
        match cookbook.get(name) {
            Some(Entry::Ingredient(ingredient)) => {
                total_cook_time += quantity * ingredient.cook_time;
            }
            Some(Entry::Recipe(_)) => {
                return Err(ResolveError::NotAnIngredient(name.clone()));
            }
            None => return Err(ResolveError::NotFound(name.clone())),
        }
    }

    Ok(Resolution {
        total_cook_time,
        quantities,
    })
}

/// Accumulate the base ingredients for `multiplier` units of `name`.
///
/// `path` holds the recipe names currently being expanded; re-entering one of
/// them means the dependency graph has a cycle. A name may still be expanded
/// many times as a sibling (diamond dependencies), since it leaves `path`
/// once its subtree is done.
fn expand(
    cookbook: &Cookbook,
    name: &str,
    multiplier: u64,
    path: &mut HashSet<String>,
    quantities: &mut BTreeMap<String, u64>,
) -> Result<(), ResolveError> {
    let entry = cookbook
        .get(name)
        .ok_or_else(|| ResolveError::NotFound(name.to_string()))?;

    match entry {
        Entry::Ingredient(ingredient) => {
            *quantities.entry(ingredient.name.clone()).or_insert(0) += multiplier;
        }
        Entry::Recipe(recipe) => {
            if !path.insert(recipe.name.clone()) {
                return Err(ResolveError::CircularDependency(recipe.name.clone()));
            }
            for item in &recipe.required_items {
                expand(
                    cookbook,
                    &item.name,
                    item.quantity * multiplier,
                    path,
                    quantities,
                )?;
            }
            path.remove(&recipe.name);
        }
    }

    Ok(())
}
