//! Recipe identity and discovery bookkeeping.
//!
//! A recipe is identified by the sorted ingredient ids of a craft, joined
//! with a fixed separator. Equipment never participates in identity. The
//! book only flags first-time discovery; repeat crafts recompute results.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::RECIPE_ID_SEPARATOR;
use crate::elements::ElementProfile;

/// Deterministic identity for a set of ingredients: sorted + joined.
/// Slot order never matters.
pub fn recipe_id(ingredient_ids: &[String]) -> String {
    let mut sorted: Vec<&str> = ingredient_ids.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(RECIPE_ID_SEPARATOR)
}

/// Result snapshot taken the first time a recipe is crafted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredRecipe {
    pub id: String,
    pub elements: ElementProfile,
    pub bonus_level: u32,
}

/// Discovered-recipe store. Identity membership is what persists; result
/// snapshots exist only for recipes discovered this session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeBook {
    ids: BTreeSet<String>,
    snapshots: BTreeMap<String, DiscoveredRecipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Record a fresh discovery. Returns false (and changes nothing) when the
    /// identity is already known.
    pub fn record(&mut self, recipe: DiscoveredRecipe) -> bool {
        if !self.ids.insert(recipe.id.clone()) {
            return false;
        }
        self.snapshots.insert(recipe.id.clone(), recipe);
        true
    }

    /// Snapshot for a recipe discovered this session, if any
    pub fn snapshot(&self, id: &str) -> Option<&DiscoveredRecipe> {
        self.snapshots.get(id)
    }

    /// Owned copy of every known identity, for persistence
    pub fn discovered_ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Replace the known set from persisted identities. Snapshots are not
    /// persisted, so the restored book flags discovery only.
    pub fn restore_ids<I: IntoIterator<Item = String>>(&mut self, ids: I) {
        self.ids = ids.into_iter().collect();
        self.snapshots.clear();
    }
}
