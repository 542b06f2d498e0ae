//! Accumulated element quantities.
//!
//! A portal's resource state is a mapping from element id to a non-negative
//! amount. Keys appear on first contribution and are pruned the moment an
//! amount decays to zero, so iteration only ever visits live elements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Element identifiers used by the shipped catalog
pub const ELEMENT_IDS: [&str; 5] = ["fire", "water", "earth", "wind", "void"];

/// Element id -> accumulated amount. Deterministic iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementProfile {
    amounts: BTreeMap<String, u32>,
}

impl ElementProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` units of `element`. Zero contributions never create a key.
    pub fn add(&mut self, element: &str, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.amounts.entry(element.to_string()).or_insert(0) += amount;
    }

    /// Remove up to `amount` units. The key is pruned when it reaches zero.
    pub fn remove(&mut self, element: &str, amount: u32) {
        if let Some(current) = self.amounts.get_mut(element) {
            *current = current.saturating_sub(amount);
            if *current == 0 {
                self.amounts.remove(element);
            }
        }
    }

    /// Current amount for `element` (0 when absent)
    pub fn get(&self, element: &str) -> u32 {
        self.amounts.get(element).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.amounts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Fold another profile into this one
    pub fn merge(&mut self, other: &ElementProfile) {
        for (element, amount) in other.iter() {
            self.add(element, amount);
        }
    }

    /// Owned snapshot of the mapping
    pub fn to_map(&self) -> BTreeMap<String, u32> {
        self.amounts.clone()
    }
}

impl FromIterator<(String, u32)> for ElementProfile {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut profile = Self::new();
        for (element, amount) in iter {
            profile.add(&element, amount);
        }
        profile
    }
}
