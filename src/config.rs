//! Runtime configuration for the crafting core.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MATERIAL_CHANCE, DEFAULT_MAX_SLOTS, DEFAULT_PREFIX_CHANCE, DEFAULT_SUFFIX_CHANCE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Crafting bench size
    pub max_slots: usize,
    /// Default attribute inclusion chances for generated gear
    pub prefix_chance: f64,
    pub material_chance: f64,
    pub suffix_chance: f64,
    /// Player upgrade level fed into the reward emission formula
    pub upgrade_level: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_slots: DEFAULT_MAX_SLOTS,
            prefix_chance: DEFAULT_PREFIX_CHANCE,
            material_chance: DEFAULT_MATERIAL_CHANCE,
            suffix_chance: DEFAULT_SUFFIX_CHANCE,
            upgrade_level: 0,
        }
    }
}

impl CoreConfig {
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
