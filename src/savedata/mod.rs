//! Save-data boundary.
//!
//! Shape validation only: a loaded state must expose numeric `gold` and
//! `mana` and an array-shaped `unlocked_elements`, or it is rejected
//! wholesale and a fresh state is used. Nothing is ever partially applied.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::crafting::SlotRecord;
use crate::economy::Wallet;

/// Persisted core state, id references only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub gold: u64,
    pub mana: u64,
    pub unlocked_elements: Vec<String>,
    #[serde(default)]
    pub discovered_recipes: Vec<String>,
    #[serde(default)]
    pub slots: Vec<SlotRecord>,
}

impl SaveState {
    /// Starting state for a new game
    pub fn new_game() -> Self {
        Self {
            gold: 50,
            mana: 20,
            unlocked_elements: vec!["fire".into(), "water".into()],
            discovered_recipes: Vec::new(),
            slots: Vec::new(),
        }
    }

    pub fn wallet(&self) -> Wallet {
        Wallet {
            gold: self.gold,
            mana: self.mana,
        }
    }
}

/// Check the boundary contract without committing to a full parse
pub fn validate_save_shape(json: &str) -> bool {
    let data: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(_) => return false,
    };
    data.get("gold").map_or(false, Value::is_u64)
        && data.get("mana").map_or(false, Value::is_u64)
        && data.get("unlocked_elements").map_or(false, Value::is_array)
}

/// Parse a save, rejecting malformed data wholesale
pub fn load_save(json: &str) -> Option<SaveState> {
    if !validate_save_shape(json) {
        return None;
    }
    serde_json::from_str(json).ok()
}

/// Parse a save or fall back to a fresh new-game state
pub fn load_or_default(json: &str) -> SaveState {
    load_save(json).unwrap_or_else(|| {
        warn!("Save data malformed; starting fresh");
        SaveState::new_game()
    })
}
