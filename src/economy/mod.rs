//! Currency and rarity model.
//!
//! Rarity is derived from an item's total generation cost through a fixed
//! monotonic mapping; the reward engine filters catalog equipment by rarity
//! rank against a level-scaled ceiling.

use serde::{Deserialize, Serialize};

/// Player currencies touched by rewards and save data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub gold: u64,
    pub mana: u64,
}

/// Item rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic, // generated items only, at very high total cost
}

impl ItemRarity {
    /// Monotonic cost -> rarity mapping for generated equipment
    pub fn from_cost(total_cost: u32) -> Self {
        match total_cost {
            0..=9 => Self::Common,
            10..=19 => Self::Uncommon,
            20..=34 => Self::Rare,
            35..=54 => Self::Epic,
            55..=79 => Self::Legendary,
            _ => Self::Mythic,
        }
    }

    /// Numeric rank, Common = 0
    pub fn rank(&self) -> u32 {
        match self {
            Self::Common => 0,
            Self::Uncommon => 1,
            Self::Rare => 2,
            Self::Epic => 3,
            Self::Legendary => 4,
            Self::Mythic => 5,
        }
    }

    /// Base price multiplier for this rarity
    pub fn price_multiplier(&self) -> f32 {
        match self {
            Self::Common => 1.0,
            Self::Uncommon => 3.0,
            Self::Rare => 10.0,
            Self::Epic => 50.0,
            Self::Legendary => 250.0,
            Self::Mythic => 1000.0,
        }
    }

    /// Drop chance weight (lower = rarer)
    pub fn drop_weight(&self) -> f32 {
        match self {
            Self::Common => 100.0,
            Self::Uncommon => 40.0,
            Self::Rare => 10.0,
            Self::Epic => 2.0,
            Self::Legendary => 0.3,
            Self::Mythic => 0.02,
        }
    }
}
