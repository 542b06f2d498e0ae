//! Reward probability engine.
//!
//! A portal consumption first rolls against a level-scaled emission chance,
//! then maps a second uniform draw into one of five categories through
//! cumulative thresholds. Equipment-derived modifiers widen the ingredient
//! and equipment bands at gold's expense and raise payload quality.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::constants::{
    CHANCE_MODIFIER_MAX_SHIFT, DEFAULT_MATERIAL_CHANCE, DEFAULT_PREFIX_CHANCE,
    DEFAULT_SUFFIX_CHANCE, EMISSION_BASE_CHANCE, EMISSION_CHANCE_CAP, EMISSION_PER_PORTAL_LEVEL,
    EMISSION_PER_UPGRADE_LEVEL, EQUIPMENT_RARITY_RANK_CAP, EQUIPMENT_THRESHOLD,
    EQUIPMENT_THRESHOLD_CAP, GOLD_REWARD_BASE, GOLD_REWARD_JITTER, GOLD_REWARD_PER_LEVEL,
    GOLD_THRESHOLD, GOLD_THRESHOLD_FLOOR, INGREDIENT_THRESHOLD, MANA_REWARD_BASE,
    MANA_REWARD_JITTER, MANA_REWARD_PER_LEVEL, MANA_THRESHOLD,
};
use crate::gear::{generate, GeneratedEquipment, GenerationOptions};

/// Multipliers and bonuses derived from equipped portal gear.
/// Defaults are neutral: thresholds and payloads are then bit-identical to
/// the unmodified engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardModifiers {
    pub gold_multiplier: f64,
    pub mana_multiplier: f64,
    /// 0.0 - 1.0; widens the ingredient band by up to 0.15
    pub ingredient_chance: f64,
    /// 0.0 - 1.0; widens the equipment band by up to 0.15
    pub equipment_chance: f64,
    /// Raises rarity ceilings and generated-item quality
    pub rarity_bonus: u32,
}

impl Default for RewardModifiers {
    fn default() -> Self {
        Self {
            gold_multiplier: 1.0,
            mana_multiplier: 1.0,
            ingredient_chance: 0.0,
            equipment_chance: 0.0,
            rarity_bonus: 0,
        }
    }
}

/// Cumulative category boundaries over a single uniform draw in [0, 1).
/// Gold below `gold`, then ingredient, mana, equipment; generated claims the
/// remainder up to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryThresholds {
    pub gold: f64,
    pub ingredient: f64,
    pub mana: f64,
    pub equipment: f64,
}

impl CategoryThresholds {
    pub const BASE: Self = Self {
        gold: GOLD_THRESHOLD,
        ingredient: INGREDIENT_THRESHOLD,
        mana: MANA_THRESHOLD,
        equipment: EQUIPMENT_THRESHOLD,
    };

    /// Recompute the partition for a modifier set. Chance modifiers shift
    /// width out of gold (floored) into their category; every boundary stays
    /// monotonic and the equipment boundary is capped.
    pub fn with_modifiers(modifiers: &RewardModifiers) -> Self {
        let ingredient_extra = CHANCE_MODIFIER_MAX_SHIFT * modifiers.ingredient_chance.clamp(0.0, 1.0);
        let equipment_extra = CHANCE_MODIFIER_MAX_SHIFT * modifiers.equipment_chance.clamp(0.0, 1.0);

        let base_ingredient_width = INGREDIENT_THRESHOLD - GOLD_THRESHOLD;
        let base_mana_width = MANA_THRESHOLD - INGREDIENT_THRESHOLD;
        let base_equipment_width = EQUIPMENT_THRESHOLD - MANA_THRESHOLD;

        let gold = (GOLD_THRESHOLD - ingredient_extra - equipment_extra).max(GOLD_THRESHOLD_FLOOR);
        let ingredient = gold + base_ingredient_width + ingredient_extra;
        let mana = ingredient + base_mana_width;
        let equipment = (mana + base_equipment_width + equipment_extra)
            .clamp(mana, EQUIPMENT_THRESHOLD_CAP);

        Self {
            gold,
            ingredient,
            mana,
            equipment,
        }
    }
}

/// One emitted reward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reward {
    Gold(u64),
    Mana(u64),
    Ingredient { id: String, amount: u32 },
    Equipment { id: String, amount: u32 },
    Generated(GeneratedEquipment),
}

/// Inventory mutators supplied by the owning collaborator. The engine never
/// touches inventory state directly.
pub trait RewardInventory {
    fn add_gold(&mut self, amount: u64);
    fn add_mana(&mut self, amount: u64);
    fn add_ingredient(&mut self, id: &str, amount: u32);
    fn add_equipment(&mut self, id: &str, amount: u32);
    fn add_generated(&mut self, item: GeneratedEquipment);
}

/// Chance that a consumption emits anything at all.
/// Monotonic in both inputs, capped.
pub fn emission_chance(portal_level: u32, upgrade_level: u32) -> f64 {
    (EMISSION_BASE_CHANCE
        + EMISSION_PER_PORTAL_LEVEL * f64::from(portal_level)
        + EMISSION_PER_UPGRADE_LEVEL * f64::from(upgrade_level))
    .min(EMISSION_CHANCE_CAP)
}

/// Roll for a reward. `None` when the emission roll misses - that is the
/// common case, not an error.
pub fn generate_reward<R: Rng>(
    rng: &mut R,
    catalog: &Catalog,
    portal_level: u32,
    upgrade_level: u32,
    modifiers: &RewardModifiers,
) -> Option<Reward> {
    let chance = emission_chance(portal_level, upgrade_level);
    if rng.gen::<f64>() > chance {
        return None;
    }

    let thresholds = CategoryThresholds::with_modifiers(modifiers);
    let roll = rng.gen::<f64>();
    let reward = if roll < thresholds.gold {
        gold_reward(rng, portal_level, modifiers)
    } else if roll < thresholds.ingredient {
        ingredient_reward(rng, catalog, portal_level, modifiers)
    } else if roll < thresholds.mana {
        mana_reward(rng, portal_level, modifiers)
    } else if roll < thresholds.equipment {
        equipment_reward(rng, catalog, portal_level, modifiers)
    } else {
        generated_reward(rng, catalog, portal_level, modifiers)
    };
    debug!(portal_level, roll, "Reward emitted");
    Some(reward)
}

/// Apply a reward through the inventory callbacks and describe it.
/// Ids the catalog no longer resolves still reach the callbacks; only the
/// message degrades to a generic one.
pub fn apply_reward(
    reward: &Reward,
    catalog: &Catalog,
    inventory: &mut dyn RewardInventory,
) -> String {
    match reward {
        Reward::Gold(amount) => {
            inventory.add_gold(*amount);
            format!("Found {} gold", amount)
        }
        Reward::Mana(amount) => {
            inventory.add_mana(*amount);
            format!("Absorbed {} mana", amount)
        }
        Reward::Ingredient { id, amount } => {
            inventory.add_ingredient(id, *amount);
            match catalog.ingredient(id) {
                Some(ingredient) => format!("Found {} x{}", ingredient.name, amount),
                None => "Found an unfamiliar reagent".to_string(),
            }
        }
        Reward::Equipment { id, amount } => {
            inventory.add_equipment(id, *amount);
            match catalog.equipment(id) {
                Some(equipment) => format!("Found {} x{}", equipment.name, amount),
                None => "Found a strange device".to_string(),
            }
        }
        Reward::Generated(item) => {
            let name = item.name.clone();
            inventory.add_generated(item.clone());
            format!("The portal yields {}", name)
        }
    }
}

fn gold_reward<R: Rng>(rng: &mut R, level: u32, modifiers: &RewardModifiers) -> Reward {
    let base = f64::from(GOLD_REWARD_BASE + GOLD_REWARD_PER_LEVEL * level);
    let amount = (base + rng.gen_range(0.0..GOLD_REWARD_JITTER)) * modifiers.gold_multiplier;
    Reward::Gold(amount as u64)
}

fn mana_reward<R: Rng>(rng: &mut R, level: u32, modifiers: &RewardModifiers) -> Reward {
    let base = f64::from(MANA_REWARD_BASE + MANA_REWARD_PER_LEVEL * level);
    let amount = (base + rng.gen_range(0.0..MANA_REWARD_JITTER)) * modifiers.mana_multiplier;
    Reward::Mana(amount as u64)
}

/// Uniform draw over a level-capped head of the ingredient table; the table
/// is ordered common-first, so low levels only see common entries.
fn ingredient_reward<R: Rng>(
    rng: &mut R,
    catalog: &Catalog,
    level: u32,
    modifiers: &RewardModifiers,
) -> Reward {
    if catalog.ingredients.is_empty() {
        return gold_reward(rng, level, modifiers);
    }
    let last_index = catalog.ingredients.len() - 1;
    let ceiling = ((level / 2 + 3 + modifiers.rarity_bonus) as usize).min(last_index);
    let index = rng.gen_range(0..=ceiling);
    Reward::Ingredient {
        id: catalog.ingredients[index].id.clone(),
        amount: 1,
    }
}

fn equipment_reward<R: Rng>(
    rng: &mut R,
    catalog: &Catalog,
    level: u32,
    modifiers: &RewardModifiers,
) -> Reward {
    let rank_cap = (level / 5).min(EQUIPMENT_RARITY_RANK_CAP) + modifiers.rarity_bonus;
    let pool: Vec<_> = catalog
        .equipment
        .iter()
        .filter(|e| e.rarity.rank() <= rank_cap)
        .collect();
    if pool.is_empty() {
        return gold_reward(rng, level, modifiers);
    }
    Reward::Equipment {
        id: pool[rng.gen_range(0..pool.len())].id.clone(),
        amount: 1,
    }
}

/// High-roll category: a freshly generated item. Rarity bonus raises the
/// target level and, past its first two steps, the attribute inclusion odds.
fn generated_reward<R: Rng>(
    rng: &mut R,
    catalog: &Catalog,
    level: u32,
    modifiers: &RewardModifiers,
) -> Reward {
    let mut options = GenerationOptions::for_level((level + modifiers.rarity_bonus).max(1));
    options.prefix_chance = if modifiers.rarity_bonus >= 1 { 0.8 } else { DEFAULT_PREFIX_CHANCE };
    options.material_chance = if modifiers.rarity_bonus >= 1 { 0.85 } else { DEFAULT_MATERIAL_CHANCE };
    options.suffix_chance = if modifiers.rarity_bonus >= 2 { 0.75 } else { DEFAULT_SUFFIX_CHANCE };

    match generate(rng, catalog, &options) {
        Ok(item) => Reward::Generated(item),
        // Only an empty gear-type pool can land here; degrade to gold
        Err(_) => gold_reward(rng, level, modifiers),
    }
}
