//! Centralized game constants for the portal crafting core.
//!
//! Eliminates magic numbers duplicated across the crafting, classifier and
//! reward paths. Per-module data (catalog tables, archetype effects) remains
//! in its module as the single source of truth.

// =====================================================
// Crafting
// =====================================================

/// Default number of crafting slots on the bench
pub const DEFAULT_MAX_SLOTS: usize = 6;

/// Element units contributed by one ingredient to its affinity element
pub const INGREDIENT_ELEMENT_AMOUNT: u32 = 5;

/// Bonus level contribution per ingredient: base_value / this
pub const INGREDIENT_BONUS_DIVISOR: u32 = 10;

/// Bonus level contribution per generated item: total_cost / this
/// (in addition to the item's flat portal bonus)
pub const GEAR_COST_BONUS_DIVISOR: u32 = 3;

/// Separator used when joining sorted ingredient ids into a recipe identity
pub const RECIPE_ID_SEPARATOR: &str = "+";

/// Minimum ingredient count for a craft to register a new recipe
pub const MIN_RECIPE_INGREDIENTS: usize = 2;

// =====================================================
// Portal Classification
// =====================================================

/// Points per satisfied archetype requirement
pub const REQUIREMENT_BASE_SCORE: u32 = 10;

/// Overshoot bonus per requirement: (amount - threshold) / this
pub const OVERSHOOT_BONUS_DIVISOR: u32 = 5;

/// Overshoot bonus cap per requirement
pub const OVERSHOOT_BONUS_CAP: u32 = 5;

/// Flat bonus per optional element present with a positive amount
pub const OPTIONAL_ELEMENT_BONUS: u32 = 5;

/// Minimum score for an archetype to be selected as a match
pub const MIN_MATCH_SCORE: u32 = 10;

// =====================================================
// Equipment Generation
// =====================================================

/// Default inclusion chance for a prefix attribute
pub const DEFAULT_PREFIX_CHANCE: f64 = 0.6;

/// Default inclusion chance for a material attribute
pub const DEFAULT_MATERIAL_CHANCE: f64 = 0.7;

/// Default inclusion chance for a suffix attribute
pub const DEFAULT_SUFFIX_CHANCE: f64 = 0.5;

/// Element bonus a prefix grants to its affinity element
pub const PREFIX_ELEMENT_BONUS: u32 = 2;

/// Element bonus a material grants to its affinity element
pub const MATERIAL_ELEMENT_BONUS: u32 = 3;

/// Element bonus a suffix grants when it declares no effect value
pub const SUFFIX_ELEMENT_BONUS_DEFAULT: u32 = 3;

/// Portal bonus per unit of total cost: floor(total_cost * this)
pub const PORTAL_BONUS_PER_COST: f32 = 1.5;

// =====================================================
// Rewards
// =====================================================

/// Cumulative category thresholds over a single uniform draw in [0, 1):
/// gold | ingredient | mana | equipment | generated
pub const GOLD_THRESHOLD: f64 = 0.35;
pub const INGREDIENT_THRESHOLD: f64 = 0.55;
pub const MANA_THRESHOLD: f64 = 0.70;
pub const EQUIPMENT_THRESHOLD: f64 = 0.85;

/// Maximum threshold width a chance modifier can add to its category
pub const CHANCE_MODIFIER_MAX_SHIFT: f64 = 0.15;

/// Gold keeps at least this much threshold width under modifiers
pub const GOLD_THRESHOLD_FLOOR: f64 = 0.15;

/// Static-equipment threshold never exceeds this under modifiers
pub const EQUIPMENT_THRESHOLD_CAP: f64 = 0.95;

/// Emission chance: base + per_level * portal_level + per_upgrade * upgrade_level
pub const EMISSION_BASE_CHANCE: f64 = 0.40;
pub const EMISSION_PER_PORTAL_LEVEL: f64 = 0.01;
pub const EMISSION_PER_UPGRADE_LEVEL: f64 = 0.05;
pub const EMISSION_CHANCE_CAP: f64 = 0.95;

/// Gold payload: base + per_level * portal_level + uniform jitter
pub const GOLD_REWARD_BASE: u32 = 10;
pub const GOLD_REWARD_PER_LEVEL: u32 = 5;
pub const GOLD_REWARD_JITTER: f64 = 10.0;

/// Mana payload: base + per_level * portal_level + uniform jitter
pub const MANA_REWARD_BASE: u32 = 5;
pub const MANA_REWARD_PER_LEVEL: u32 = 3;
pub const MANA_REWARD_JITTER: f64 = 5.0;

/// Equipment rarity rank ceiling: min(portal_level / 5, this) + rarity bonus
pub const EQUIPMENT_RARITY_RANK_CAP: u32 = 4;
