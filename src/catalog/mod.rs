//! Static catalog model.
//!
//! Ingredients, equipment, portal archetypes and the gear attribute pools are
//! externally supplied configuration consumed as read-only tables. Declaration
//! order is significant: the classifier breaks ties by archetype order, and
//! the reward engine treats lower ingredient indices as more common.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::economy::ItemRarity;

mod data;

pub use data::default_catalog;

/// Ingredient categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientCategory {
    Elemental,
    Mundane,
}

/// Consumable crafting input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: IngredientCategory,
    /// Single element this ingredient feeds when crafted
    pub affinity: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub base_value: u32,
}

/// Where a piece of portal equipment mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    Frame,
    Focus,
    Anchor,
    Conduit,
}

/// Catalog-backed equipment definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDef {
    pub id: String,
    pub name: String,
    pub slot: EquipSlot,
    pub rarity: ItemRarity,
    pub portal_bonus: u32,
    #[serde(default)]
    pub element_bonus: BTreeMap<String, u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Prefix attribute for generated gear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixAttr {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: u32,
    pub min_level: u32,
    pub affinity: String,
}

/// Material attribute for generated gear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAttr {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: u32,
    pub min_level: u32,
    pub affinity: String,
}

/// Suffix attribute for generated gear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuffixAttr {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: u32,
    pub min_level: u32,
    pub affinity: String,
    /// Element bonus override; defaults to 3 when absent
    pub effect_value: Option<u32>,
}

/// Base gear shape - the only mandatory generation attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_cost: u32,
}

/// Portal archetype tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalTier {
    Basic,
    Lesser,
    Greater,
    Exalted,
}

/// Gameplay effect numbers an archetype applies while active.
/// Closed field set - collaborators read these by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeEffects {
    /// Multiplier on the portal's spawn interval (lower = faster)
    pub spawn_interval_mult: f32,
    /// Multiplier on reward payload magnitudes
    pub reward_mult: f32,
    /// Flat bonus to portal capacity
    pub capacity_bonus: u32,
    /// Resistance to decay, 0.0 - 1.0
    pub stability: f32,
}

impl Default for ArchetypeEffects {
    fn default() -> Self {
        Self {
            spawn_interval_mult: 1.0,
            reward_mult: 1.0,
            capacity_bonus: 0,
            stability: 0.5,
        }
    }
}

/// Named portal archetype the classifier scores against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalArchetype {
    pub id: String,
    pub name: String,
    pub affinity: String,
    pub description: String,
    /// Display color hint, "#rrggbb"
    pub color: String,
    /// Minimum element amounts; every entry must be met
    #[serde(default)]
    pub required_elements: BTreeMap<String, u32>,
    /// At least one must appear among the craft's ingredient/equipment tags
    #[serde(default)]
    pub required_tags: Vec<String>,
    /// Scored as pure upside, never required
    #[serde(default)]
    pub optional_elements: Vec<String>,
    pub effects: ArchetypeEffects,
    pub tier: PortalTier,
}

/// Read-only lookup collection over all static tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub ingredients: Vec<Ingredient>,
    pub equipment: Vec<EquipmentDef>,
    pub archetypes: Vec<PortalArchetype>,
    pub prefixes: Vec<PrefixAttr>,
    pub materials: Vec<MaterialAttr>,
    pub suffixes: Vec<SuffixAttr>,
    pub gear_types: Vec<GearType>,
}

impl Catalog {
    /// Parse a catalog from RON text (the external data-table format)
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn equipment(&self, id: &str) -> Option<&EquipmentDef> {
        self.equipment.iter().find(|e| e.id == id)
    }

    pub fn archetype(&self, id: &str) -> Option<&PortalArchetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }

    pub fn prefix(&self, id: &str) -> Option<&PrefixAttr> {
        self.prefixes.iter().find(|p| p.id == id)
    }

    pub fn material(&self, id: &str) -> Option<&MaterialAttr> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn suffix(&self, id: &str) -> Option<&SuffixAttr> {
        self.suffixes.iter().find(|s| s.id == id)
    }

    pub fn gear_type(&self, id: &str) -> Option<&GearType> {
        self.gear_types.iter().find(|g| g.id == id)
    }

    pub fn ingredients_by_category(&self, category: IngredientCategory) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    pub fn equipment_by_rarity(&self, rarity: ItemRarity) -> Vec<&EquipmentDef> {
        self.equipment.iter().filter(|e| e.rarity == rarity).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookups() {
        let catalog = default_catalog();
        assert!(catalog.ingredient("fire_crystal").is_some());
        assert!(catalog.equipment("iron_frame").is_some());
        assert!(catalog.archetype("basic_rift").is_some());
        assert!(catalog.gear_type("ring").is_some());
        assert!(catalog.ingredient("no_such_thing").is_none());
    }

    #[test]
    fn test_basic_archetype_has_no_requirements() {
        let catalog = default_catalog();
        let basic = catalog.archetype("basic_rift").unwrap();
        assert!(basic.required_elements.is_empty());
        assert!(basic.required_tags.is_empty());
        assert_eq!(basic.tier, PortalTier::Basic);
    }

    #[test]
    fn test_basic_archetype_is_first() {
        // Catalog order is the classifier tie-break; the fallback archetype
        // must be scored first so exact-threshold ties resolve toward it.
        let catalog = default_catalog();
        assert_eq!(catalog.archetypes[0].id, "basic_rift");
    }

    #[test]
    fn test_ingredients_ordered_common_to_rare() {
        // Reward draws favor low indices; base_value is the shipped proxy
        // for how deep into the table an ingredient sits.
        let catalog = default_catalog();
        let first = &catalog.ingredients[0];
        let last = catalog.ingredients.last().unwrap();
        assert!(first.base_value <= last.base_value);
    }

    #[test]
    fn test_category_filter() {
        let catalog = default_catalog();
        let mundane = catalog.ingredients_by_category(IngredientCategory::Mundane);
        assert!(!mundane.is_empty());
        assert!(mundane.iter().all(|i| i.affinity.is_none()));
    }

    #[test]
    fn test_ron_roundtrip_matches_default() {
        let catalog = default_catalog();
        let text = ron::to_string(&catalog).unwrap();
        let restored = Catalog::from_ron(&text).unwrap();
        assert_eq!(restored, catalog);
    }

    #[test]
    fn test_from_ron_rejects_garbage() {
        assert!(Catalog::from_ron("not ron at all [").is_err());
    }

    #[test]
    fn test_affinities_are_known_elements() {
        use crate::elements::ELEMENT_IDS;
        let catalog = default_catalog();
        for ingredient in &catalog.ingredients {
            if let Some(affinity) = &ingredient.affinity {
                assert!(ELEMENT_IDS.contains(&affinity.as_str()), "{}", ingredient.id);
            }
        }
        for prefix in &catalog.prefixes {
            assert!(ELEMENT_IDS.contains(&prefix.affinity.as_str()), "{}", prefix.id);
        }
        for material in &catalog.materials {
            assert!(ELEMENT_IDS.contains(&material.affinity.as_str()), "{}", material.id);
        }
        for suffix in &catalog.suffixes {
            assert!(ELEMENT_IDS.contains(&suffix.affinity.as_str()), "{}", suffix.id);
        }
    }

    #[test]
    fn test_attribute_pools_nonempty() {
        let catalog = default_catalog();
        assert!(!catalog.prefixes.is_empty());
        assert!(!catalog.materials.is_empty());
        assert!(!catalog.suffixes.is_empty());
        assert!(!catalog.gear_types.is_empty());
    }
}
