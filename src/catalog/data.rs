//! Shipped catalog tables.
//!
//! These are the default data tables the game ships with; deployments can
//! replace them wholesale with `Catalog::from_ron`. Ingredients are declared
//! common-first, archetypes fallback-first.

use std::collections::BTreeMap;

use super::{
    ArchetypeEffects, Catalog, EquipSlot, EquipmentDef, GearType, Ingredient, IngredientCategory,
    MaterialAttr, PortalArchetype, PortalTier, PrefixAttr, SuffixAttr,
};
use crate::economy::ItemRarity;

fn elemental(id: &str, name: &str, affinity: &str, tags: &[&str], base_value: u32) -> Ingredient {
    Ingredient {
        id: id.into(),
        name: name.into(),
        category: IngredientCategory::Elemental,
        affinity: Some(affinity.into()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        base_value,
    }
}

fn mundane(id: &str, name: &str, tags: &[&str], base_value: u32) -> Ingredient {
    Ingredient {
        id: id.into(),
        name: name.into(),
        category: IngredientCategory::Mundane,
        affinity: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        base_value,
    }
}

fn element_map(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// The full default catalog
pub fn default_catalog() -> Catalog {
    Catalog {
        ingredients: default_ingredients(),
        equipment: default_equipment(),
        archetypes: default_archetypes(),
        prefixes: default_prefixes(),
        materials: default_materials(),
        suffixes: default_suffixes(),
        gear_types: default_gear_types(),
    }
}

fn default_ingredients() -> Vec<Ingredient> {
    vec![
        elemental("ember_moss", "Ember Moss", "fire", &["organic"], 10),
        elemental("spring_water", "Spring Water", "water", &["organic"], 10),
        elemental("loam_clump", "Loam Clump", "earth", &["organic"], 10),
        elemental("breeze_husk", "Breeze Husk", "wind", &["organic"], 10),
        mundane("iron_ore", "Iron Ore", &["metal"], 15),
        mundane("copper_wire", "Copper Wire", &["metal"], 15),
        elemental("fire_crystal", "Fire Crystal", "fire", &["arcane"], 25),
        elemental("tide_crystal", "Tide Crystal", "water", &["arcane"], 25),
        elemental("stone_heart", "Stone Heart", "earth", &["arcane"], 25),
        elemental("gale_crystal", "Gale Crystal", "wind", &["arcane"], 25),
        elemental("void_shard", "Void Shard", "void", &["arcane"], 40),
        elemental("null_residue", "Null Residue", "void", &["arcane"], 60),
    ]
}

fn default_equipment() -> Vec<EquipmentDef> {
    vec![
        EquipmentDef {
            id: "iron_frame".into(),
            name: "Iron Frame".into(),
            slot: EquipSlot::Frame,
            rarity: ItemRarity::Common,
            portal_bonus: 3,
            element_bonus: BTreeMap::new(),
            tags: vec!["metal".into()],
        },
        EquipmentDef {
            id: "granite_anchor".into(),
            name: "Granite Anchor".into(),
            slot: EquipSlot::Anchor,
            rarity: ItemRarity::Common,
            portal_bonus: 4,
            element_bonus: element_map(&[("earth", 5)]),
            tags: vec![],
        },
        EquipmentDef {
            id: "silver_frame".into(),
            name: "Silver Frame".into(),
            slot: EquipSlot::Frame,
            rarity: ItemRarity::Uncommon,
            portal_bonus: 6,
            element_bonus: BTreeMap::new(),
            tags: vec!["metal".into()],
        },
        EquipmentDef {
            id: "ember_focus".into(),
            name: "Ember Focus".into(),
            slot: EquipSlot::Focus,
            rarity: ItemRarity::Uncommon,
            portal_bonus: 5,
            element_bonus: element_map(&[("fire", 5)]),
            tags: vec!["arcane".into()],
        },
        EquipmentDef {
            id: "tide_focus".into(),
            name: "Tide Focus".into(),
            slot: EquipSlot::Focus,
            rarity: ItemRarity::Uncommon,
            portal_bonus: 5,
            element_bonus: element_map(&[("water", 5)]),
            tags: vec!["arcane".into()],
        },
        EquipmentDef {
            id: "storm_conduit".into(),
            name: "Storm Conduit".into(),
            slot: EquipSlot::Conduit,
            rarity: ItemRarity::Rare,
            portal_bonus: 8,
            element_bonus: element_map(&[("wind", 8)]),
            tags: vec!["arcane".into()],
        },
        EquipmentDef {
            id: "void_lens".into(),
            name: "Void Lens".into(),
            slot: EquipSlot::Focus,
            rarity: ItemRarity::Epic,
            portal_bonus: 12,
            element_bonus: element_map(&[("void", 10)]),
            tags: vec!["arcane".into()],
        },
    ]
}

fn default_archetypes() -> Vec<PortalArchetype> {
    vec![
        PortalArchetype {
            id: "basic_rift".into(),
            name: "Basic Rift".into(),
            affinity: "neutral".into(),
            description: "A faint tear in the veil. It asks for nothing.".into(),
            color: "#8a8a9e".into(),
            required_elements: BTreeMap::new(),
            required_tags: vec![],
            optional_elements: vec![],
            effects: ArchetypeEffects::default(),
            tier: PortalTier::Basic,
        },
        PortalArchetype {
            id: "ember_gate".into(),
            name: "Ember Gate".into(),
            affinity: "fire".into(),
            description: "Smolders at the edges, hungry for kindling.".into(),
            color: "#d9542b".into(),
            required_elements: element_map(&[("fire", 10)]),
            required_tags: vec![],
            optional_elements: vec!["earth".into()],
            effects: ArchetypeEffects {
                spawn_interval_mult: 0.9,
                reward_mult: 1.1,
                capacity_bonus: 2,
                stability: 0.6,
            },
            tier: PortalTier::Lesser,
        },
        PortalArchetype {
            id: "tide_gate".into(),
            name: "Tide Gate".into(),
            affinity: "water".into(),
            description: "Salt mist rolls out from a cold blue arch.".into(),
            color: "#2b7bd9".into(),
            required_elements: element_map(&[("water", 10)]),
            required_tags: vec![],
            optional_elements: vec!["wind".into()],
            effects: ArchetypeEffects {
                spawn_interval_mult: 1.0,
                reward_mult: 1.1,
                capacity_bonus: 2,
                stability: 0.7,
            },
            tier: PortalTier::Lesser,
        },
        PortalArchetype {
            id: "verdant_gate".into(),
            name: "Verdant Gate".into(),
            affinity: "earth".into(),
            description: "Roots knit the threshold together.".into(),
            color: "#3f9e4d".into(),
            required_elements: element_map(&[("earth", 10)]),
            required_tags: vec!["organic".into()],
            optional_elements: vec!["water".into()],
            effects: ArchetypeEffects {
                spawn_interval_mult: 1.1,
                reward_mult: 1.2,
                capacity_bonus: 3,
                stability: 0.8,
            },
            tier: PortalTier::Lesser,
        },
        PortalArchetype {
            id: "storm_gate".into(),
            name: "Storm Gate".into(),
            affinity: "wind".into(),
            description: "The arch howls even in still air.".into(),
            color: "#9ec7e8".into(),
            required_elements: element_map(&[("wind", 10)]),
            required_tags: vec![],
            optional_elements: vec!["water".into()],
            effects: ArchetypeEffects {
                spawn_interval_mult: 0.8,
                reward_mult: 1.0,
                capacity_bonus: 1,
                stability: 0.5,
            },
            tier: PortalTier::Lesser,
        },
        PortalArchetype {
            id: "forgeheart".into(),
            name: "Forgeheart".into(),
            affinity: "fire".into(),
            description: "Molten seams run through worked stone.".into(),
            color: "#b8452a".into(),
            required_elements: element_map(&[("fire", 20), ("earth", 20)]),
            required_tags: vec!["metal".into()],
            optional_elements: vec![],
            effects: ArchetypeEffects {
                spawn_interval_mult: 0.85,
                reward_mult: 1.4,
                capacity_bonus: 4,
                stability: 0.75,
            },
            tier: PortalTier::Greater,
        },
        PortalArchetype {
            id: "inferno_maw".into(),
            name: "Inferno Maw".into(),
            affinity: "fire".into(),
            description: "A roaring mouth of flame that eats the air.".into(),
            color: "#f03b1d".into(),
            required_elements: element_map(&[("fire", 30)]),
            required_tags: vec![],
            optional_elements: vec!["earth".into(), "wind".into()],
            effects: ArchetypeEffects {
                spawn_interval_mult: 0.7,
                reward_mult: 1.5,
                capacity_bonus: 4,
                stability: 0.4,
            },
            tier: PortalTier::Greater,
        },
        PortalArchetype {
            id: "magma_core".into(),
            name: "Magma Core".into(),
            affinity: "fire".into(),
            description: "Slow stone breathes under a crust of ash.".into(),
            color: "#c2541f".into(),
            required_elements: element_map(&[("fire", 30), ("earth", 20)]),
            required_tags: vec![],
            optional_elements: vec![],
            effects: ArchetypeEffects {
                spawn_interval_mult: 0.8,
                reward_mult: 1.6,
                capacity_bonus: 5,
                stability: 0.85,
            },
            tier: PortalTier::Greater,
        },
        PortalArchetype {
            id: "abyssal_well".into(),
            name: "Abyssal Well".into(),
            affinity: "water".into(),
            description: "Black water stands upright in the frame.".into(),
            color: "#163a66".into(),
            required_elements: element_map(&[("water", 30)]),
            required_tags: vec![],
            optional_elements: vec!["void".into()],
            effects: ArchetypeEffects {
                spawn_interval_mult: 0.9,
                reward_mult: 1.5,
                capacity_bonus: 5,
                stability: 0.65,
            },
            tier: PortalTier::Greater,
        },
        PortalArchetype {
            id: "void_breach".into(),
            name: "Void Breach".into(),
            affinity: "void".into(),
            description: "Light bends the wrong way near the rim.".into(),
            color: "#3d1d66".into(),
            required_elements: element_map(&[("void", 25)]),
            required_tags: vec![],
            optional_elements: vec!["fire".into(), "water".into()],
            effects: ArchetypeEffects {
                spawn_interval_mult: 0.6,
                reward_mult: 1.8,
                capacity_bonus: 6,
                stability: 0.3,
            },
            tier: PortalTier::Greater,
        },
        PortalArchetype {
            id: "confluence".into(),
            name: "Elemental Confluence".into(),
            affinity: "all".into(),
            description: "Four currents meet and hold each other still.".into(),
            color: "#e8d44d".into(),
            required_elements: element_map(&[
                ("fire", 15),
                ("water", 15),
                ("earth", 15),
                ("wind", 15),
            ]),
            required_tags: vec![],
            optional_elements: vec!["void".into()],
            effects: ArchetypeEffects {
                spawn_interval_mult: 0.75,
                reward_mult: 2.0,
                capacity_bonus: 8,
                stability: 0.9,
            },
            tier: PortalTier::Exalted,
        },
    ]
}

fn default_prefixes() -> Vec<PrefixAttr> {
    vec![
        PrefixAttr {
            id: "blazing".into(),
            name: "Blazing".into(),
            description: "Wreathed in living flame".into(),
            cost: 6,
            min_level: 1,
            affinity: "fire".into(),
        },
        PrefixAttr {
            id: "tidal".into(),
            name: "Tidal".into(),
            description: "Slick with abyssal brine".into(),
            cost: 6,
            min_level: 1,
            affinity: "water".into(),
        },
        PrefixAttr {
            id: "verdant".into(),
            name: "Verdant".into(),
            description: "Humming with green growth".into(),
            cost: 6,
            min_level: 2,
            affinity: "earth".into(),
        },
        PrefixAttr {
            id: "howling".into(),
            name: "Howling".into(),
            description: "Whistles with trapped wind".into(),
            cost: 6,
            min_level: 2,
            affinity: "wind".into(),
        },
        PrefixAttr {
            id: "umbral".into(),
            name: "Umbral".into(),
            description: "Bleeds thin void-light".into(),
            cost: 12,
            min_level: 5,
            affinity: "void".into(),
        },
    ]
}

fn default_materials() -> Vec<MaterialAttr> {
    vec![
        MaterialAttr {
            id: "iron".into(),
            name: "Iron".into(),
            description: "Plain worked iron, cold to the touch".into(),
            cost: 4,
            min_level: 1,
            affinity: "earth".into(),
        },
        MaterialAttr {
            id: "coral".into(),
            name: "Coral".into(),
            description: "Grown in a drowned reef".into(),
            cost: 8,
            min_level: 3,
            affinity: "water".into(),
        },
        MaterialAttr {
            id: "silver".into(),
            name: "Silver".into(),
            description: "Polished until it sings in a breeze".into(),
            cost: 8,
            min_level: 3,
            affinity: "wind".into(),
        },
        MaterialAttr {
            id: "obsidian".into(),
            name: "Obsidian".into(),
            description: "Glass born in a furnace vein".into(),
            cost: 10,
            min_level: 4,
            affinity: "fire".into(),
        },
        MaterialAttr {
            id: "voidglass".into(),
            name: "Voidglass".into(),
            description: "Holds a reflection a moment too long".into(),
            cost: 16,
            min_level: 6,
            affinity: "void".into(),
        },
    ]
}

fn default_suffixes() -> Vec<SuffixAttr> {
    vec![
        SuffixAttr {
            id: "of_embers".into(),
            name: "of Embers".into(),
            description: "Warm ash drifts from it".into(),
            cost: 5,
            min_level: 2,
            affinity: "fire".into(),
            effect_value: Some(4),
        },
        SuffixAttr {
            id: "of_the_tides".into(),
            name: "of the Tides".into(),
            description: "Its weight shifts with the moon".into(),
            cost: 5,
            min_level: 2,
            affinity: "water".into(),
            effect_value: None,
        },
        SuffixAttr {
            id: "of_gales".into(),
            name: "of Gales".into(),
            description: "Lighter every time it is thrown".into(),
            cost: 5,
            min_level: 3,
            affinity: "wind".into(),
            effect_value: None,
        },
        SuffixAttr {
            id: "of_deep_roots".into(),
            name: "of Deep Roots".into(),
            description: "Refuses to be moved once set down".into(),
            cost: 7,
            min_level: 4,
            affinity: "earth".into(),
            effect_value: Some(5),
        },
        SuffixAttr {
            id: "of_the_hollow".into(),
            name: "of the Hollow".into(),
            description: "Sounds empty no matter what fills it".into(),
            cost: 12,
            min_level: 7,
            affinity: "void".into(),
            effect_value: Some(8),
        },
    ]
}

fn default_gear_types() -> Vec<GearType> {
    vec![
        GearType {
            id: "ring".into(),
            name: "Ring".into(),
            description: "A slender band sized for a crafter's finger".into(),
            base_cost: 5,
        },
        GearType {
            id: "talisman".into(),
            name: "Talisman".into(),
            description: "A carved token strung on waxed cord".into(),
            base_cost: 6,
        },
        GearType {
            id: "amulet".into(),
            name: "Amulet".into(),
            description: "A weighted pendant that settles over the heart".into(),
            base_cost: 8,
        },
        GearType {
            id: "orb".into(),
            name: "Orb".into(),
            description: "A palm-sized sphere that is never quite cold".into(),
            base_cost: 10,
        },
    ]
}
