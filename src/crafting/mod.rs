//! Slot-based crafting aggregator.
//!
//! A fixed bench of slots accepts ingredients and equipment (catalog-backed
//! or generated), folds them into element totals plus a bonus level, and
//! tracks first-time recipe discovery. Craft-completion observers are a plain
//! list invoked synchronously in registration order.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::constants::{
    GEAR_COST_BONUS_DIVISOR, INGREDIENT_BONUS_DIVISOR, INGREDIENT_ELEMENT_AMOUNT,
    MIN_RECIPE_INGREDIENTS,
};
use crate::elements::ElementProfile;
use crate::gear::GeneratedEquipment;

pub mod recipes;

pub use recipes::{recipe_id, DiscoveredRecipe, RecipeBook};

/// One bench slot. A slot holds at most one payload by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Slot {
    Empty,
    Ingredient(String),
    Equipment(String),
    Generated(GeneratedEquipment),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// Everything a completed craft produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftOutcome {
    pub elements: ElementProfile,
    pub bonus_level: u32,
    pub is_new_recipe: bool,
    /// Present whenever at least one ingredient was used
    pub recipe_id: Option<String>,
    /// Generated items consumed by this craft, in slot order
    pub consumed_generated: Vec<GeneratedEquipment>,
    pub ingredient_ids: Vec<String>,
    /// Catalog equipment ids only; consumed generated items are listed above
    pub equipment_ids: Vec<String>,
}

/// Flat persisted form of one occupied slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub index: usize,
    pub ingredient_id: Option<String>,
    pub equipment_id: Option<String>,
    pub is_generated: bool,
}

/// Craft-completion callback: (element totals, bonus level, consumed generated items)
pub type CraftObserver = Box<dyn FnMut(&ElementProfile, u32, &[GeneratedEquipment])>;

/// The crafting bench
pub struct CraftingBench {
    slots: Vec<Slot>,
    recipes: RecipeBook,
    observers: Vec<CraftObserver>,
}

impl CraftingBench {
    pub fn new(max_slots: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; max_slots],
            recipes: RecipeBook::new(),
            observers: Vec::new(),
        }
    }

    pub fn with_config(config: &crate::config::CoreConfig) -> Self {
        Self::new(config.max_slots)
    }

    pub fn max_slots(&self) -> usize {
        self.slots.len()
    }

    /// Defensive copy of a slot's contents
    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).cloned()
    }

    /// Count of occupied slots
    pub fn slots_used(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Place an ingredient. Fails (no state change) on a bad index or an id
    /// the catalog cannot resolve; otherwise overwrites the slot.
    pub fn add_ingredient(&mut self, index: usize, id: &str, catalog: &Catalog) -> bool {
        if index >= self.slots.len() || catalog.ingredient(id).is_none() {
            return false;
        }
        self.slots[index] = Slot::Ingredient(id.to_string());
        true
    }

    /// Place catalog equipment. Same failure contract as `add_ingredient`.
    pub fn add_equipment(&mut self, index: usize, id: &str, catalog: &Catalog) -> bool {
        if index >= self.slots.len() || catalog.equipment(id).is_none() {
            return false;
        }
        self.slots[index] = Slot::Equipment(id.to_string());
        true
    }

    /// Place a generated item directly by value. Not catalog-backed, so only
    /// the index is validated.
    pub fn add_generated(&mut self, index: usize, item: GeneratedEquipment) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.slots[index] = Slot::Generated(item);
        true
    }

    pub fn clear_slot(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.slots[index] = Slot::Empty;
        true
    }

    pub fn clear_all(&mut self) {
        self.slots.fill(Slot::Empty);
    }

    /// Register a craft-completion observer. Observers run synchronously, in
    /// registration order, after slots are cleared and before `craft` returns.
    pub fn on_craft(&mut self, observer: impl FnMut(&ElementProfile, u32, &[GeneratedEquipment]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Fold every occupied slot into element totals and a bonus level.
    /// Returns `None` (and touches nothing) when the bench is empty; otherwise
    /// all slots are cleared unconditionally.
    pub fn craft(&mut self, catalog: &Catalog) -> Option<CraftOutcome> {
        if self.slots.iter().all(Slot::is_empty) {
            return None;
        }

        let mut elements = ElementProfile::new();
        let mut bonus_level: u32 = 0;
        let mut ingredient_ids: Vec<String> = Vec::new();
        let mut equipment_ids: Vec<String> = Vec::new();
        let mut consumed_generated: Vec<GeneratedEquipment> = Vec::new();

        for index in 0..self.slots.len() {
            match std::mem::replace(&mut self.slots[index], Slot::Empty) {
                Slot::Empty => {}
                Slot::Ingredient(id) => match catalog.ingredient(&id) {
                    Some(ingredient) => {
                        if let Some(affinity) = &ingredient.affinity {
                            elements.add(affinity, INGREDIENT_ELEMENT_AMOUNT);
                        }
                        bonus_level += ingredient.base_value / INGREDIENT_BONUS_DIVISOR;
                        ingredient_ids.push(id);
                    }
                    None => warn!(slot = index, id = %id, "Ingredient vanished from catalog; skipped"),
                },
                Slot::Equipment(id) => match catalog.equipment(&id) {
                    Some(equipment) => {
                        bonus_level += equipment.portal_bonus;
                        for (element, amount) in &equipment.element_bonus {
                            elements.add(element, *amount);
                        }
                        equipment_ids.push(id);
                    }
                    None => warn!(slot = index, id = %id, "Equipment vanished from catalog; skipped"),
                },
                Slot::Generated(item) => {
                    bonus_level += item.portal_bonus + item.total_cost / GEAR_COST_BONUS_DIVISOR;
                    for (element, amount) in &item.element_bonus {
                        elements.add(element, *amount);
                    }
                    consumed_generated.push(item);
                }
            }
        }

        let recipe = if ingredient_ids.is_empty() {
            None
        } else {
            Some(recipe_id(&ingredient_ids))
        };

        let is_new_recipe = match &recipe {
            Some(id) if ingredient_ids.len() >= MIN_RECIPE_INGREDIENTS => {
                self.recipes.record(DiscoveredRecipe {
                    id: id.clone(),
                    elements: elements.clone(),
                    bonus_level,
                })
            }
            _ => false,
        };
        if is_new_recipe {
            info!(recipe = recipe.as_deref().unwrap_or(""), "New recipe discovered");
        }

        debug!(
            ingredients = ingredient_ids.len(),
            equipment = equipment_ids.len(),
            generated = consumed_generated.len(),
            bonus_level,
            "Craft complete"
        );

        for observer in &mut self.observers {
            observer(&elements, bonus_level, &consumed_generated);
        }

        Some(CraftOutcome {
            elements,
            bonus_level,
            is_new_recipe,
            recipe_id: recipe,
            consumed_generated,
            ingredient_ids,
            equipment_ids,
        })
    }

    // ---- recipe accessors ----

    pub fn discovered_recipe_ids(&self) -> Vec<String> {
        self.recipes.discovered_ids()
    }

    pub fn recipe_snapshot(&self, id: &str) -> Option<DiscoveredRecipe> {
        self.recipes.snapshot(id).cloned()
    }

    pub fn has_discovered(&self, id: &str) -> bool {
        self.recipes.contains(id)
    }

    // ---- persistence ----

    /// Flat records for every occupied slot, id references only
    pub fn export_slots(&self) -> Vec<SlotRecord> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Empty => None,
                Slot::Ingredient(id) => Some(SlotRecord {
                    index,
                    ingredient_id: Some(id.clone()),
                    equipment_id: None,
                    is_generated: false,
                }),
                Slot::Equipment(id) => Some(SlotRecord {
                    index,
                    ingredient_id: None,
                    equipment_id: Some(id.clone()),
                    is_generated: false,
                }),
                Slot::Generated(item) => Some(SlotRecord {
                    index,
                    ingredient_id: None,
                    equipment_id: Some(item.id.clone()),
                    is_generated: true,
                }),
            })
            .collect()
    }

    /// Rebuild slot contents from persisted records. Catalog ids re-resolve
    /// through the catalog; generated ids go through `resolve_generated` since
    /// generated items are not catalog members. A record that fails to resolve
    /// leaves its slot empty rather than applying partially. Returns how many
    /// slots were restored.
    pub fn restore_slots(
        &mut self,
        records: &[SlotRecord],
        catalog: &Catalog,
        mut resolve_generated: impl FnMut(&str) -> Option<GeneratedEquipment>,
    ) -> usize {
        self.clear_all();
        let mut restored = 0;
        for record in records {
            if record.index >= self.slots.len() {
                warn!(index = record.index, "Slot record out of range; dropped");
                continue;
            }
            let ok = match (&record.ingredient_id, &record.equipment_id, record.is_generated) {
                (Some(id), _, false) => self.add_ingredient(record.index, id, catalog),
                (None, Some(id), false) => self.add_equipment(record.index, id, catalog),
                (None, Some(id), true) => match resolve_generated(id) {
                    Some(item) => self.add_generated(record.index, item),
                    None => {
                        warn!(id = %id, "Generated item unresolved; slot left empty");
                        false
                    }
                },
                _ => false,
            };
            if ok {
                restored += 1;
            }
        }
        restored
    }

    pub fn restore_recipes<I: IntoIterator<Item = String>>(&mut self, ids: I) {
        self.recipes.restore_ids(ids);
    }
}
