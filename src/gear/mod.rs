//! Procedural equipment generation.
//!
//! An item is composed from the catalog attribute pools: a mandatory gear
//! type plus independently-rolled prefix, material and suffix. All
//! nondeterminism flows through the caller's `Rng`, so a seeded source
//! reproduces items exactly.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, GearType, MaterialAttr, PrefixAttr, SuffixAttr};
use crate::constants::{
    DEFAULT_MATERIAL_CHANCE, DEFAULT_PREFIX_CHANCE, DEFAULT_SUFFIX_CHANCE, MATERIAL_ELEMENT_BONUS,
    PORTAL_BONUS_PER_COST, PREFIX_ELEMENT_BONUS, SUFFIX_ELEMENT_BONUS_DEFAULT,
};
use crate::economy::ItemRarity;

/// Generation failures. Only forced ids and an empty gear-type pool can fail;
/// optional attributes degrade gracefully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GearError {
    #[error("unknown {kind} attribute '{id}'")]
    UnknownAttribute { kind: &'static str, id: String },
    #[error("gear type pool is empty")]
    EmptyGearTypePool,
}

/// Knobs for one generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Item level; clamped to a minimum of 1
    pub target_level: u32,
    pub prefix_chance: f64,
    pub material_chance: f64,
    pub suffix_chance: f64,
    /// Forced ids skip both the inclusion roll and the level filter
    pub forced_prefix: Option<String>,
    pub forced_material: Option<String>,
    pub forced_suffix: Option<String>,
    pub forced_gear_type: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            target_level: 1,
            prefix_chance: DEFAULT_PREFIX_CHANCE,
            material_chance: DEFAULT_MATERIAL_CHANCE,
            suffix_chance: DEFAULT_SUFFIX_CHANCE,
            forced_prefix: None,
            forced_material: None,
            forced_suffix: None,
            forced_gear_type: None,
        }
    }
}

impl GenerationOptions {
    pub fn for_level(target_level: u32) -> Self {
        Self {
            target_level,
            ..Self::default()
        }
    }

    /// Inclusion chances from runtime config, everything else default
    pub fn from_config(config: &crate::config::CoreConfig, target_level: u32) -> Self {
        Self {
            target_level,
            prefix_chance: config.prefix_chance,
            material_chance: config.material_chance,
            suffix_chance: config.suffix_chance,
            ..Self::default()
        }
    }
}

/// A procedurally generated item. Built once, then only ever cloned;
/// every composing attribute is retained so downstream systems can recover
/// the full generation lineage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEquipment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub gear_type: GearType,
    pub prefix: Option<PrefixAttr>,
    pub material: Option<MaterialAttr>,
    pub suffix: Option<SuffixAttr>,
    pub total_cost: u32,
    pub item_level: u32,
    pub rarity: ItemRarity,
    pub portal_bonus: u32,
    pub element_bonus: BTreeMap<String, u32>,
}

/// Compose a random item from the catalog pools.
pub fn generate<R: Rng>(
    rng: &mut R,
    catalog: &Catalog,
    options: &GenerationOptions,
) -> Result<GeneratedEquipment, GearError> {
    let level = options.target_level.max(1);

    let gear_type = match &options.forced_gear_type {
        Some(id) => catalog
            .gear_type(id)
            .cloned()
            .ok_or_else(|| GearError::UnknownAttribute {
                kind: "gear type",
                id: id.clone(),
            })?,
        None => {
            if catalog.gear_types.is_empty() {
                return Err(GearError::EmptyGearTypePool);
            }
            catalog.gear_types[rng.gen_range(0..catalog.gear_types.len())].clone()
        }
    };

    let prefix = roll_attribute(
        rng,
        &catalog.prefixes,
        options.forced_prefix.as_deref(),
        options.prefix_chance,
        level,
        "prefix",
    )?;
    let material = roll_attribute(
        rng,
        &catalog.materials,
        options.forced_material.as_deref(),
        options.material_chance,
        level,
        "material",
    )?;
    let suffix = roll_attribute(
        rng,
        &catalog.suffixes,
        options.forced_suffix.as_deref(),
        options.suffix_chance,
        level,
        "suffix",
    )?;

    let mut total_cost = gear_type.base_cost;
    if let Some(p) = &prefix {
        total_cost += p.cost;
    }
    if let Some(m) = &material {
        total_cost += m.cost;
    }
    if let Some(s) = &suffix {
        total_cost += s.cost;
    }
    let total_cost = total_cost.max(1);

    let mut element_bonus: BTreeMap<String, u32> = BTreeMap::new();
    if let Some(p) = &prefix {
        *element_bonus.entry(p.affinity.clone()).or_insert(0) += PREFIX_ELEMENT_BONUS;
    }
    if let Some(m) = &material {
        *element_bonus.entry(m.affinity.clone()).or_insert(0) += MATERIAL_ELEMENT_BONUS;
    }
    if let Some(s) = &suffix {
        *element_bonus.entry(s.affinity.clone()).or_insert(0) +=
            s.effect_value.unwrap_or(SUFFIX_ELEMENT_BONUS_DEFAULT);
    }

    let name = compose_name(&gear_type, prefix.as_ref(), material.as_ref(), suffix.as_ref());
    let description =
        compose_description(&gear_type, prefix.as_ref(), material.as_ref(), suffix.as_ref());

    Ok(GeneratedEquipment {
        id: format!("gen_{:08x}", rng.gen::<u32>()),
        name,
        description,
        gear_type,
        prefix,
        material,
        suffix,
        total_cost,
        item_level: level,
        rarity: ItemRarity::from_cost(total_cost),
        portal_bonus: (total_cost as f32 * PORTAL_BONUS_PER_COST) as u32,
        element_bonus,
    })
}

/// Draw a uniform level in [min, max], then generate with default options.
pub fn generate_for_level_range<R: Rng>(
    rng: &mut R,
    catalog: &Catalog,
    min_level: u32,
    max_level: u32,
) -> Result<GeneratedEquipment, GearError> {
    let lo = min_level.max(1);
    let hi = max_level.max(lo);
    let level = rng.gen_range(lo..=hi);
    generate(rng, catalog, &GenerationOptions::for_level(level))
}

/// Pool entry seam shared by the three optional attribute kinds
trait PoolAttr {
    fn id(&self) -> &str;
    fn min_level(&self) -> u32;
}

impl PoolAttr for PrefixAttr {
    fn id(&self) -> &str {
        &self.id
    }
    fn min_level(&self) -> u32 {
        self.min_level
    }
}

impl PoolAttr for MaterialAttr {
    fn id(&self) -> &str {
        &self.id
    }
    fn min_level(&self) -> u32 {
        self.min_level
    }
}

impl PoolAttr for SuffixAttr {
    fn id(&self) -> &str {
        &self.id
    }
    fn min_level(&self) -> u32 {
        self.min_level
    }
}

/// One optional attribute: forced id wins outright, otherwise an inclusion
/// roll followed by a uniform pick from the level-eligible subset. An empty
/// eligible subset skips the attribute.
fn roll_attribute<R: Rng, T: PoolAttr + Clone>(
    rng: &mut R,
    pool: &[T],
    forced: Option<&str>,
    chance: f64,
    level: u32,
    kind: &'static str,
) -> Result<Option<T>, GearError> {
    if let Some(forced_id) = forced {
        return pool
            .iter()
            .find(|a| a.id() == forced_id)
            .cloned()
            .map(Some)
            .ok_or_else(|| GearError::UnknownAttribute {
                kind,
                id: forced_id.to_string(),
            });
    }
    if rng.gen::<f64>() >= chance {
        return Ok(None);
    }
    let eligible: Vec<&T> = pool.iter().filter(|a| a.min_level() <= level).collect();
    if eligible.is_empty() {
        return Ok(None);
    }
    Ok(Some(eligible[rng.gen_range(0..eligible.len())].clone()))
}

fn compose_name(
    gear_type: &GearType,
    prefix: Option<&PrefixAttr>,
    material: Option<&MaterialAttr>,
    suffix: Option<&SuffixAttr>,
) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(4);
    if let Some(p) = prefix {
        parts.push(&p.name);
    }
    if let Some(m) = material {
        parts.push(&m.name);
    }
    parts.push(&gear_type.name);
    if let Some(s) = suffix {
        parts.push(&s.name);
    }
    parts.join(" ")
}

fn compose_description(
    gear_type: &GearType,
    prefix: Option<&PrefixAttr>,
    material: Option<&MaterialAttr>,
    suffix: Option<&SuffixAttr>,
) -> String {
    let mut parts: Vec<&str> = vec![&gear_type.description];
    if let Some(p) = prefix {
        parts.push(&p.description);
    }
    if let Some(m) = material {
        parts.push(&m.description);
    }
    if let Some(s) = suffix {
        parts.push(&s.description);
    }
    parts.join(". ")
}
