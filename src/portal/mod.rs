//! Portal-type classification.
//!
//! Every archetype in the catalog is scored independently against a resource
//! profile; gating is all-or-nothing. An archetype with any unmet requirement
//! scores 0, so partial credit can never cross the selection threshold.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, PortalArchetype};
use crate::constants::{
    MIN_MATCH_SCORE, OPTIONAL_ELEMENT_BONUS, OVERSHOOT_BONUS_CAP, OVERSHOOT_BONUS_DIVISOR,
    REQUIREMENT_BASE_SCORE,
};
use crate::elements::ElementProfile;

/// Historical craft record a portal keeps for bestiary-style display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalRecord {
    pub elements: ElementProfile,
    pub ingredient_ids: Vec<String>,
    pub equipment_ids: Vec<String>,
}

/// Score one archetype against a profile.
///
/// Each required element met at or above its threshold earns a base 10 plus a
/// capped overshoot bonus. A declared tag requirement counts as one more
/// requirement slot, satisfied by any overlap between the archetype's tags and
/// the tags carried by the supplied ingredients/equipment. Zero requirements
/// scores exactly 10 regardless of profile. Fully met requirements unlock a
/// flat bonus per optional element present.
pub fn score_match(
    profile: &ElementProfile,
    ingredient_ids: &[String],
    equipment_ids: &[String],
    archetype: &PortalArchetype,
    catalog: &Catalog,
) -> u32 {
    let has_tag_requirement = !archetype.required_tags.is_empty();
    let requirement_total =
        archetype.required_elements.len() + usize::from(has_tag_requirement);

    if requirement_total == 0 {
        return REQUIREMENT_BASE_SCORE;
    }

    let mut met = 0usize;
    let mut score = 0u32;

    for (element, threshold) in &archetype.required_elements {
        let amount = profile.get(element);
        if amount >= *threshold {
            met += 1;
            score += REQUIREMENT_BASE_SCORE
                + ((amount - threshold) / OVERSHOOT_BONUS_DIVISOR).min(OVERSHOOT_BONUS_CAP);
        }
    }

    if has_tag_requirement {
        let present = collect_tags(ingredient_ids, equipment_ids, catalog);
        if archetype.required_tags.iter().any(|t| present.contains(t.as_str())) {
            met += 1;
            score += REQUIREMENT_BASE_SCORE;
        }
    }

    if met < requirement_total {
        return 0;
    }

    for element in &archetype.optional_elements {
        if profile.get(element) > 0 {
            score += OPTIONAL_ELEMENT_BONUS;
        }
    }

    score
}

/// Best-scoring archetype at or above the selection threshold, if any.
/// Strict maximum: ties keep the earliest archetype in catalog order.
pub fn match_portal_type<'a>(
    profile: &ElementProfile,
    ingredient_ids: &[String],
    equipment_ids: &[String],
    catalog: &'a Catalog,
) -> Option<&'a PortalArchetype> {
    let mut best: Option<(&PortalArchetype, u32)> = None;
    for archetype in &catalog.archetypes {
        let score = score_match(profile, ingredient_ids, equipment_ids, archetype, catalog);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((archetype, score));
        }
    }
    let (archetype, score) = best?;
    if score < MIN_MATCH_SCORE {
        return None;
    }
    debug!(archetype = %archetype.id, score, "Portal classified");
    Some(archetype)
}

/// Union of archetype ids matched by a set of historical craft records
pub fn discovered_portal_types(records: &[PortalRecord], catalog: &Catalog) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|record| {
            match_portal_type(
                &record.elements,
                &record.ingredient_ids,
                &record.equipment_ids,
                catalog,
            )
        })
        .map(|archetype| archetype.id.clone())
        .collect()
}

fn collect_tags<'a>(
    ingredient_ids: &'a [String],
    equipment_ids: &'a [String],
    catalog: &'a Catalog,
) -> BTreeSet<&'a str> {
    let mut tags = BTreeSet::new();
    for id in ingredient_ids {
        if let Some(ingredient) = catalog.ingredient(id) {
            tags.extend(ingredient.tags.iter().map(String::as_str));
        }
    }
    for id in equipment_ids {
        if let Some(equipment) = catalog.equipment(id) {
            tags.extend(equipment.tags.iter().map(String::as_str));
        }
    }
    tags
}
