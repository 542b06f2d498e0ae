//! Property-based tests using proptest
//!
//! Invariants that must hold for ALL inputs:
//! - Recipe identity: invariant under slot order
//! - Element profile: never stores a zero amount
//! - Classifier: zero-requirement archetype always scores exactly 10
//! - Generation: any seed/level -> valid item, cost >= 1, rarity monotonic
//! - Rewards: thresholds always partition [0, 1) monotonically

use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use portal_core::catalog::default_catalog;
use portal_core::crafting::recipe_id;
use portal_core::economy::ItemRarity;
use portal_core::elements::ElementProfile;
use portal_core::gear::{generate, GenerationOptions};
use portal_core::portal::score_match;
use portal_core::reward::{emission_chance, CategoryThresholds, RewardModifiers};

// ============================================================
// Recipe identity
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_recipe_id_order_invariant(mut ids in proptest::collection::vec("[a-z_]{1,12}", 1..6)) {
        let forward = recipe_id(&ids);
        ids.reverse();
        let reversed = recipe_id(&ids);
        prop_assert_eq!(forward, reversed);
    }

    #[test]
    fn prop_recipe_id_components_preserved(ids in proptest::collection::vec("[a-z_]{1,12}", 1..6)) {
        let id = recipe_id(&ids);
        let parts: Vec<&str> = id.split('+').collect();
        prop_assert_eq!(parts.len(), ids.len());
        for part in parts {
            prop_assert!(ids.iter().any(|i| i == part));
        }
    }
}

// ============================================================
// Element profile
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_profile_never_stores_zero(
        ops in proptest::collection::vec(("[a-e]", 0u32..20, any::<bool>()), 0..40)
    ) {
        let mut profile = ElementProfile::new();
        for (element, amount, is_add) in ops {
            if is_add {
                profile.add(&element, amount);
            } else {
                profile.remove(&element, amount);
            }
            for (key, value) in profile.iter() {
                prop_assert!(value > 0, "Key '{}' stored at zero", key);
            }
        }
    }
}

// ============================================================
// Classifier
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_basic_archetype_always_ten(
        amounts in proptest::collection::vec(("[a-z]{1,8}", 0u32..1000), 0..10)
    ) {
        let catalog = default_catalog();
        let basic = catalog.archetype("basic_rift").unwrap();
        let profile: ElementProfile = amounts.into_iter().collect();
        prop_assert_eq!(score_match(&profile, &[], &[], basic, &catalog), 10);
    }

    #[test]
    fn prop_score_zero_or_at_least_base(fire in 0u32..200) {
        // Gating is all-or-nothing: a score is either 0 or >= 10
        let catalog = default_catalog();
        let ember = catalog.archetype("ember_gate").unwrap();
        let profile: ElementProfile = [("fire".to_string(), fire)].into_iter().collect();
        let score = score_match(&profile, &[], &[], ember, &catalog);
        prop_assert!(score == 0 || score >= 10);
        prop_assert_eq!(score == 0, fire < 10);
    }
}

// ============================================================
// Equipment generation
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_any_seed_generates_valid_item(seed in any::<u64>(), level in 0u32..=60) {
        let catalog = default_catalog();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let item = generate(&mut rng, &catalog, &GenerationOptions::for_level(level)).unwrap();

        prop_assert!(item.total_cost >= 1);
        prop_assert!(item.item_level >= 1);
        prop_assert!(!item.name.is_empty());
        prop_assert!(item.name.contains(&item.gear_type.name));
        prop_assert_eq!(item.rarity, ItemRarity::from_cost(item.total_cost));
        prop_assert_eq!(item.portal_bonus, (item.total_cost as f32 * 1.5) as u32);
    }

    #[test]
    fn prop_generation_deterministic(seed in any::<u64>(), level in 1u32..=30) {
        let catalog = default_catalog();
        let options = GenerationOptions::for_level(level);
        let a = generate(&mut Xoshiro256PlusPlus::seed_from_u64(seed), &catalog, &options).unwrap();
        let b = generate(&mut Xoshiro256PlusPlus::seed_from_u64(seed), &catalog, &options).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_rarity_monotonic_in_cost(costs in proptest::collection::vec(0u32..200, 2..20)) {
        let mut sorted = costs;
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            prop_assert!(ItemRarity::from_cost(pair[1]) >= ItemRarity::from_cost(pair[0]));
        }
    }
}

// ============================================================
// Reward thresholds
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_thresholds_partition_for_any_modifiers(
        ingredient_chance in -2.0f64..3.0,
        equipment_chance in -2.0f64..3.0,
        rarity_bonus in 0u32..10,
    ) {
        let modifiers = RewardModifiers {
            ingredient_chance,
            equipment_chance,
            rarity_bonus,
            ..RewardModifiers::default()
        };
        let t = CategoryThresholds::with_modifiers(&modifiers);
        prop_assert!(t.gold > 0.0);
        prop_assert!(t.gold <= t.ingredient);
        prop_assert!(t.ingredient <= t.mana);
        prop_assert!(t.mana <= t.equipment);
        prop_assert!(t.equipment < 1.0);
    }

    #[test]
    fn prop_emission_chance_bounded(portal in 0u32..10_000, upgrade in 0u32..10_000) {
        let chance = emission_chance(portal, upgrade);
        prop_assert!((0.0..=0.95).contains(&chance));
        // Monotonic in each argument
        prop_assert!(emission_chance(portal + 1, upgrade) >= chance);
        prop_assert!(emission_chance(portal, upgrade + 1) >= chance);
    }
}
