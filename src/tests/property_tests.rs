//! Property tests for the synergy aggregator and evolution resolver

use proptest::prelude::*;

use crate::evolution::{can_evolve, resolve_evolutions, EvolutionPolicy};
use crate::roster::Creature;
use crate::synergy::{best_attack_multiplier, compute_synergy, SynergyBucket};
use crate::tests::common::{standard_chart, TestCreatureBuilder};
use schema::{ElementalType, EvolutionCondition, EvolutionNode};
use strum::IntoEnumIterator;

// Strategy generators

fn elemental_type_strategy() -> impl Strategy<Value = ElementalType> {
    proptest::sample::select(ElementalType::iter().collect::<Vec<_>>())
}

/// One or two distinct types
fn creature_types_strategy() -> impl Strategy<Value = Vec<ElementalType>> {
    prop_oneof![
        elemental_type_strategy().prop_map(|t| vec![t]),
        (elemental_type_strategy(), elemental_type_strategy())
            .prop_filter("types must be distinct", |(a, b)| a != b)
            .prop_map(|(a, b)| vec![a, b]),
    ]
}

fn roster_strategy() -> impl Strategy<Value = Vec<Creature>> {
    prop::collection::vec(creature_types_strategy(), 0..=6).prop_map(|all_types| {
        all_types
            .iter()
            .enumerate()
            .map(|(i, types)| TestCreatureBuilder::new(&format!("Member{}", i), types).build())
            .collect()
    })
}

fn condition_strategy() -> impl Strategy<Value = EvolutionCondition> {
    prop_oneof![
        (1u8..=100).prop_map(EvolutionCondition::LevelUp),
        Just(EvolutionCondition::Other("trade".to_string())),
        Just(EvolutionCondition::Other("use-item".to_string())),
        Just(EvolutionCondition::Other("friendship".to_string())),
    ]
}

fn node_strategy() -> impl Strategy<Value = EvolutionNode> {
    prop::collection::vec(condition_strategy(), 0..4)
        .prop_map(|conditions| EvolutionNode::new("Target", conditions))
}

fn policy_strategy() -> impl Strategy<Value = EvolutionPolicy> {
    any::<bool>().prop_map(|assume| EvolutionPolicy {
        assume_non_level_triggers_satisfied: assume,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        max_global_rejects: 4096,
        ..ProptestConfig::default()
    })]

    /// Neutral multipliers never show up in any bucket
    #[test]
    fn prop_neutral_multiplier_never_listed(roster in roster_strategy()) {
        let summary = compute_synergy(&standard_chart(), &roster);
        for section in [&summary.offense, &summary.defense] {
            for bucket in [SynergyBucket::Strength, SynergyBucket::Weakness, SynergyBucket::Immunity] {
                for entry in section.bucket(bucket) {
                    prop_assert_ne!(entry.multiplier, 1.0);
                    prop_assert!(!entry.contributors.is_empty());
                }
            }
        }
        if roster.is_empty() {
            prop_assert!(summary.is_empty());
        }
    }

    /// Swapping out a creature's weaker attacking type does not change its offense entry
    #[test]
    fn prop_offense_depends_only_on_best_type(
        kept in elemental_type_strategy(),
        weaker in elemental_type_strategy(),
        replacement in elemental_type_strategy(),
        defending in elemental_type_strategy(),
    ) {
        let chart = standard_chart();
        let best = chart.lookup(kept, defending);
        prop_assume!(kept != weaker && kept != replacement);
        prop_assume!(chart.lookup(weaker, defending) <= best);
        prop_assume!(chart.lookup(replacement, defending) <= best);

        let before = TestCreatureBuilder::new("Subject", &[kept, weaker]).build();
        let after = TestCreatureBuilder::new("Subject", &[kept, replacement]).build();
        prop_assert_eq!(best_attack_multiplier(&chart, &before, defending), best);

        let before_summary = compute_synergy(&chart, &[before]);
        let after_summary = compute_synergy(&chart, &[after]);
        prop_assert_eq!(
            before_summary.offense.entries_for(defending),
            after_summary.offense.entries_for(defending)
        );
    }

    /// A lone creature's defense entry carries the product of its per-type multipliers
    #[test]
    fn prop_defense_uses_product(types in creature_types_strategy(), attacking in elemental_type_strategy()) {
        let chart = standard_chart();
        let expected: f32 = types.iter().map(|t| chart.lookup(attacking, *t)).product();
        let creature = TestCreatureBuilder::new("Subject", &types).build();

        let summary = compute_synergy(&chart, &[creature]);
        let entries = summary.defense.entries_for(attacking);

        if expected == 1.0 {
            prop_assert!(entries.is_empty());
        } else {
            prop_assert_eq!(entries.len(), 1);
            prop_assert_eq!(entries[0].1.multiplier, expected);
        }
        if types.len() == 1 {
            prop_assert_eq!(chart.combined_defense_multiplier(attacking, &types), chart.lookup(attacking, types[0]));
        }
    }

    /// Nodes without conditions are eligible at every level
    #[test]
    fn prop_unconditional_node_always_eligible(level in 1u8..=100, policy in policy_strategy()) {
        let creature = TestCreatureBuilder::new("Subject", &[ElementalType::Normal])
            .with_level(level)
            .with_evolution("Target", vec![])
            .build();
        let options = resolve_evolutions(&creature, &policy);
        prop_assert!(options[0].eligible);
        prop_assert_eq!(options[0].min_level, None);
    }

    /// can_evolve agrees with the resolved options, and blocked options always explain why
    #[test]
    fn prop_can_evolve_matches_options(
        level in 1u8..=100,
        nodes in prop::collection::vec(node_strategy(), 0..4),
        policy in policy_strategy(),
    ) {
        let mut creature = TestCreatureBuilder::new("Subject", &[ElementalType::Normal])
            .with_level(level)
            .build();
        creature.evolution_chain = nodes;

        let options = resolve_evolutions(&creature, &policy);
        prop_assert_eq!(options.len(), creature.evolution_chain.len());
        prop_assert_eq!(can_evolve(&creature, &policy), options.iter().any(|o| o.eligible));
        for option in &options {
            prop_assert_eq!(option.eligible, option.blocking_reason.is_none());
        }
    }
}
