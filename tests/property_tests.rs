//! Property-based tests for the normalization and matching laws.
//!
//! - Cross-expansion law: entries per fact = |tumor| × |tissue| × |variants|
//! - Copy invariant: every derived entry carries its fact's gene and tier
//! - Determinism: expansion is a pure function of its input
//! - Round-trip: a fact's first tokens always find its interpretation

use proptest::prelude::*;

use pmkb_db::matcher::{find_interpretations, TierOrder};
use pmkb_db::model::{RawFact, SampleVariant};
use pmkb_db::normalize::expand_facts;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Gene-like symbol
fn arb_gene() -> impl Strategy<Value = String> {
    "[A-Z]{2,6}[0-9]{0,2}"
}

/// Multi-value token: plain term with no commas
fn arb_term() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}( [a-z]{1,8})?"
}

/// Variant descriptor starting with an uppercase letter
fn arb_variant() -> impl Strategy<Value = String> {
    "[A-Z][0-9]{1,3}[A-Z]"
}

fn arb_fact_fields() -> impl Strategy<Value = (String, Vec<String>, Vec<String>, Vec<String>, i64)>
{
    (
        arb_gene(),
        proptest::collection::vec(arb_term(), 1..4),
        proptest::collection::vec(arb_term(), 1..4),
        proptest::collection::vec(arb_variant(), 1..4),
        0i64..5,
    )
}

/// A table of facts with source ids assigned by row position, as the
/// normalizer assigns them.
fn arb_facts() -> impl Strategy<Value = Vec<RawFact>> {
    proptest::collection::vec(arb_fact_fields(), 1..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (gene, tumors, tissues, variants, tier))| {
                RawFact::builder(i as u64, gene)
                    .tumor_types(tumors)
                    .tissue_types(tissues)
                    .variants(variants)
                    .tier(tier)
                    .interpretation(format!("interpretation {i}"))
                    .citations(format!("PMID {i}"))
                    .build()
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: entries per fact = |tumor| × |tissue| × |variants|
    #[test]
    fn prop_cross_expansion_law(facts in arb_facts()) {
        let kb = expand_facts(&facts);
        for fact in &facts {
            let derived = kb
                .entries()
                .iter()
                .filter(|e| e.source_id() == fact.source_id())
                .count();
            prop_assert_eq!(derived, fact.expansion_count());
        }
        let total: usize = facts.iter().map(RawFact::expansion_count).sum();
        prop_assert_eq!(kb.entry_count(), total);
    }

    /// Property: every derived entry carries its fact's gene and tier
    #[test]
    fn prop_copy_invariant(facts in arb_facts()) {
        let kb = expand_facts(&facts);
        for fact in &facts {
            for entry in kb.entries().iter().filter(|e| e.source_id() == fact.source_id()) {
                prop_assert_eq!(entry.gene(), fact.gene());
                prop_assert_eq!(entry.tier(), fact.tier());
            }
        }
    }

    /// Property: one interpretation row per fact, keyed by source id
    #[test]
    fn prop_one_interpretation_per_fact(facts in arb_facts()) {
        let kb = expand_facts(&facts);
        prop_assert_eq!(kb.interpretation_count(), facts.len());
        for (i, interp) in kb.interpretations().iter().enumerate() {
            prop_assert_eq!(interp.source_id(), i as u64);
        }
    }

    /// Property: expansion is deterministic
    #[test]
    fn prop_expansion_deterministic(facts in arb_facts()) {
        let once = expand_facts(&facts);
        let twice = expand_facts(&facts);
        prop_assert_eq!(once, twice);
    }

    /// Property: querying a fact's first tokens finds that fact
    #[test]
    fn prop_round_trip_lookup(facts in arb_facts()) {
        let kb = expand_facts(&facts);
        for fact in &facts {
            let sample = SampleVariant::builder(fact.gene(), &fact.variants()[0])
                .tumor_context(&fact.tumor_types()[0])
                .tissue_context(&fact.tissue_types()[0])
                .build();
            let found = find_interpretations(
                &sample,
                kb.entries(),
                kb.interpretations(),
                TierOrder::default(),
            )
            .unwrap();
            prop_assert!(found.iter().any(|i| i.source_id() == fact.source_id()));
        }
    }

    /// Property: matcher output is deduplicated on source id
    #[test]
    fn prop_matcher_output_distinct(facts in arb_facts()) {
        let kb = expand_facts(&facts);
        for fact in &facts {
            let sample = SampleVariant::new(fact.gene(), &fact.variants()[0]);
            let found = find_interpretations(
                &sample,
                kb.entries(),
                kb.interpretations(),
                TierOrder::default(),
            )
            .unwrap();
            let mut ids: Vec<u64> = found.iter().map(|i| i.source_id()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
        }
    }

    /// Property: matcher output respects the tier ordering strategy
    #[test]
    fn prop_matcher_output_tier_sorted(facts in arb_facts()) {
        let kb = expand_facts(&facts);
        for fact in &facts {
            let sample = SampleVariant::new(fact.gene(), &fact.variants()[0]);
            let found = find_interpretations(
                &sample,
                kb.entries(),
                kb.interpretations(),
                TierOrder::default(),
            )
            .unwrap();
            let tier_of = |source_id: u64| facts[source_id as usize].tier();
            for pair in found.windows(2) {
                prop_assert!(tier_of(pair[0].source_id()) <= tier_of(pair[1].source_id()));
            }
        }
    }
}
