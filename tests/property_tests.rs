//! Filter Property Tests
//!
//! Exhaustive checks over every combination of the non-deprecated catalog
//! keywords (2^10 sets), on a regular and a limited platform:
//! - Idempotence: filtering survivors again removes nothing
//! - Monotonicity: a larger feature mask never strips more
//! - Compaction keeps exactly the accepted multiset
//! - Count conservation between reports, rule attribution and totals

use std::collections::HashMap;

use sieve::prelude::*;
use sieve::strip::{StatsSnapshot, StripContext};

const LIT: &str = "Universal Render Pipeline/Lit";

fn loud() -> BuildSettings {
    BuildSettings {
        post_process_included: true,
        log_level: ShaderVariantLogLevel::AllShaders,
    }
}

fn quiet() -> BuildSettings {
    BuildSettings {
        post_process_included: true,
        log_level: ShaderVariantLogLevel::Disabled,
    }
}

/// All 1024 combinations of bits 0..10, on one platform.
fn every_combination(platform: ShaderPlatform) -> Vec<ShaderVariant> {
    (0u32..1 << 10)
        .map(|bits| ShaderVariant::new(KeywordSet::from_bits_truncate(bits), platform))
        .collect()
}

/// Combinations on both platforms, plus one deprecated keyword sprinkled in.
fn candidate_pool() -> Vec<ShaderVariant> {
    let mut pool = every_combination(ShaderPlatform::Vulkan);
    pool.extend(every_combination(ShaderPlatform::Gles20));
    for (i, keyword) in ShaderKeyword::ALL
        .into_iter()
        .filter(|k| k.is_deprecated())
        .enumerate()
    {
        pool.push(ShaderVariant::new(
            keyword.flag() | KeywordSet::from_bits_truncate(i as u32 * 37),
            ShaderPlatform::Vulkan,
        ));
    }
    pool
}

fn units() -> Vec<ShaderUnit> {
    vec![
        ShaderUnit::new(LIT).with_pass(PassType::Forward, "ForwardLit"),
        ShaderUnit::new(LIT).with_pass(PassType::ShadowCaster, "ShadowCaster"),
        ShaderUnit::new("Universal Render Pipeline/Terrain/Lit").with_pass(PassType::Forward, "ForwardLit"),
    ]
}

fn multiset(variants: &[ShaderVariant]) -> HashMap<ShaderVariant, usize> {
    let mut counts = HashMap::new();
    for v in variants {
        *counts.entry(v.clone()).or_insert(0) += 1;
    }
    counts
}

fn features_of(bits: u32) -> ShaderFeatures {
    ShaderFeatures::from_bits_truncate(bits)
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn filtering_twice_changes_nothing() {
    let stripper = ShaderStripper::default();
    let pool = candidate_pool();

    for bits in (0u32..256).step_by(5) {
        for unit in units() {
            let mut list = pool.clone();
            stripper.filter_with(features_of(bits), quiet(), &unit, &mut list);
            let first = multiset(&list);

            let report = stripper.filter_with(features_of(bits), quiet(), &unit, &mut list);
            assert_eq!(report.stripped(), 0, "features {bits:#010b}");
            assert_eq!(multiset(&list), first);
        }
    }
}

// ============================================================================
// Monotonicity
// ============================================================================

#[test]
fn more_features_never_strip_more() {
    let stripper = ShaderStripper::default();
    let pool = every_combination(ShaderPlatform::Vulkan);
    // VERTEX_LIGHTING is a mode flag, not a capability: setting it strips more.
    let growable: Vec<ShaderFeatures> = ShaderFeatures::all()
        .difference(ShaderFeatures::VERTEX_LIGHTING)
        .iter()
        .collect();
    let unit = ShaderUnit::new(LIT).with_pass(PassType::Forward, "ForwardLit");

    for bits in 0u32..256 {
        let smaller = features_of(bits);
        let mut kept_small = pool.clone();
        stripper.filter_with(smaller, quiet(), &unit, &mut kept_small);

        for &flag in &growable {
            if smaller.contains(flag) {
                continue;
            }
            let larger = smaller | flag;
            let mut kept_large = pool.clone();
            stripper.filter_with(larger, quiet(), &unit, &mut kept_large);

            let large = multiset(&kept_large);
            for v in &kept_small {
                assert!(
                    large.contains_key(v),
                    "{v:?} kept under {smaller:?} but stripped under {larger:?}"
                );
            }
        }
    }
}

// ============================================================================
// Compaction
// ============================================================================

#[test]
fn survivors_are_exactly_the_accepted_multiset() {
    let stripper = ShaderStripper::default();
    let catalog = ShaderCatalog::builtin();
    let features = ShaderFeatures::MAIN_LIGHT
        | ShaderFeatures::MAIN_LIGHT_SHADOWS
        | ShaderFeatures::ADDITIONAL_LIGHTS
        | ShaderFeatures::MIXED_LIGHTING;

    // Duplicates on purpose: the host may submit the same variant twice.
    let mut pool = candidate_pool();
    pool.extend(candidate_pool().into_iter().step_by(3));

    for unit in units() {
        let ctx = StripContext {
            features,
            settings: quiet(),
            unit: &unit,
            class: catalog.classify(&unit),
        };
        let expected: Vec<ShaderVariant> = pool
            .iter()
            .filter(|v| StripRule::first_match(&ctx, v).is_none())
            .cloned()
            .collect();

        let mut list = pool.clone();
        let report = stripper.filter_with(features, quiet(), &unit, &mut list);

        assert_eq!(report.after, list.len());
        assert_eq!(multiset(&list), multiset(&expected));
    }
}

// ============================================================================
// Count conservation
// ============================================================================

#[test]
fn report_counts_match_rule_attribution() {
    let stripper = ShaderStripper::default();
    let catalog = ShaderCatalog::builtin();
    let pool = candidate_pool();

    for bits in (0u32..256).step_by(3) {
        let features = features_of(bits);
        for unit in units() {
            let ctx = StripContext {
                features,
                settings: loud(),
                unit: &unit,
                class: catalog.classify(&unit),
            };
            let mut expected = [0usize; StripRule::COUNT];
            for v in &pool {
                if let Some(rule) = StripRule::first_match(&ctx, v) {
                    expected[rule.index()] += 1;
                }
            }

            let mut list = pool.clone();
            let report = stripper.filter_with(features, loud(), &unit, &mut list);

            assert_eq!(report.before, pool.len());
            assert_eq!(report.before - report.after, expected.iter().sum::<usize>());
            assert_eq!(report.stripped_by_rule, expected);
        }
    }
}

#[test]
fn totals_equal_sum_of_calls() {
    let stripper = ShaderStripper::default();
    let pool = candidate_pool();

    let mut input = 0u64;
    let mut output = 0u64;
    let mut per_rule = [0u64; StripRule::COUNT];

    for bits in (0u32..256).step_by(17) {
        for unit in units() {
            let mut list = pool.clone();
            let report = stripper.filter_with(features_of(bits), loud(), &unit, &mut list);
            input += report.before as u64;
            output += report.after as u64;
            for rule in StripRule::CHAIN {
                per_rule[rule.index()] += report.stripped_by(rule) as u64;
            }
        }
    }

    let totals = stripper.stats().snapshot();
    assert_eq!(totals.total_input, input);
    assert_eq!(totals.total_output, output);
    assert_eq!(totals.stripped_by_rule, per_rule);
    assert_eq!(per_rule.iter().sum::<u64>(), input - output);
}

#[test]
fn quiet_builds_record_nothing() {
    let stripper = ShaderStripper::default();
    for unit in units() {
        let mut list = candidate_pool();
        stripper.filter_with(ShaderFeatures::MAIN_LIGHT, quiet(), &unit, &mut list);
    }
    assert_eq!(stripper.stats().snapshot(), StatsSnapshot::default());
}
