//! Feature Aggregation Integration Tests
//!
//! Tests for:
//! - Per-profile feature derivation across every field combination
//! - Union semantics of FeatureAggregator (OR over profiles, never AND)
//! - Empty / absent profile slots
//! - Cache lifecycle (invalidate, set_profiles) across a simulated rebuild
//! - Loading a profile set from JSON

use sieve::prelude::*;

/// Every distinct profile reachable through the boolean and enum fields.
fn all_profiles() -> Vec<RenderingProfile> {
    let mut profiles = Vec::new();
    for bits in 0u32..32 {
        for mode in [
            LightRenderingMode::Disabled,
            LightRenderingMode::PerVertex,
            LightRenderingMode::PerPixel,
        ] {
            profiles.push(RenderingProfile {
                supports_main_light_shadows: bits & 1 != 0,
                supports_additional_light_shadows: bits & 2 != 0,
                supports_soft_shadows: bits & 4 != 0,
                supports_mixed_lighting: bits & 8 != 0,
                supports_terrain_holes: bits & 16 != 0,
                additional_lights_mode: mode,
                ..Default::default()
            });
        }
    }
    profiles
}

// ============================================================================
// Per-profile derivation
// ============================================================================

#[test]
fn every_profile_has_main_light() {
    for profile in all_profiles() {
        assert!(profile.shader_features().supports_main_light());
    }
}

#[test]
fn vertex_lighting_excludes_additional_shadows() {
    for profile in all_profiles() {
        let features = profile.shader_features();
        if features.uses_vertex_lighting() {
            assert!(features.supports_additional_lights());
            assert!(!features.supports_additional_light_shadows(), "{profile:?}");
        }
    }
}

#[test]
fn soft_shadows_imply_some_shadow_map() {
    for profile in all_profiles() {
        let features = profile.shader_features();
        if features.supports_soft_shadows() {
            assert!(features.supports_any_shadows(), "{profile:?}");
        }
    }
}

// ============================================================================
// Union semantics
// ============================================================================

#[test]
fn aggregate_equals_or_of_profiles() {
    let profiles = all_profiles();
    // Walk a few windows of tiers rather than every subset.
    for start in (0..profiles.len()).step_by(7) {
        let window: Vec<_> = profiles.iter().skip(start).take(4).cloned().collect();
        let expected = window
            .iter()
            .fold(ShaderFeatures::empty(), |acc, p| acc | p.shader_features());

        let mut set = ProfileSet::new(window.first().cloned());
        for tier in window.iter().skip(1) {
            set = set.with_tier(Some(tier.clone()));
        }

        assert_eq!(FeatureAggregator::new(set).supported_features(), expected);
    }
}

#[test]
fn adding_a_profile_never_removes_features() {
    let profiles = all_profiles();
    let mut set = ProfileSet::new(None);
    let mut previous = ShaderFeatures::empty();

    for profile in profiles.iter().step_by(11) {
        set = set.with_tier(Some(profile.clone()));
        let current = FeatureAggregator::new(set.clone()).supported_features();
        assert!(current.contains(previous), "{previous:?} -> {current:?}");
        previous = current;
    }
}

#[test]
fn no_present_profiles_yields_empty_mask() {
    let set = ProfileSet::new(None).with_tier(None).with_tier(None);
    let aggregator = FeatureAggregator::new(set);
    assert_eq!(aggregator.supported_features(), ShaderFeatures::empty());
    assert!(aggregator.active_profile().is_none());
}

#[test]
fn two_tiers_union_soft_and_additional_shadows() {
    let main_only = RenderingProfile {
        supports_main_light_shadows: true,
        additional_lights_mode: LightRenderingMode::Disabled,
        ..Default::default()
    };
    let additional_soft = RenderingProfile {
        supports_main_light_shadows: false,
        additional_lights_mode: LightRenderingMode::PerPixel,
        supports_additional_light_shadows: true,
        supports_soft_shadows: true,
        ..Default::default()
    };

    let aggregator =
        FeatureAggregator::new(ProfileSet::new(Some(main_only)).with_tier(Some(additional_soft)));
    let features = aggregator.supported_features();

    assert!(features.contains(
        ShaderFeatures::MAIN_LIGHT_SHADOWS
            | ShaderFeatures::ADDITIONAL_LIGHTS
            | ShaderFeatures::ADDITIONAL_LIGHT_SHADOWS
            | ShaderFeatures::SOFT_SHADOWS
    ));
    assert!(!features.uses_vertex_lighting());
}

// ============================================================================
// Cache lifecycle
// ============================================================================

#[test]
fn rebuild_with_new_configuration() {
    let mut aggregator = FeatureAggregator::new(ProfileSet::new(Some(RenderingProfile {
        supports_terrain_holes: true,
        ..Default::default()
    })));
    assert!(aggregator.supported_features().supports_terrain_holes());

    // Next build: terrain holes switched off in the project.
    aggregator.set_profiles(ProfileSet::new(Some(RenderingProfile {
        supports_terrain_holes: false,
        ..Default::default()
    })));
    assert!(!aggregator.is_cached());
    assert!(!aggregator.supported_features().supports_terrain_holes());
}

#[test]
fn cached_mask_is_shared_across_threads() {
    let aggregator = FeatureAggregator::new(ProfileSet::new(Some(RenderingProfile::default())));
    let expected = aggregator.supported_features();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(aggregator.supported_features(), expected));
        }
    });
}

// ============================================================================
// Configuration loading
// ============================================================================

#[test]
fn load_profiles_from_json() {
    let set = ProfileSet::from_json_str(
        r#"{
            "default": {
                "name": "PC",
                "supports_soft_shadows": true,
                "shader_variant_log_level": "all_shaders"
            },
            "quality_tiers": [
                { "name": "Mobile", "supports_main_light_shadows": false, "additional_lights_mode": "per_vertex" }
            ]
        }"#,
    )
    .unwrap();

    let aggregator = FeatureAggregator::new(set);
    let features = aggregator.supported_features();
    assert!(features.supports_soft_shadows());
    assert!(features.uses_vertex_lighting());
    assert_eq!(
        aggregator.build_settings().unwrap().log_level,
        ShaderVariantLogLevel::AllShaders
    );
}
