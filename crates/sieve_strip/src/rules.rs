//! Strip Rules
//!
//! Each [`StripRule`] is a pure predicate over the call context
//! ([`StripContext`]) and one candidate [`ShaderVariant`]. A variant is
//! dropped as soon as any rule matches; the chain order below only decides
//! which rule the removal is attributed to, since every predicate reads the
//! original variant and none depends on another's outcome.
//!
//! | # | Rule            | Depends on                     |
//! |---|-----------------|--------------------------------|
//! | 1 | `UnusedShader`  | features, settings, shader     |
//! | 2 | `UnusedPass`    | features, pass type            |
//! | 3 | `UnusedFeature` | features, shader, keywords     |
//! | 4 | `Unsupported`   | keywords, platform             |
//! | 5 | `Invalid`       | keywords                       |
//! | 6 | `Deprecated`    | keywords                       |

use std::fmt;

use sieve_core::{KeywordSet, ShaderFeatures};
use sieve_profiles::BuildSettings;

use crate::catalog::ShaderClass;
use crate::unit::{PassType, ShaderUnit};
use crate::variant::ShaderVariant;

/// Read-only state shared by every rule evaluation of one filtering call.
#[derive(Debug, Clone, Copy)]
pub struct StripContext<'a> {
    pub features: ShaderFeatures,
    pub settings: BuildSettings,
    pub unit: &'a ShaderUnit,
    /// Categories of `unit`, resolved once through the catalog.
    pub class: ShaderClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StripRule {
    UnusedShader,
    UnusedPass,
    UnusedFeature,
    Unsupported,
    Invalid,
    Deprecated,
}

impl StripRule {
    pub const COUNT: usize = 6;

    /// Evaluation order.
    pub const CHAIN: [StripRule; Self::COUNT] = [
        Self::UnusedShader,
        Self::UnusedPass,
        Self::UnusedFeature,
        Self::Unsupported,
        Self::Invalid,
        Self::Deprecated,
    ];

    /// Position in [`CHAIN`](Self::CHAIN); also the per-rule counter slot.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnusedShader => "unused shader",
            Self::UnusedPass => "unused pass",
            Self::UnusedFeature => "unused feature",
            Self::Unsupported => "unsupported combination",
            Self::Invalid => "invalid combination",
            Self::Deprecated => "deprecated keyword",
        }
    }

    /// Whether this rule alone would strip `variant`.
    #[must_use]
    pub fn matches(self, ctx: &StripContext<'_>, variant: &ShaderVariant) -> bool {
        match self {
            Self::UnusedShader => strip_unused_shader(ctx),
            Self::UnusedPass => strip_unused_pass(ctx.features, ctx.unit.pass_type),
            Self::UnusedFeature => strip_unused_features(ctx.features, ctx.class, variant.keywords),
            Self::Unsupported => strip_unsupported(variant),
            Self::Invalid => strip_invalid(variant.keywords),
            Self::Deprecated => strip_deprecated(variant.keywords),
        }
    }

    /// The first rule in the chain that strips `variant`, if any.
    #[must_use]
    pub fn first_match(ctx: &StripContext<'_>, variant: &ShaderVariant) -> Option<StripRule> {
        Self::CHAIN
            .into_iter()
            .find(|rule| rule.matches(ctx, variant))
    }
}

impl fmt::Display for StripRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn strip_unused_shader(ctx: &StripContext<'_>) -> bool {
    if !ctx.features.supports_main_light_shadows()
        && ctx.class.contains(ShaderClass::SCREEN_SPACE_SHADOWS)
    {
        return true;
    }

    !ctx.settings.post_process_included && ctx.class.contains(ShaderClass::POST_PROCESSING)
}

fn strip_unused_pass(features: ShaderFeatures, pass_type: PassType) -> bool {
    match pass_type {
        // GI baking only; never sampled at runtime.
        PassType::Meta => true,
        PassType::ShadowCaster => !features.supports_any_shadows(),
        _ => false,
    }
}

fn strip_unused_features(features: ShaderFeatures, class: ShaderClass, keywords: KeywordSet) -> bool {
    if !features.supports_main_light_shadows()
        && keywords.intersects(KeywordSet::MAIN_LIGHT_SHADOWS | KeywordSet::MAIN_LIGHT_SHADOWS_CASCADE)
    {
        return true;
    }

    // Vertex-lit additional lights: per-pixel and shadowed variants are dead.
    if features.uses_vertex_lighting()
        && keywords.intersects(KeywordSet::ADDITIONAL_LIGHTS_PIXEL | KeywordSet::ADDITIONAL_LIGHT_SHADOWS)
    {
        return true;
    }

    if !features.supports_additional_lights() && keywords.intersects(KeywordSet::ADDITIONAL_LIGHTS_ANY) {
        return true;
    }

    if !features.supports_additional_light_shadows()
        && keywords.contains(KeywordSet::ADDITIONAL_LIGHT_SHADOWS)
    {
        return true;
    }

    if !features.supports_soft_shadows() && keywords.contains(KeywordSet::SOFT_SHADOWS) {
        return true;
    }

    if !features.supports_mixed_lighting() && keywords.contains(KeywordSet::MIXED_LIGHTING_SUBTRACTIVE) {
        return true;
    }

    class.contains(ShaderClass::TERRAIN_LIT)
        && keywords.contains(KeywordSet::ALPHA_TEST)
        && !features.supports_terrain_holes()
}

fn strip_unsupported(variant: &ShaderVariant) -> bool {
    // Only baked GI exists, so a directional lightmap needs a lightmap.
    if variant.keywords.contains(KeywordSet::DIRECTIONAL_LIGHTMAP)
        && !variant.keywords.contains(KeywordSet::LIGHTMAP)
    {
        return true;
    }

    variant.platform.is_limited() && variant.keywords.contains(KeywordSet::MAIN_LIGHT_SHADOWS_CASCADE)
}

fn strip_invalid(keywords: KeywordSet) -> bool {
    let main_shadows = keywords.contains(KeywordSet::MAIN_LIGHT_SHADOWS);
    let additional_shadows = keywords.contains(KeywordSet::ADDITIONAL_LIGHT_SHADOWS);

    if !main_shadows && keywords.contains(KeywordSet::MAIN_LIGHT_SHADOWS_CASCADE) {
        return true;
    }

    if !(main_shadows || additional_shadows) && keywords.contains(KeywordSet::SOFT_SHADOWS) {
        return true;
    }

    additional_shadows && !keywords.contains(KeywordSet::ADDITIONAL_LIGHTS_PIXEL)
}

fn strip_deprecated(keywords: KeywordSet) -> bool {
    keywords.intersects(KeywordSet::DEPRECATED)
}
