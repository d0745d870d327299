//! Shader Keyword Catalog
//!
//! The strip rules only ever look at a closed set of keywords. Each of them
//! is a [`ShaderKeyword`] with a canonical name and one bit in
//! [`KeywordSet`], so a rule check is a single mask test instead of a
//! string comparison.
//!
//! Names coming from a compiler front end are resolved through a lookup
//! table built once on first use ([`ShaderKeyword::from_name`]). Names that
//! are not in the catalog have no influence on stripping; callers keep them
//! around as interned symbols (see `ShaderVariant` in `sieve_strip`).

use std::fmt;
use std::sync::LazyLock;

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of catalog keywords enabled in one shader variant.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct KeywordSet: u32 {
        const MAIN_LIGHT_SHADOWS         = 1 << 0;
        const MAIN_LIGHT_SHADOWS_CASCADE = 1 << 1;
        const ADDITIONAL_LIGHTS_VERTEX   = 1 << 2;
        const ADDITIONAL_LIGHTS_PIXEL    = 1 << 3;
        const ADDITIONAL_LIGHT_SHADOWS   = 1 << 4;
        const SOFT_SHADOWS               = 1 << 5;
        const MIXED_LIGHTING_SUBTRACTIVE = 1 << 6;
        const LIGHTMAP                   = 1 << 7;
        const DIRECTIONAL_LIGHTMAP       = 1 << 8;
        const ALPHA_TEST                 = 1 << 9;

        // Retired keywords. Variants still carrying them are never valid.
        const DEPRECATED_VERTEX_LIGHTS         = 1 << 16;
        const DEPRECATED_SHADOWS_ENABLED       = 1 << 17;
        const DEPRECATED_SHADOWS_CASCADE       = 1 << 18;
        const DEPRECATED_LOCAL_SHADOWS_ENABLED = 1 << 19;

        const ADDITIONAL_LIGHTS_ANY = Self::ADDITIONAL_LIGHTS_VERTEX.bits()
            | Self::ADDITIONAL_LIGHTS_PIXEL.bits()
            | Self::ADDITIONAL_LIGHT_SHADOWS.bits();

        const DEPRECATED = Self::DEPRECATED_VERTEX_LIGHTS.bits()
            | Self::DEPRECATED_SHADOWS_ENABLED.bits()
            | Self::DEPRECATED_SHADOWS_CASCADE.bits()
            | Self::DEPRECATED_LOCAL_SHADOWS_ENABLED.bits();
    }
}

/// A keyword the strip rules know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderKeyword {
    MainLightShadows,
    MainLightShadowsCascade,
    AdditionalLightsVertex,
    AdditionalLightsPixel,
    AdditionalLightShadows,
    SoftShadows,
    MixedLightingSubtractive,
    Lightmap,
    DirectionalLightmap,
    AlphaTest,
    DeprecatedVertexLights,
    DeprecatedShadowsEnabled,
    DeprecatedShadowsCascade,
    DeprecatedLocalShadowsEnabled,
}

static KEYWORDS_BY_NAME: LazyLock<FxHashMap<&'static str, ShaderKeyword>> = LazyLock::new(|| {
    ShaderKeyword::ALL
        .iter()
        .map(|&keyword| (keyword.name(), keyword))
        .collect()
});

impl ShaderKeyword {
    /// Every catalog keyword, in bit order.
    pub const ALL: [ShaderKeyword; 14] = [
        Self::MainLightShadows,
        Self::MainLightShadowsCascade,
        Self::AdditionalLightsVertex,
        Self::AdditionalLightsPixel,
        Self::AdditionalLightShadows,
        Self::SoftShadows,
        Self::MixedLightingSubtractive,
        Self::Lightmap,
        Self::DirectionalLightmap,
        Self::AlphaTest,
        Self::DeprecatedVertexLights,
        Self::DeprecatedShadowsEnabled,
        Self::DeprecatedShadowsCascade,
        Self::DeprecatedLocalShadowsEnabled,
    ];

    /// Canonical keyword name as written in shader sources.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MainLightShadows => "_MAIN_LIGHT_SHADOWS",
            Self::MainLightShadowsCascade => "_MAIN_LIGHT_SHADOWS_CASCADE",
            Self::AdditionalLightsVertex => "_ADDITIONAL_LIGHTS_VERTEX",
            Self::AdditionalLightsPixel => "_ADDITIONAL_LIGHTS",
            Self::AdditionalLightShadows => "_ADDITIONAL_LIGHT_SHADOWS",
            Self::SoftShadows => "_SHADOWS_SOFT",
            Self::MixedLightingSubtractive => "_MIXED_LIGHTING_SUBTRACTIVE",
            Self::Lightmap => "LIGHTMAP_ON",
            Self::DirectionalLightmap => "DIRLIGHTMAP_COMBINED",
            Self::AlphaTest => "_ALPHATEST_ON",
            Self::DeprecatedVertexLights => "_VERTEX_LIGHTS",
            Self::DeprecatedShadowsEnabled => "_SHADOWS_ENABLED",
            Self::DeprecatedShadowsCascade => "_SHADOWS_CASCADE",
            Self::DeprecatedLocalShadowsEnabled => "_LOCAL_SHADOWS_ENABLED",
        }
    }

    /// The bit this keyword occupies in a [`KeywordSet`].
    #[must_use]
    pub const fn flag(self) -> KeywordSet {
        match self {
            Self::MainLightShadows => KeywordSet::MAIN_LIGHT_SHADOWS,
            Self::MainLightShadowsCascade => KeywordSet::MAIN_LIGHT_SHADOWS_CASCADE,
            Self::AdditionalLightsVertex => KeywordSet::ADDITIONAL_LIGHTS_VERTEX,
            Self::AdditionalLightsPixel => KeywordSet::ADDITIONAL_LIGHTS_PIXEL,
            Self::AdditionalLightShadows => KeywordSet::ADDITIONAL_LIGHT_SHADOWS,
            Self::SoftShadows => KeywordSet::SOFT_SHADOWS,
            Self::MixedLightingSubtractive => KeywordSet::MIXED_LIGHTING_SUBTRACTIVE,
            Self::Lightmap => KeywordSet::LIGHTMAP,
            Self::DirectionalLightmap => KeywordSet::DIRECTIONAL_LIGHTMAP,
            Self::AlphaTest => KeywordSet::ALPHA_TEST,
            Self::DeprecatedVertexLights => KeywordSet::DEPRECATED_VERTEX_LIGHTS,
            Self::DeprecatedShadowsEnabled => KeywordSet::DEPRECATED_SHADOWS_ENABLED,
            Self::DeprecatedShadowsCascade => KeywordSet::DEPRECATED_SHADOWS_CASCADE,
            Self::DeprecatedLocalShadowsEnabled => KeywordSet::DEPRECATED_LOCAL_SHADOWS_ENABLED,
        }
    }

    /// Resolves a keyword name through the catalog table.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        KEYWORDS_BY_NAME.get(name).copied()
    }

    #[must_use]
    pub const fn is_deprecated(self) -> bool {
        matches!(
            self,
            Self::DeprecatedVertexLights
                | Self::DeprecatedShadowsEnabled
                | Self::DeprecatedShadowsCascade
                | Self::DeprecatedLocalShadowsEnabled
        )
    }
}

impl fmt::Display for ShaderKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl KeywordSet {
    #[inline]
    #[must_use]
    pub fn is_enabled(self, keyword: ShaderKeyword) -> bool {
        self.contains(keyword.flag())
    }

    #[inline]
    pub fn enable(&mut self, keyword: ShaderKeyword) {
        self.insert(keyword.flag());
    }

    #[inline]
    pub fn disable(&mut self, keyword: ShaderKeyword) {
        self.remove(keyword.flag());
    }

    /// Iterates the catalog keywords enabled in this set.
    pub fn keywords(self) -> impl Iterator<Item = ShaderKeyword> {
        ShaderKeyword::ALL
            .into_iter()
            .filter(move |keyword| self.is_enabled(*keyword))
    }
}

impl From<ShaderKeyword> for KeywordSet {
    fn from(keyword: ShaderKeyword) -> Self {
        keyword.flag()
    }
}

impl FromIterator<ShaderKeyword> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = ShaderKeyword>>(iter: I) -> Self {
        iter.into_iter()
            .fold(KeywordSet::empty(), |set, keyword| set | keyword.flag())
    }
}
