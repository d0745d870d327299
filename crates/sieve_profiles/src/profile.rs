//! Rendering Profiles
//!
//! A [`RenderingProfile`] is one authored render-pipeline configuration: the
//! default one, or the one assigned to a quality tier. The stripper never
//! changes these; it only reads which capabilities they switch on.
//!
//! # Example
//!
//! ```rust,ignore
//! use sieve_profiles::{RenderingProfile, LightRenderingMode};
//!
//! // Mobile tier: vertex-lit additional lights, no shadows at all
//! let mobile = RenderingProfile {
//!     supports_main_light_shadows: false,
//!     additional_lights_mode: LightRenderingMode::PerVertex,
//!     ..Default::default()
//! };
//!
//! let features = mobile.shader_features();
//! assert!(features.uses_vertex_lighting());
//! ```

use serde::{Deserialize, Serialize};
use sieve_core::ShaderFeatures;

// ---------------------------------------------------------------------------
// LightRenderingMode
// ---------------------------------------------------------------------------

/// How additional (non-main) lights are shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightRenderingMode {
    /// Only the main light contributes.
    Disabled,
    /// Additional lights are evaluated in the vertex stage, without shadows.
    PerVertex,
    /// Additional lights are evaluated per fragment and may cast shadows.
    #[default]
    PerPixel,
}

// ---------------------------------------------------------------------------
// ShaderVariantLogLevel
// ---------------------------------------------------------------------------

/// How much the stripper reports while a build runs.
///
/// Anything other than [`Disabled`](Self::Disabled) also turns on the
/// build-wide statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderVariantLogLevel {
    #[default]
    Disabled,
    /// Report only shaders that ship with the render pipeline itself.
    OnlyPipelineShaders,
    /// Report every shader.
    AllShaders,
}

impl ShaderVariantLogLevel {
    #[inline]
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::Disabled
    }
}

// ---------------------------------------------------------------------------
// RenderingProfile
// ---------------------------------------------------------------------------

/// One render-pipeline configuration.
///
/// Every field has a default so partial JSON documents load.
///
/// | Field                              | Default     |
/// |------------------------------------|-------------|
/// | `supports_main_light_shadows`      | `true`      |
/// | `additional_lights_mode`           | `PerPixel`  |
/// | `supports_additional_light_shadows`| `false`     |
/// | `supports_soft_shadows`            | `false`     |
/// | `supports_mixed_lighting`          | `true`      |
/// | `supports_terrain_holes`           | `true`      |
/// | `post_process_included`            | `true`      |
/// | `shader_variant_log_level`         | `Disabled`  |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingProfile {
    /// Display name used in log output.
    pub name: Option<String>,

    // === Lighting ===
    pub supports_main_light_shadows: bool,
    pub additional_lights_mode: LightRenderingMode,
    /// Only honoured when additional lights are shaded per-pixel.
    pub supports_additional_light_shadows: bool,
    /// Only honoured when some shadow map is rendered.
    pub supports_soft_shadows: bool,
    pub supports_mixed_lighting: bool,
    pub supports_terrain_holes: bool,

    // === Build knobs (read from the active profile only) ===
    pub post_process_included: bool,
    pub shader_variant_log_level: ShaderVariantLogLevel,
}

impl Default for RenderingProfile {
    fn default() -> Self {
        Self {
            name: None,
            supports_main_light_shadows: true,
            additional_lights_mode: LightRenderingMode::PerPixel,
            supports_additional_light_shadows: false,
            supports_soft_shadows: false,
            supports_mixed_lighting: true,
            supports_terrain_holes: true,
            post_process_included: true,
            shader_variant_log_level: ShaderVariantLogLevel::Disabled,
        }
    }
}

impl RenderingProfile {
    /// Derives the capabilities this profile needs at runtime.
    ///
    /// Pure: the same profile always yields the same flags.
    #[must_use]
    pub fn shader_features(&self) -> ShaderFeatures {
        let mut features = ShaderFeatures::MAIN_LIGHT;

        if self.supports_main_light_shadows {
            features |= ShaderFeatures::MAIN_LIGHT_SHADOWS;
        }

        match self.additional_lights_mode {
            LightRenderingMode::Disabled => {}
            LightRenderingMode::PerVertex => {
                features |= ShaderFeatures::ADDITIONAL_LIGHTS | ShaderFeatures::VERTEX_LIGHTING;
            }
            LightRenderingMode::PerPixel => {
                features |= ShaderFeatures::ADDITIONAL_LIGHTS;
                if self.supports_additional_light_shadows {
                    features |= ShaderFeatures::ADDITIONAL_LIGHT_SHADOWS;
                }
            }
        }

        let any_shadows =
            self.supports_main_light_shadows || features.supports_additional_light_shadows();
        if self.supports_soft_shadows && any_shadows {
            features |= ShaderFeatures::SOFT_SHADOWS;
        }

        if self.supports_mixed_lighting {
            features |= ShaderFeatures::MIXED_LIGHTING;
        }

        if self.supports_terrain_holes {
            features |= ShaderFeatures::TERRAIN_HOLES;
        }

        features
    }

    /// The build knobs this profile contributes when it is the active one.
    #[inline]
    #[must_use]
    pub fn build_settings(&self) -> BuildSettings {
        BuildSettings {
            post_process_included: self.post_process_included,
            log_level: self.shader_variant_log_level,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

// ---------------------------------------------------------------------------
// BuildSettings
// ---------------------------------------------------------------------------

/// Per-build knobs the filter consults besides the feature mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildSettings {
    /// When `false`, post-processing shaders are dropped from the build.
    pub post_process_included: bool,
    pub log_level: ShaderVariantLogLevel,
}

impl From<&RenderingProfile> for BuildSettings {
    fn from(profile: &RenderingProfile) -> Self {
        profile.build_settings()
    }
}
