//! Shader Feature Capabilities
//!
//! [`ShaderFeatures`] is the capability bitmask a build must keep supported.
//! One value is derived per rendering profile; the build-wide value is the
//! union of all of them.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SieveError};

bitflags! {
    /// Rendering capabilities that keep shader variants alive.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ShaderFeatures: u32 {
        const MAIN_LIGHT               = 1 << 0;
        const MAIN_LIGHT_SHADOWS       = 1 << 1;
        const ADDITIONAL_LIGHTS        = 1 << 2;
        const ADDITIONAL_LIGHT_SHADOWS = 1 << 3;
        const VERTEX_LIGHTING          = 1 << 4;
        const SOFT_SHADOWS             = 1 << 5;
        const MIXED_LIGHTING           = 1 << 6;
        const TERRAIN_HOLES            = 1 << 7;
    }
}

impl ShaderFeatures {
    /// Builds a feature set from raw bits, rejecting unknown capabilities.
    pub fn from_raw(bits: u32) -> Result<Self> {
        Self::from_bits(bits).ok_or(SieveError::InvalidFeatureBits {
            bits,
            unknown: bits & !Self::all().bits(),
        })
    }

    #[inline]
    #[must_use]
    pub fn supports_main_light(self) -> bool {
        self.contains(Self::MAIN_LIGHT)
    }

    #[inline]
    #[must_use]
    pub fn supports_main_light_shadows(self) -> bool {
        self.contains(Self::MAIN_LIGHT_SHADOWS)
    }

    #[inline]
    #[must_use]
    pub fn supports_additional_lights(self) -> bool {
        self.contains(Self::ADDITIONAL_LIGHTS)
    }

    #[inline]
    #[must_use]
    pub fn supports_additional_light_shadows(self) -> bool {
        self.contains(Self::ADDITIONAL_LIGHT_SHADOWS)
    }

    /// Additional lights are shaded per-vertex in at least one profile.
    #[inline]
    #[must_use]
    pub fn uses_vertex_lighting(self) -> bool {
        self.contains(Self::VERTEX_LIGHTING)
    }

    #[inline]
    #[must_use]
    pub fn supports_soft_shadows(self) -> bool {
        self.contains(Self::SOFT_SHADOWS)
    }

    #[inline]
    #[must_use]
    pub fn supports_mixed_lighting(self) -> bool {
        self.contains(Self::MIXED_LIGHTING)
    }

    #[inline]
    #[must_use]
    pub fn supports_terrain_holes(self) -> bool {
        self.contains(Self::TERRAIN_HOLES)
    }

    /// Any shadow map is rendered by at least one profile.
    #[inline]
    #[must_use]
    pub fn supports_any_shadows(self) -> bool {
        self.intersects(Self::MAIN_LIGHT_SHADOWS | Self::ADDITIONAL_LIGHT_SHADOWS)
    }
}
