//! Profile Collection
//!
//! The build host hands over every configured profile at once: the default
//! profile plus one slot per quality tier. Slots may be empty (a tier that
//! falls back to a different pipeline), and empty slots are skipped.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sieve_core::Result;

use crate::profile::RenderingProfile;

/// Ordered collection of configured rendering profiles.
///
/// The JSON form mirrors the struct:
///
/// ```json
/// {
///   "default": { "supports_soft_shadows": true },
///   "quality_tiers": [
///     { "name": "Low", "additional_lights_mode": "per_vertex" },
///     null
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSet {
    /// The project-wide profile. Also the source of build knobs.
    pub default: Option<RenderingProfile>,
    /// One optional profile per quality tier, in tier order.
    pub quality_tiers: Vec<Option<RenderingProfile>>,
}

impl ProfileSet {
    #[must_use]
    pub fn new(default: Option<RenderingProfile>) -> Self {
        Self {
            default,
            quality_tiers: Vec::new(),
        }
    }

    /// Appends a quality tier slot.
    #[must_use]
    pub fn with_tier(mut self, profile: Option<RenderingProfile>) -> Self {
        self.quality_tiers.push(profile);
        self
    }

    /// The profile whose build knobs (post-processing, log level) apply.
    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<&RenderingProfile> {
        self.default.as_ref()
    }

    /// Every present profile: the default first, then tiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &RenderingProfile> {
        self.default
            .iter()
            .chain(self.quality_tiers.iter().flatten())
    }

    /// Number of slots, present or not.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        1 + self.quality_tiers.len()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a profile set from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let set = Self::from_json_str(&text)?;
        log::debug!(
            "Loaded {} profile slot(s) from {}",
            set.slot_count(),
            path.as_ref().display()
        );
        Ok(set)
    }
}
