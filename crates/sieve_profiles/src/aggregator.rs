//! Feature Capability Aggregator
//!
//! Scans every configured [`RenderingProfile`] and unions their
//! [`ShaderFeatures`]. A build has to support the superset of all quality
//! tiers, so the combination is always an OR, never an AND.
//!
//! # Lifecycle
//!
//! 1. Construct once at build start with [`FeatureAggregator::new`]
//! 2. Share by reference with every filtering call; the first
//!    [`supported_features`](FeatureAggregator::supported_features) call
//!    computes and freezes the mask
//! 3. On configuration change, [`set_profiles`](FeatureAggregator::set_profiles)
//!    or [`invalidate`](FeatureAggregator::invalidate) (both need `&mut`, so no
//!    filtering call can observe a half-updated cache)
//!
//! The cache is a [`OnceLock`], so concurrent readers never lock once it is
//! populated.

use std::sync::OnceLock;

use sieve_core::ShaderFeatures;

use crate::profile::{BuildSettings, RenderingProfile};
use crate::set::ProfileSet;

/// Owns the profile configuration and the memoized build-wide feature mask.
#[derive(Debug, Default)]
pub struct FeatureAggregator {
    profiles: ProfileSet,
    cached: OnceLock<ShaderFeatures>,
}

impl FeatureAggregator {
    #[must_use]
    pub fn new(profiles: ProfileSet) -> Self {
        Self {
            profiles,
            cached: OnceLock::new(),
        }
    }

    /// The union of every present profile's features, computed on first use.
    #[must_use]
    pub fn supported_features(&self) -> ShaderFeatures {
        *self
            .cached
            .get_or_init(|| Self::aggregate(&self.profiles))
    }

    /// Whether the mask has been computed since the last invalidation.
    #[inline]
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cached.get().is_some()
    }

    /// Drops the cached mask; the next read recomputes it.
    pub fn invalidate(&mut self) {
        self.cached.take();
    }

    /// Drops the cached mask and recomputes it right away.
    pub fn recompute(&mut self) -> ShaderFeatures {
        self.invalidate();
        self.supported_features()
    }

    /// Replaces the configuration and invalidates the cache.
    pub fn set_profiles(&mut self, profiles: ProfileSet) {
        self.profiles = profiles;
        self.invalidate();
    }

    #[inline]
    #[must_use]
    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    /// The active profile, if any. Filtering is a no-op without one.
    #[inline]
    #[must_use]
    pub fn active_profile(&self) -> Option<&RenderingProfile> {
        self.profiles.active()
    }

    /// Build knobs of the active profile.
    #[must_use]
    pub fn build_settings(&self) -> Option<BuildSettings> {
        self.active_profile().map(RenderingProfile::build_settings)
    }

    fn aggregate(profiles: &ProfileSet) -> ShaderFeatures {
        let mut scanned = 0usize;
        let features = profiles
            .iter()
            .inspect(|_| scanned += 1)
            .fold(ShaderFeatures::empty(), |acc, profile| {
                acc | profile.shader_features()
            });

        log::debug!(
            "Supported shader features from {scanned}/{} profile(s): {features:?}",
            profiles.slot_count()
        );
        features
    }
}
