//! Sieve Profiles
//!
//! Rendering profile configuration and the [`FeatureAggregator`] that turns
//! a [`ProfileSet`] into the build-wide [`ShaderFeatures`](sieve_core::ShaderFeatures)
//! mask.

pub mod aggregator;
pub mod profile;
pub mod set;

pub use aggregator::FeatureAggregator;
pub use profile::{BuildSettings, LightRenderingMode, RenderingProfile, ShaderVariantLogLevel};
pub use set::ProfileSet;
