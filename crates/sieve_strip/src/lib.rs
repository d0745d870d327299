//! Sieve Strip
//!
//! The variant filter: given the build-wide [`ShaderFeatures`](sieve_core::ShaderFeatures)
//! and a [`ShaderUnit`], drop every candidate [`ShaderVariant`] that can
//! never be reached at runtime.
//!
//! - [`rules`]: the ordered strip rule chain
//! - [`compaction`]: unordered in-place removal
//! - [`stats`]: per-call reports and build-wide totals
//! - [`catalog`]: shader identity → category lookup
//! - [`manifest`]: JSON batches of units and variants

pub mod catalog;
pub mod compaction;
pub mod manifest;
pub mod rules;
pub mod stats;
pub mod stripper;
pub mod unit;
pub mod variant;

pub use catalog::{ShaderCatalog, ShaderClass};
pub use compaction::{partition_unordered, retain_unordered};
pub use manifest::{ManifestUnit, ManifestVariant, VariantManifest};
pub use rules::{StripContext, StripRule};
pub use stats::{StatsSnapshot, StripReport, StripStats};
pub use stripper::ShaderStripper;
pub use unit::{AssetGuid, PassType, ShaderStage, ShaderUnit};
pub use variant::{ShaderPlatform, ShaderVariant};
