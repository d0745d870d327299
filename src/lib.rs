//! # Sieve
//!
//! Build-time shader variant stripping.
//!
//! A shader compiles into one variant per enabled-keyword combination, and
//! most combinations are unreachable under a given project configuration.
//! Sieve computes which rendering capabilities the configured profiles can
//! ever need, then drops every candidate variant that depends on something
//! outside that set, or on a keyword combination that cannot occur.
//!
//! # Crate Organization
//!
//! - [`common`]: feature bitmask, keyword catalog, interner, errors
//! - [`profiles`]: rendering profiles and the [`FeatureAggregator`]
//! - [`strip`]: rule chain, compaction, statistics and the [`ShaderStripper`]
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sieve::prelude::*;
//!
//! let aggregator = FeatureAggregator::new(ProfileSet::load("profiles.json")?);
//! let stripper = ShaderStripper::default();
//!
//! let unit = ShaderUnit::new("Universal Render Pipeline/Lit")
//!     .with_pass(PassType::Forward, "ForwardLit");
//! let mut candidates = vec![
//!     ShaderVariant::from_keyword_names(["_MAIN_LIGHT_SHADOWS"], ShaderPlatform::Vulkan),
//! ];
//!
//! let report = stripper.filter_variants(&aggregator, &unit, &mut candidates);
//! println!("{} -> {}", report.before, report.after);
//! ```

pub use sieve_core as common;
pub use sieve_profiles as profiles;
pub use sieve_strip as strip;

pub use sieve_core::{KeywordSet, Result, ShaderFeatures, ShaderKeyword, SieveError};
pub use sieve_profiles::{
    BuildSettings, FeatureAggregator, LightRenderingMode, ProfileSet, RenderingProfile,
    ShaderVariantLogLevel,
};
pub use sieve_strip::{
    AssetGuid, PassType, ShaderCatalog, ShaderClass, ShaderPlatform, ShaderStage, ShaderStripper,
    ShaderUnit, ShaderVariant, StripReport, StripRule, StripStats, VariantManifest,
};

pub mod prelude {
    //! Commonly used types for hosts driving the stripper.
    pub use crate::{
        BuildSettings, FeatureAggregator, KeywordSet, LightRenderingMode, PassType, ProfileSet,
        RenderingProfile, ShaderCatalog, ShaderFeatures, ShaderKeyword, ShaderPlatform,
        ShaderStage, ShaderStripper, ShaderUnit, ShaderVariant, ShaderVariantLogLevel,
        StripReport, StripRule,
    };
}
