//! Variant Filter
//!
//! [`ShaderStripper`] runs the rule chain over a candidate list, compacts
//! the list in place and keeps the build-wide statistics.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sieve::prelude::*;
//!
//! let aggregator = FeatureAggregator::new(ProfileSet::load("profiles.json")?);
//! let stripper = ShaderStripper::default();
//!
//! // Called by the compiler front end once per (shader, pass, stage).
//! let report = stripper.filter_variants(&aggregator, &unit, &mut candidates);
//! ```
//!
//! One stripper is meant to live for a whole build and may be shared across
//! worker threads, each filtering its own candidate list.

use sieve_core::ShaderFeatures;
use sieve_profiles::{BuildSettings, FeatureAggregator, ShaderVariantLogLevel};

use crate::catalog::{ShaderCatalog, ShaderClass};
use crate::compaction::retain_unordered;
use crate::rules::{StripContext, StripRule};
use crate::stats::{StripReport, StripStats};
use crate::unit::ShaderUnit;
use crate::variant::ShaderVariant;

#[derive(Debug, Default)]
pub struct ShaderStripper {
    catalog: ShaderCatalog,
    stats: StripStats,
}

impl ShaderStripper {
    #[must_use]
    pub fn new(catalog: ShaderCatalog) -> Self {
        Self {
            catalog,
            stats: StripStats::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &ShaderCatalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> &StripStats {
        &self.stats
    }

    /// Filters `candidates` against the aggregated build configuration.
    ///
    /// Without an active profile the list is left untouched and nothing is
    /// recorded.
    pub fn filter_variants(
        &self,
        aggregator: &FeatureAggregator,
        shader: &ShaderUnit,
        candidates: &mut Vec<ShaderVariant>,
    ) -> StripReport {
        let Some(settings) = aggregator.build_settings() else {
            return StripReport::unchanged(candidates.len());
        };
        self.filter_with(aggregator.supported_features(), settings, shader, candidates)
    }

    /// Filters `candidates` against an explicit feature mask and build knobs.
    ///
    /// Survivors keep no particular order (see [`crate::compaction`]). An
    /// empty list returns immediately without touching the statistics.
    pub fn filter_with(
        &self,
        features: ShaderFeatures,
        settings: BuildSettings,
        shader: &ShaderUnit,
        candidates: &mut Vec<ShaderVariant>,
    ) -> StripReport {
        if candidates.is_empty() {
            return StripReport::default();
        }

        let ctx = StripContext {
            features,
            settings,
            unit: shader,
            class: self.catalog.classify(shader),
        };

        let before = candidates.len();
        let mut stripped_by_rule = [0usize; StripRule::COUNT];
        let after = retain_unordered(candidates, |variant| {
            match StripRule::first_match(&ctx, variant) {
                Some(rule) => {
                    stripped_by_rule[rule.index()] += 1;
                    false
                }
                None => true,
            }
        });

        let report = StripReport {
            before,
            after,
            stripped_by_rule,
        };

        if settings.log_level.is_enabled() {
            self.stats.record(&report);
            self.log_report(&ctx, &report);
        }

        report
    }

    fn log_report(&self, ctx: &StripContext<'_>, report: &StripReport) {
        let wants_line = ctx.settings.log_level == ShaderVariantLogLevel::AllShaders
            || ctx.class.contains(ShaderClass::PIPELINE);
        if !wants_line {
            return;
        }

        let totals = self.stats.snapshot();
        log::info!(
            "STRIPPING: {} ({} pass) ({}) - Remaining shader variants = {}/{} = {:.2}% - Total = {}/{} = {:.2}%",
            ctx.unit.name_str(),
            ctx.unit.pass_name_str(),
            ctx.unit.stage,
            report.after,
            report.before,
            report.remaining_percentage(),
            totals.total_output,
            totals.total_input,
            totals.remaining_percentage(),
        );

        if log::log_enabled!(log::Level::Debug) && report.stripped() > 0 {
            for rule in StripRule::CHAIN {
                let count = report.stripped_by(rule);
                if count > 0 {
                    log::debug!("    {rule}: {count}");
                }
            }
        }
    }
}
