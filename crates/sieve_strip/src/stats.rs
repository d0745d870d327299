//! Strip Statistics
//!
//! [`StripReport`] is the per-call result; [`StripStats`] accumulates them
//! over a whole build. Filtering calls for different shaders may run on
//! different threads, so the running totals are atomics and the last-report
//! slot sits behind a mutex. Per-call counts are plain locals.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::Serialize;

use crate::rules::StripRule;

/// Outcome of one filtering call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StripReport {
    /// Candidate count on entry.
    pub before: usize,
    /// Survivor count on exit.
    pub after: usize,
    /// Removals attributed to each rule, indexed by [`StripRule::index`].
    pub stripped_by_rule: [usize; StripRule::COUNT],
}

impl StripReport {
    /// A report for a call that left the list untouched.
    #[must_use]
    pub fn unchanged(len: usize) -> Self {
        Self {
            before: len,
            after: len,
            stripped_by_rule: [0; StripRule::COUNT],
        }
    }

    #[inline]
    #[must_use]
    pub fn stripped(&self) -> usize {
        self.before - self.after
    }

    #[inline]
    #[must_use]
    pub fn stripped_by(&self, rule: StripRule) -> usize {
        self.stripped_by_rule[rule.index()]
    }

    /// Survivors as a percentage of the input; 100% for an empty input.
    #[must_use]
    pub fn remaining_percentage(&self) -> f64 {
        percentage(self.after as u64, self.before as u64)
    }
}

/// Point-in-time copy of the build-wide counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    pub total_input: u64,
    pub total_output: u64,
    pub stripped_by_rule: [u64; StripRule::COUNT],
}

impl StatsSnapshot {
    #[must_use]
    pub fn remaining_percentage(&self) -> f64 {
        percentage(self.total_output, self.total_input)
    }

    #[must_use]
    pub fn stripped_percentage(&self) -> f64 {
        100.0 - self.remaining_percentage()
    }
}

/// Build-wide running totals.
#[derive(Debug, Default)]
pub struct StripStats {
    total_input: AtomicU64,
    total_output: AtomicU64,
    stripped_by_rule: [AtomicU64; StripRule::COUNT],
    last: Mutex<Option<StripReport>>,
}

impl StripStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one call's counts to the totals and remembers it as the last report.
    pub fn record(&self, report: &StripReport) {
        self.total_input
            .fetch_add(report.before as u64, Ordering::Relaxed);
        self.total_output
            .fetch_add(report.after as u64, Ordering::Relaxed);
        for (counter, &count) in self.stripped_by_rule.iter().zip(&report.stripped_by_rule) {
            if count > 0 {
                counter.fetch_add(count as u64, Ordering::Relaxed);
            }
        }
        *self.last.lock() = Some(*report);
    }

    #[inline]
    #[must_use]
    pub fn total_input(&self) -> u64 {
        self.total_input.load(Ordering::Relaxed)
    }

    #[inline]
    #[must_use]
    pub fn total_output(&self) -> u64 {
        self.total_output.load(Ordering::Relaxed)
    }

    #[inline]
    #[must_use]
    pub fn stripped_by(&self, rule: StripRule) -> u64 {
        self.stripped_by_rule[rule.index()].load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_report(&self) -> Option<StripReport> {
        *self.last.lock()
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_input: self.total_input(),
            total_output: self.total_output(),
            stripped_by_rule: std::array::from_fn(|i| {
                self.stripped_by_rule[i].load(Ordering::Relaxed)
            }),
        }
    }

    /// Zeroes every counter, e.g. at the start of a new build.
    pub fn reset(&self) {
        self.total_input.store(0, Ordering::Relaxed);
        self.total_output.store(0, Ordering::Relaxed);
        for counter in &self.stripped_by_rule {
            counter.store(0, Ordering::Relaxed);
        }
        *self.last.lock() = None;
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        100.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
