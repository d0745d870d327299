//! Error Types
//!
//! This module defines the error types used throughout the stripper.
//!
//! # Overview
//!
//! Variant filtering itself never fails: absent inputs degrade to a no-op and
//! nonsensical keyword combinations are stripped instead of reported. The
//! main error type [`SieveError`] therefore only covers the configuration
//! edge of the system:
//! - Reading profile and manifest files
//! - Decoding JSON configuration
//! - Parsing platform / pass / stage / GUID identifiers coming from a host
//!
//! # Usage
//!
//! ```rust,ignore
//! use sieve_core::errors::{SieveError, Result};
//!
//! fn load_profiles(path: &std::path::Path) -> Result<ProfileSet> {
//!     ProfileSet::load(path)
//! }
//! ```

use thiserror::Error;

/// The main error type for the stripper.
#[derive(Error, Debug)]
pub enum SieveError {
    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// Configuration or manifest file could not be read.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A shader compiler platform name that is not part of the catalog.
    #[error("Unknown shader platform: {0}")]
    UnknownPlatform(String),

    /// A pass type name that is not part of the catalog.
    #[error("Unknown pass type: {0}")]
    UnknownPassType(String),

    /// A shader stage name that is not part of the catalog.
    #[error("Unknown shader stage: {0}")]
    UnknownStage(String),

    /// An asset GUID that is not 32 hexadecimal digits.
    #[error("Invalid asset GUID: {0}")]
    InvalidGuid(String),

    /// Raw feature bits that do not map to any known capability.
    #[error("Invalid shader feature bits: {bits:#010x} (unknown: {unknown:#010x})")]
    InvalidFeatureBits {
        /// The raw value that was supplied
        bits: u32,
        /// The bits outside the known feature set
        unknown: u32,
    },
}

/// Alias for `Result<T, SieveError>`.
pub type Result<T> = std::result::Result<T, SieveError>;
