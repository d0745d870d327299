//! Sieve Core
//!
//! Foundational types shared by every Sieve crate:
//!
//! - [`ShaderFeatures`]: capability bitmask derived from rendering profiles
//! - [`ShaderKeyword`] / [`KeywordSet`]: the closed keyword catalog the strip
//!   rules read
//! - [`interner`]: string interning for shader and keyword names
//! - [`errors`]: the [`SieveError`] type and [`Result`] alias

pub mod errors;
pub mod features;
pub mod interner;
pub mod keywords;

pub use errors::{Result, SieveError};
pub use features::ShaderFeatures;
pub use interner::Symbol;
pub use keywords::{KeywordSet, ShaderKeyword};
