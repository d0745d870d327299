//! Global String Interner
//!
//! Shader names and pass-through keyword names arrive as strings from the
//! compiler front end, once per variant. Interning turns them into compact
//! [`Symbol`]s so catalog lookups and comparisons are integer operations.

use std::sync::LazyLock;

use lasso::{Spur, ThreadedRodeo};

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);

/// Compact integer identifier for an interned string.
pub type Symbol = Spur;

/// Interns a string, returning its [`Symbol`].
///
/// Returns the existing symbol if the string was interned before.
#[inline]
pub fn intern(s: &str) -> Symbol {
    INTERNER.get_or_intern(s)
}

/// Looks up the symbol of an already interned string without allocating.
#[inline]
pub fn get(s: &str) -> Option<Symbol> {
    INTERNER.get(s)
}

/// Resolves a symbol back to its string.
///
/// # Panics
/// Panics if the symbol was not produced by this interner.
#[inline]
pub fn resolve(sym: Symbol) -> &'static str {
    INTERNER.resolve(&sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let s1 = intern("Pipeline/Lit");
        let s2 = intern("Pipeline/Lit");
        let s3 = intern("Pipeline/Unlit");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);

        assert_eq!(resolve(s1), "Pipeline/Lit");
        assert_eq!(resolve(s3), "Pipeline/Unlit");
    }

    #[test]
    fn test_get() {
        let _ = intern("_EXISTING_KEYWORD");

        assert!(get("_EXISTING_KEYWORD").is_some());
        assert!(get("_NEVER_INTERNED_KEYWORD").is_none());
    }
}
