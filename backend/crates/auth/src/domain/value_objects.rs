//! Auth Value Objects
//!
//! [`Username`] is the public handle users log in with; the canonical
//! (lowercase) form backs uniqueness so "Alice" and "alice" cannot
//! coexist, while the original casing is preserved for display.
//! [`Identity`] is the verified claim extracted from a bearer token and
//! threaded into every protected operation.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum username length in characters (after normalization)
pub const USERNAME_MAX_LENGTH: usize = 32;

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains invalid characters")]
    InvalidCharacter,
}

/// Validated username
///
/// Invariants: non-empty after trim, at most [`USERNAME_MAX_LENGTH`]
/// characters, no whitespace or control characters inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username {
    original: String,
    canonical: String,
}

impl Username {
    /// Validate and construct a username
    ///
    /// Input is NFKC-normalized and trimmed before validation.
    pub fn new(raw: &str) -> Result<Self, UsernameError> {
        let normalized: String = raw.nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: USERNAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(UsernameError::InvalidCharacter);
        }

        Ok(Self {
            original: trimmed.to_string(),
            canonical: trimmed.to_lowercase(),
        })
    }

    /// Original casing, for display and token claims
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercased form backing the uniqueness constraint
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// Verified identity extracted from a bearer token
///
/// This is the capability every protected operation receives; ownership
/// checks key off `username` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_trims_and_canonicalizes() {
        let name = Username::new("  Alice  ").unwrap();
        assert_eq!(name.original(), "Alice");
        assert_eq!(name.canonical(), "alice");
    }

    #[test]
    fn test_username_rejects_empty() {
        assert_eq!(Username::new("   "), Err(UsernameError::Empty));
        assert_eq!(Username::new(""), Err(UsernameError::Empty));
    }

    #[test]
    fn test_username_rejects_inner_whitespace() {
        assert_eq!(
            Username::new("al ice"),
            Err(UsernameError::InvalidCharacter)
        );
    }

    #[test]
    fn test_username_rejects_too_long() {
        let long = "x".repeat(USERNAME_MAX_LENGTH + 1);
        assert!(matches!(
            Username::new(&long),
            Err(UsernameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_case_variants_share_canonical() {
        let a = Username::new("Alice").unwrap();
        let b = Username::new("ALICE").unwrap();
        assert_eq!(a.canonical(), b.canonical());
        assert_ne!(a.original(), b.original());
    }
}
