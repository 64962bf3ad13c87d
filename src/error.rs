// error.rs - Error type for flag parsing and pattern compilation.
//
// The rewrite itself never fails; errors come from reading a flag string
// or from the matching engine rejecting a pattern.

use std::fmt;

/// Error type for building and compiling patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    /// A flag letter that is not one of `dgimsuvy`.
    InvalidFlag(char),
    /// A flag letter that appears more than once.
    DuplicateFlag(char),
    /// `u` and `v` were both given.
    IncompatibleFlags,
    /// The matching engine rejected the pattern.
    Compile { pattern: String, message: String },
}

impl fmt::Display for RegexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexError::InvalidFlag(c) => write!(f, "invalid flag '{}'", c),
            RegexError::DuplicateFlag(c) => write!(f, "duplicate flag '{}'", c),
            RegexError::IncompatibleFlags => {
                write!(f, "flags 'u' and 'v' cannot be combined")
            }
            RegexError::Compile { pattern, message } => {
                write!(f, "failed to compile /{}/: {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for RegexError {}

impl RegexError {
    /// Returns `true` if the error came from the matching engine.
    pub fn is_compile(&self) -> bool {
        matches!(self, RegexError::Compile { .. })
    }
}
