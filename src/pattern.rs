// pattern.rs - Pattern source paired with its flags.

use std::fmt;

use crate::error::RegexError;
use crate::flags::Flags;
use crate::transform::to_partial_source;

/// An uncompiled pattern: source text plus mode flags.
///
/// # Examples
///
/// ```
/// use regex_partial_match::Pattern;
///
/// let pattern = Pattern::new("foo(?!bar)", "gm").unwrap();
/// let partial = pattern.to_partial_match();
/// assert_eq!(partial.source(), "(?:f|$)(?:o|$)(?:o|$)(?!bar)");
/// assert_eq!(partial.flags(), pattern.flags());
/// assert_eq!(partial.to_string(), "/(?:f|$)(?:o|$)(?:o|$)(?!bar)/gm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: String,
    flags: Flags,
}

impl Pattern {
    /// Create a pattern from source text and a flag string such as `"gi"`.
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Pattern, RegexError> {
        Ok(Pattern::with_flags(source, flags.parse()?))
    }

    pub fn with_flags(source: impl Into<String>, flags: Flags) -> Pattern {
        Pattern {
            source: source.into(),
            flags,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The partial-match variant: rewritten source, identical flags.
    pub fn to_partial_match(&self) -> Pattern {
        Pattern {
            source: to_partial_source(&self.source, self.flags),
            flags: self.flags,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Produce the partial-match variant of a pattern object.
pub trait ToPartialMatch {
    type Output;

    fn to_partial_match_regex(&self) -> Self::Output;
}

impl ToPartialMatch for Pattern {
    type Output = Pattern;

    fn to_partial_match_regex(&self) -> Pattern {
        self.to_partial_match()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_preserved() {
        for flags in ["dgimsuy", "dgimsvy", ""] {
            let pattern = Pattern::new("hello world", flags).unwrap();
            let partial = pattern.to_partial_match_regex();
            assert_eq!(partial.flags(), pattern.flags());
            assert_eq!(partial.flags().to_string(), flags);
        }
    }

    #[test]
    fn invalid_flags_rejected() {
        let err = Pattern::new("a", "q").unwrap_err();
        assert_eq!(err, RegexError::InvalidFlag('q'));
    }

    #[test]
    fn original_is_untouched() {
        let pattern = Pattern::new("ab", "").unwrap();
        let _ = pattern.to_partial_match();
        assert_eq!(pattern.source(), "ab");
    }

    #[test]
    fn display_as_literal() {
        let pattern = Pattern::with_flags("a+", Flags::GLOBAL | Flags::IGNORE_CASE);
        assert_eq!(pattern.to_string(), "/a+/gi");
    }
}
