//! # regex-partial-match
//!
//! Rewrites an ECMAScript regular expression so that it matches any prefix
//! of a string the original could match, as well as everything the original
//! matches. Useful for validating input that is still being typed.
//!
//! The rewrite is a single left-to-right pass over the pattern source. Every
//! literal, escape and character class becomes `(?:unit|$)`, "this unit, or
//! the input ended here". Quantifiers, anchors and alternation are copied
//! unchanged; groups are rewritten recursively.
//!
//! ## Quick Start
//!
//! ```rust
//! use regex_partial_match::prelude::*;
//!
//! let re = Regex::partial(r"^\d{4}-\d{2}-\d{2}$", "").unwrap();
//! assert!(re.is_match("2026-0"));
//! assert!(re.is_match("2026-02-14"));
//! assert!(!re.is_match("2026-x"));
//! ```
//!
//! The rewrite itself works on pattern text and needs no engine:
//!
//! ```rust
//! use regex_partial_match::{Pattern, ToPartialMatch};
//!
//! let pattern = Pattern::new("(?<word>ab)c", "d").unwrap();
//! let partial = pattern.to_partial_match_regex();
//! assert_eq!(partial.source(), "(?<word>(?:a|$)(?:b|$)|$)(?:c|$)");
//! assert_eq!(partial.flags(), pattern.flags());
//! ```
//!
//! ## Caveats
//!
//! - The rewritten pattern always matches the empty string at the end of
//!   the input; anchor it with `^` to rule that out.
//! - Backreferences, negative lookahead and lookbehind are not partially
//!   matched: they must hold in full or the match fails.
//! - Malformed patterns are not diagnosed; the rewrite of one is unspecified
//!   and typically fails to compile.
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transform`] | The rewrite: group processing and output assembly |
//! | [`unit`] | Classification of the unit at the cursor |
//! | [`escape`] | Escape sequence lengths |
//! | [`class`] | Character class extents |
//! | [`quantifier`] | `{m,n}` quantifier recognition |
//! | [`scanner`] | The shared forward-only cursor |
//! | [`flags`] | Mode flags |
//! | [`pattern`] | Source + flags, and the `ToPartialMatch` extension point |
//! | [`engine`] | The matching engine seam and the `regress` engine |
//! | [`api`] | Compiled `Regex`, `Match`, `Captures` |

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

pub mod api;
pub mod class;
pub mod engine;
pub mod error;
pub mod escape;
pub mod flags;
pub mod pattern;
pub mod prelude;
pub mod quantifier;
pub mod scanner;
pub mod transform;
pub mod unit;

pub use api::{Captures, Match, Regex, RegexBuilder};
pub use engine::{Engine, Regress, Spans};
pub use error::RegexError;
pub use flags::Flags;
pub use pattern::{Pattern, ToPartialMatch};
pub use transform::to_partial_source;
