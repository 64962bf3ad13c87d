// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use regex_partial_match::prelude::*;
//!
//! let re = Regex::partial("cat|dog", "").unwrap();
//! assert_eq!(re.find("do").unwrap().as_str(), "do");
//! ```

pub use crate::api::{Captures, CapturesIter, FindIter, Match, Regex, RegexBuilder};
pub use crate::error::RegexError;
pub use crate::flags::Flags;
pub use crate::pattern::{Pattern, ToPartialMatch};
