// flags.rs - Pattern mode flags.
//
// The ECMAScript flag letters as a bitflags set. The transform reads only
// UNICODE / UNICODE_SETS; every flag is carried through to the rewritten
// pattern unchanged.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::RegexError;

bitflags! {
    /// Mode flags of a pattern, one bit per ECMAScript flag letter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        /// `d`: capture indices are reported.
        const HAS_INDICES = 1 << 0;
        /// `g`: carried for round-tripping; the API is stateless and ignores it.
        const GLOBAL = 1 << 1;
        /// `i`: case-insensitive matching.
        const IGNORE_CASE = 1 << 2;
        /// `m`: `^` and `$` match at line boundaries.
        const MULTILINE = 1 << 3;
        /// `s`: `.` matches line terminators.
        const DOT_ALL = 1 << 4;
        /// `u`: Unicode mode (braced code points, property escapes).
        const UNICODE = 1 << 5;
        /// `v`: Unicode sets mode (adds class algebra to `u`).
        const UNICODE_SETS = 1 << 6;
        /// `y`: matches must start at the search position.
        const STICKY = 1 << 7;
    }
}

// Canonical ECMAScript order, as produced by `RegExp.prototype.flags`.
const LETTERS: [(char, Flags); 8] = [
    ('d', Flags::HAS_INDICES),
    ('g', Flags::GLOBAL),
    ('i', Flags::IGNORE_CASE),
    ('m', Flags::MULTILINE),
    ('s', Flags::DOT_ALL),
    ('u', Flags::UNICODE),
    ('v', Flags::UNICODE_SETS),
    ('y', Flags::STICKY),
];

const COMPILE_FLAGS: Flags = Flags::IGNORE_CASE
    .union(Flags::MULTILINE)
    .union(Flags::DOT_ALL)
    .union(Flags::UNICODE)
    .union(Flags::UNICODE_SETS);

impl Flags {
    /// Returns the flag for a single letter, or `None` if the letter is unknown.
    pub fn from_letter(letter: char) -> Option<Flags> {
        LETTERS
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|(_, flag)| *flag)
    }

    /// Extended-Unicode escape syntax (`\u{...}`, `\p{...}`) is active.
    pub fn is_unicode_aware(self) -> bool {
        self.intersects(Flags::UNICODE | Flags::UNICODE_SETS)
    }

    /// Character classes may nest (`[[a-z]--[aeiou]]`).
    pub fn has_class_algebra(self) -> bool {
        self.contains(Flags::UNICODE_SETS)
    }

    /// The letters that change how a pattern compiles, in canonical order.
    pub fn engine_flags(self) -> String {
        (self & COMPILE_FLAGS).to_string()
    }
}

impl FromStr for Flags {
    type Err = RegexError;

    fn from_str(s: &str) -> Result<Flags, RegexError> {
        let mut flags = Flags::empty();
        for letter in s.chars() {
            let flag = Flags::from_letter(letter).ok_or(RegexError::InvalidFlag(letter))?;
            if flags.contains(flag) {
                return Err(RegexError::DuplicateFlag(letter));
            }
            flags |= flag;
        }
        if flags.contains(Flags::UNICODE | Flags::UNICODE_SETS) {
            return Err(RegexError::IncompatibleFlags);
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, flag) in LETTERS {
            if self.contains(flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_canonical_order() {
        let flags: Flags = "ymsigdu".parse().unwrap();
        assert_eq!(flags.to_string(), "dgimsuy");
    }

    #[test]
    fn empty_string_is_no_flags() {
        let flags: Flags = "".parse().unwrap();
        assert!(flags.is_empty());
        assert_eq!(flags.to_string(), "");
    }

    #[test]
    fn unknown_letter_rejected() {
        let err = "gx".parse::<Flags>().unwrap_err();
        assert_eq!(err, RegexError::InvalidFlag('x'));
    }

    #[test]
    fn duplicate_letter_rejected() {
        let err = "gig".parse::<Flags>().unwrap_err();
        assert_eq!(err, RegexError::DuplicateFlag('g'));
    }

    #[test]
    fn unicode_and_unicode_sets_are_exclusive() {
        let err = "uv".parse::<Flags>().unwrap_err();
        assert_eq!(err, RegexError::IncompatibleFlags);
    }

    #[test]
    fn unicode_awareness() {
        assert!(!Flags::empty().is_unicode_aware());
        assert!(Flags::UNICODE.is_unicode_aware());
        assert!(Flags::UNICODE_SETS.is_unicode_aware());
        assert!(!Flags::UNICODE.has_class_algebra());
        assert!(Flags::UNICODE_SETS.has_class_algebra());
    }

    #[test]
    fn engine_flags_drop_search_only_letters() {
        let flags: Flags = "dgimsvy".parse().unwrap();
        assert_eq!(flags.engine_flags(), "imsv");
    }
}
