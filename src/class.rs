// class.rs - Extent of a bracketed character class.
//
// The class body is never interpreted; the engine resolves what it matches.
// Only bracket balance and escaping decide where the class ends.

use crate::flags::Flags;
use crate::scanner::Scanner;

/// Byte length of the class whose `[` is at the cursor, through its `]`.
///
/// With class algebra (`v`), unescaped `[` opens a nested class and the
/// outer class ends when the depth returns to zero. Otherwise `[` is an
/// ordinary member and the first unescaped `]` closes the class. An
/// unterminated class runs to the end of the text.
pub fn class_len(sc: &Scanner<'_>, flags: Flags) -> usize {
    let bytes = sc.rest().as_bytes();
    let nested = flags.has_class_algebra();
    let mut depth = 1usize;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'[' if nested => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(source: &str, flags: Flags) -> &str {
        let sc = Scanner::new(source);
        &source[..class_len(&sc, flags)]
    }

    #[test]
    fn flat_classes() {
        assert_eq!(class("[abc]suffix", Flags::empty()), "[abc]");
        assert_eq!(class("[a-c]suffix", Flags::empty()), "[a-c]");
        assert_eq!(class("[^b-d]suffix", Flags::empty()), "[^b-d]");
        assert_eq!(class("[.]x", Flags::empty()), "[.]");
    }

    #[test]
    fn escaped_brackets_and_backslashes() {
        assert_eq!(class(r"[ab\]]suffix", Flags::empty()), r"[ab\]]");
        assert_eq!(class(r"[ab\\]suffix", Flags::empty()), r"[ab\\]");
        assert_eq!(class(r"[\u{2622}]x", Flags::UNICODE), r"[\u{2622}]");
    }

    #[test]
    fn open_bracket_is_a_member_without_class_algebra() {
        assert_eq!(class("[[]x]", Flags::empty()), "[[]");
        assert_eq!(class("[[]x]", Flags::UNICODE), "[[]");
    }

    #[test]
    fn empty_classes() {
        assert_eq!(class("[]]", Flags::empty()), "[]");
        assert_eq!(class("[^]+", Flags::UNICODE_SETS), "[^]");
        assert_eq!(class("[[]]suffix", Flags::UNICODE_SETS), "[[]]");
    }

    #[test]
    fn nested_class_algebra() {
        let v = Flags::UNICODE_SETS;
        assert_eq!(
            class(r"[\p{Script_Extensions=Greek}--[αβγ]]+suffix", v),
            r"[\p{Script_Extensions=Greek}--[αβγ]]"
        );
        assert_eq!(
            class("[[a-z]--[[aeiou]--[eo]]]+suffix", v),
            "[[a-z]--[[aeiou]--[eo]]]"
        );
        assert_eq!(
            class(r"[[\[\]a-z]--[[\[]--[\[]]]suffix", v),
            r"[[\[\]a-z]--[[\[]--[\[]]]"
        );
    }

    #[test]
    fn unterminated_class_runs_to_end() {
        assert_eq!(class("[abc", Flags::empty()), "[abc");
        assert_eq!(class("[[a]", Flags::UNICODE_SETS), "[[a]");
    }
}
