// escape.rs - Length of an escape sequence.
//
// Only the extent of an escape matters to the rewrite: the sequence is
// copied as one unit, never interpreted.

use crate::flags::Flags;
use crate::scanner::Scanner;

/// Which escape form starts at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeKind {
    /// `\cX`
    Control,
    /// `\k<name>`
    NamedBackreference,
    /// `\u{...}` (Unicode mode only)
    CodePoint,
    /// `\uHHHH`
    Utf16,
    /// `\p{...}` / `\P{...}` (Unicode mode only)
    Property,
    /// `\xHH`
    Hex,
    /// Any other two-character escape: `\d`, `\n`, `\b`, `\0`, `\1`, `\.`, ...
    Single,
}

/// An escape sequence and its byte length, marker included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape {
    pub kind: EscapeKind,
    pub len: usize,
}

/// Resolve the escape whose `\` is at the cursor.
pub fn resolve(sc: &Scanner<'_>, flags: Flags) -> Escape {
    let (kind, len) = match sc.peek(1) {
        Some(b'c') => (EscapeKind::Control, sc.len_chars(3)),
        Some(b'k') if sc.peek(2) == Some(b'<') => {
            (EscapeKind::NamedBackreference, sc.len_through(b'>'))
        }
        Some(b'u') if flags.is_unicode_aware() && sc.peek(2) == Some(b'{') => {
            (EscapeKind::CodePoint, sc.len_through(b'}'))
        }
        Some(b'u') => (EscapeKind::Utf16, sc.len_chars(6)),
        Some(b'p' | b'P') if flags.is_unicode_aware() => {
            (EscapeKind::Property, sc.len_through(b'}'))
        }
        Some(b'x') => (EscapeKind::Hex, sc.len_chars(4)),
        _ => (EscapeKind::Single, sc.len_chars(2)),
    };
    Escape { kind, len }
}
