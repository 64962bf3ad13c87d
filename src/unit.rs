// unit.rs - Classification of the syntactic unit at the cursor.
//
// `classify` is a pure function of the cursor position: it names the unit
// and measures it without consuming anything. The rewrite policy for each
// kind lives on the kinds themselves (`Unit::wrap`, `GroupKind::body`).

use crate::class::class_len;
use crate::escape::{self, EscapeKind};
use crate::flags::Flags;
use crate::quantifier::occurrence_len;
use crate::scanner::Scanner;

/// Kind of group opened by `(`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `(`
    Capturing,
    /// `(?:`
    NonCapturing,
    /// `(?<name>`
    NamedCapturing,
    /// `(?i:`, `(?-m:`, `(?i-s:`
    Modifiers,
    /// `(?=`
    PositiveLookahead,
    /// `(?!`
    NegativeLookahead,
    /// `(?<=`
    PositiveLookbehind,
    /// `(?<!`
    NegativeLookbehind,
}

/// A syntactic unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A single character matched as itself (also `.` and anything unrecognized).
    Literal,
    Escape(EscapeKind),
    /// `[...]`, possibly nested under class algebra.
    Class,
    /// `|`
    Disjunction,
    /// `^` or `$`
    Anchor,
    /// `*`, `+` or `?`
    Quantifier,
    /// `{m}`, `{m,}`, `{m,n}`
    Occurrence,
    /// A `{` that does not start an occurrence quantifier.
    BraceLiteral,
    /// Group header; the token length covers the header only.
    GroupOpen(GroupKind),
    /// `)`
    GroupClose,
}

/// How a unit's source text is appended to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    /// Copied unchanged.
    Verbatim,
    /// Emitted as `(?:unit|$)`: the unit, or the input ended here.
    Optional,
}

/// How the rewritten interior of a group is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// `header interior|$)`
    Optional,
    /// `header interior)`: the assertion stays mandatory.
    Assertion,
    /// The original source of the group, unchanged.
    Opaque,
}

/// A classified unit and its byte length in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub unit: Unit,
    pub len: usize,
}

impl Token {
    fn new(unit: Unit, len: usize) -> Self {
        Token { unit, len }
    }
}

impl Unit {
    pub fn wrap(self) -> Wrap {
        match self {
            Unit::Literal | Unit::Escape(_) | Unit::Class | Unit::BraceLiteral => Wrap::Optional,
            Unit::Disjunction
            | Unit::Anchor
            | Unit::Quantifier
            | Unit::Occurrence
            | Unit::GroupOpen(_)
            | Unit::GroupClose => Wrap::Verbatim,
        }
    }
}

impl GroupKind {
    pub fn body(self) -> Body {
        match self {
            GroupKind::Capturing
            | GroupKind::NonCapturing
            | GroupKind::NamedCapturing
            | GroupKind::Modifiers => Body::Optional,
            GroupKind::PositiveLookahead => Body::Assertion,
            // Matched in full or not at all.
            GroupKind::NegativeLookahead
            | GroupKind::PositiveLookbehind
            | GroupKind::NegativeLookbehind => Body::Opaque,
        }
    }
}

/// Classify the unit at the cursor. The cursor must not be at end of text.
pub fn classify(sc: &Scanner<'_>, flags: Flags) -> Token {
    match sc.peek(0) {
        Some(b'\\') => {
            let e = escape::resolve(sc, flags);
            Token::new(Unit::Escape(e.kind), e.len)
        }
        Some(b'[') => Token::new(Unit::Class, class_len(sc, flags)),
        Some(b'|') => Token::new(Unit::Disjunction, 1),
        Some(b'^' | b'$') => Token::new(Unit::Anchor, 1),
        Some(b'*' | b'+' | b'?') => Token::new(Unit::Quantifier, 1),
        Some(b'{') => match occurrence_len(sc) {
            Some(len) => Token::new(Unit::Occurrence, len),
            None => Token::new(Unit::BraceLiteral, 1),
        },
        Some(b'(') => group_open(sc),
        Some(b')') => Token::new(Unit::GroupClose, 1),
        _ => Token::new(Unit::Literal, sc.len_chars(1)),
    }
}

fn group_open(sc: &Scanner<'_>) -> Token {
    let group = |kind, len| Token::new(Unit::GroupOpen(kind), len);
    if sc.peek(1) != Some(b'?') {
        return group(GroupKind::Capturing, 1);
    }
    match sc.peek(2) {
        Some(b':') => group(GroupKind::NonCapturing, 3),
        Some(b'=') => group(GroupKind::PositiveLookahead, 3),
        Some(b'!') => group(GroupKind::NegativeLookahead, 3),
        Some(b'<') => match sc.peek(3) {
            Some(b'=') => group(GroupKind::PositiveLookbehind, 4),
            Some(b'!') => group(GroupKind::NegativeLookbehind, 4),
            _ => group(GroupKind::NamedCapturing, sc.len_through(b'>')),
        },
        _ => match modifiers_len(sc) {
            Some(len) => group(GroupKind::Modifiers, len),
            // Unknown `(?X`: an ordinary character.
            None => Token::new(Unit::Literal, 1),
        },
    }
}

// `(?` letters-and-dashes `:`
fn modifiers_len(sc: &Scanner<'_>) -> Option<usize> {
    let bytes = sc.rest().as_bytes();
    let run = bytes[2..]
        .iter()
        .take_while(|b| b.is_ascii_alphabetic() || **b == b'-')
        .count();
    let colon = 2 + run;
    (run > 0 && bytes.get(colon) == Some(&b':')).then_some(colon + 1)
}
