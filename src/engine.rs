// engine.rs - The matching engine seam.
//
// The rewrite produces pattern text; compiling and executing it is the job
// of an `Engine`. `Regress` is the ECMAScript-dialect engine used by default.

use std::ops::Range;

use smallvec::SmallVec;

use crate::error::RegexError;
use crate::flags::Flags;

/// Capture spans of one match. Index 0 is the whole match.
pub type GroupSpans = SmallVec<[Option<Range<usize>>; 8]>;

/// Named capture spans of one match, in pattern order.
pub type NamedSpans = SmallVec<[(Box<str>, Option<Range<usize>>); 4]>;

/// Byte spans reported by an engine for a single match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Spans {
    pub groups: GroupSpans,
    pub names: NamedSpans,
}

impl Spans {
    /// Span of the whole match.
    pub fn whole(&self) -> Option<Range<usize>> {
        self.groups.first().cloned().flatten()
    }

    /// Span of the named group, if it participated.
    pub fn named(&self, name: &str) -> Option<Range<usize>> {
        self.names
            .iter()
            .find(|(n, _)| &**n == name)
            .and_then(|(_, span)| span.clone())
    }
}

/// A regular-expression engine that understands the ECMAScript dialect.
pub trait Engine {
    /// A compiled pattern.
    type Program;

    /// Compile `source` under `flags`.
    fn compile(source: &str, flags: Flags) -> Result<Self::Program, RegexError>;

    /// Find the leftmost match starting at or after byte offset `start`.
    fn exec_at(program: &Self::Program, text: &str, start: usize) -> Option<Spans>;
}

/// Engine backed by the [`regress`](https://crates.io/crates/regress) crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Regress;

impl Engine for Regress {
    type Program = regress::Regex;

    fn compile(source: &str, flags: Flags) -> Result<regress::Regex, RegexError> {
        let letters = flags.engine_flags();
        regress::Regex::with_flags(source, letters.as_str()).map_err(|e| RegexError::Compile {
            pattern: source.to_string(),
            message: e.to_string(),
        })
    }

    fn exec_at(program: &regress::Regex, text: &str, start: usize) -> Option<Spans> {
        let m = program.find_from(text, start).next()?;
        let groups = (0..=m.captures.len()).map(|i| m.group(i)).collect();
        let names = m
            .named_groups()
            .map(|(name, span)| (Box::from(name), span))
            .collect();
        Some(Spans { groups, names })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regress_reports_groups() {
        let program = Regress::compile(r"(?<year>\d{4})-(\d{2})", Flags::empty()).unwrap();
        let spans = Regress::exec_at(&program, "on 2026-02", 0).unwrap();
        assert_eq!(spans.whole(), Some(3..10));
        assert_eq!(spans.groups.len(), 3);
        assert_eq!(spans.groups[1], Some(3..7));
        assert_eq!(spans.groups[2], Some(8..10));
        assert_eq!(spans.named("year"), Some(3..7));
        assert_eq!(spans.named("month"), None);
    }

    #[test]
    fn regress_searches_from_offset() {
        let program = Regress::compile("a", Flags::empty()).unwrap();
        let spans = Regress::exec_at(&program, "a_a", 1).unwrap();
        assert_eq!(spans.whole(), Some(2..3));
        assert!(Regress::exec_at(&program, "a_a", 3).is_none());
    }

    #[test]
    fn regress_compile_error() {
        let err = Regress::compile("(unclosed", Flags::empty()).unwrap_err();
        assert!(err.is_compile());
    }

    #[test]
    fn regress_honors_flags() {
        let program = Regress::compile("^b", Flags::MULTILINE | Flags::IGNORE_CASE).unwrap();
        let spans = Regress::exec_at(&program, "a\nB", 0).unwrap();
        assert_eq!(spans.whole(), Some(2..3));
    }

    #[test]
    fn unparticipating_group_is_none() {
        let program = Regress::compile("(a)|(b)", Flags::empty()).unwrap();
        let spans = Regress::exec_at(&program, "b", 0).unwrap();
        assert_eq!(spans.groups[1], None);
        assert_eq!(spans.groups[2], Some(0..1));
    }
}
