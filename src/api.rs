// api.rs - Compiled patterns and match results.
//
// Wraps an `Engine` program with Rust-native types: Regex, RegexBuilder,
// Match, Captures, FindIter. Offsets are byte offsets into the searched text.

use std::ops::Range;

use crate::engine::{Engine, Regress, Spans};
use crate::error::RegexError;
use crate::flags::Flags;
use crate::pattern::{Pattern, ToPartialMatch};

/// A compiled pattern.
///
/// # Examples
///
/// ```
/// use regex_partial_match::Regex;
///
/// let re = Regex::partial("hello world", "").unwrap();
/// assert_eq!(re.find("hell").unwrap().as_str(), "hell");
/// assert_eq!(re.find("hello world more").unwrap().as_str(), "hello world");
/// ```
pub struct Regex<E: Engine = Regress> {
    pattern: Pattern,
    program: E::Program,
}

impl Regex {
    /// Compile `source` under a flag string such as `"gi"`.
    pub fn new(source: &str, flags: &str) -> Result<Regex, RegexError> {
        Regex::from_pattern(Pattern::new(source, flags)?)
    }

    /// Compile the partial-match variant of `source`.
    pub fn partial(source: &str, flags: &str) -> Result<Regex, RegexError> {
        Regex::from_pattern(Pattern::new(source, flags)?.to_partial_match())
    }

    /// Create a [`RegexBuilder`] for fine-grained control over compilation.
    pub fn builder(source: &str) -> RegexBuilder {
        RegexBuilder::new(source)
    }
}

impl<E: Engine> Regex<E> {
    /// Compile an existing pattern with engine `E`.
    pub fn from_pattern(pattern: Pattern) -> Result<Regex<E>, RegexError> {
        let program = E::compile(pattern.source(), pattern.flags())?;
        Ok(Regex { pattern, program })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn source(&self) -> &str {
        self.pattern.source()
    }

    pub fn flags(&self) -> Flags {
        self.pattern.flags()
    }

    /// Return the first match in `text`, or `None` if no match.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_at(text, 0)
    }

    /// Return the first match starting at or after byte offset `start`.
    ///
    /// With the sticky flag the match must start exactly at `start`.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Match<'t>> {
        self.captures_at(text, start).and_then(|caps| caps.get(0))
    }

    /// Check whether `text` matches the pattern anywhere.
    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Return the first match with all capture groups, or `None`.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.captures_at(text, 0)
    }

    /// Like [`Regex::captures`], searching from byte offset `start`.
    pub fn captures_at<'t>(&self, text: &'t str, start: usize) -> Option<Captures<'t>> {
        if start > text.len() || !text.is_char_boundary(start) {
            return None;
        }
        let spans = E::exec_at(&self.program, text, start)?;
        let whole = spans.whole()?;
        if self.flags().contains(Flags::STICKY) && whole.start != start {
            return None;
        }
        Some(Captures { text, spans })
    }

    /// Iterate over all non-overlapping matches in `text`.
    ///
    /// The global flag is not consulted; iteration always covers the whole
    /// text.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> FindIter<'r, 't, E> {
        FindIter {
            regex: self,
            text,
            next_start: 0,
        }
    }

    /// Access the engine's compiled program.
    pub fn as_raw(&self) -> &E::Program {
        &self.program
    }
}

impl<E: Engine> ToPartialMatch for Regex<E> {
    type Output = Result<Regex<E>, RegexError>;

    fn to_partial_match_regex(&self) -> Result<Regex<E>, RegexError> {
        Regex::from_pattern(self.pattern.to_partial_match())
    }
}

impl<E: Engine> std::fmt::Debug for Regex<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

// === RegexBuilder ===

/// Builder for compiling a [`Regex`] with custom flags.
///
/// # Examples
///
/// ```
/// use regex_partial_match::Regex;
///
/// let re = Regex::builder(r"^foo$")
///     .multi_line(true)
///     .partial(true)
///     .build()
///     .unwrap();
/// assert_eq!(re.find("fo").unwrap().as_str(), "fo");
/// assert_eq!(re.find("foo\nfoo").unwrap().as_str(), "foo");
/// ```
pub struct RegexBuilder {
    source: String,
    flags: Flags,
    partial: bool,
    error: Option<RegexError>,
}

impl RegexBuilder {
    /// Create a new builder for the given pattern source.
    pub fn new(source: &str) -> Self {
        RegexBuilder {
            source: source.to_string(),
            flags: Flags::empty(),
            partial: false,
            error: None,
        }
    }

    fn set(mut self, flag: Flags, yes: bool) -> Self {
        self.flags.set(flag, yes);
        self
    }

    /// Enable or disable case-insensitive matching (`i`).
    pub fn case_insensitive(self, yes: bool) -> Self {
        self.set(Flags::IGNORE_CASE, yes)
    }

    /// Enable or disable `^`/`$` matching at line boundaries (`m`).
    pub fn multi_line(self, yes: bool) -> Self {
        self.set(Flags::MULTILINE, yes)
    }

    /// Enable or disable `.` matching line terminators (`s`).
    pub fn dot_all(self, yes: bool) -> Self {
        self.set(Flags::DOT_ALL, yes)
    }

    /// Enable or disable Unicode mode (`u`).
    pub fn unicode(self, yes: bool) -> Self {
        self.set(Flags::UNICODE, yes)
    }

    /// Enable or disable Unicode sets mode (`v`).
    pub fn unicode_sets(self, yes: bool) -> Self {
        self.set(Flags::UNICODE_SETS, yes)
    }

    /// Enable or disable the global flag (`g`). It is reported by
    /// `flags()` but does not change matching.
    pub fn global(self, yes: bool) -> Self {
        self.set(Flags::GLOBAL, yes)
    }

    /// Enable or disable sticky matching (`y`).
    pub fn sticky(self, yes: bool) -> Self {
        self.set(Flags::STICKY, yes)
    }

    /// Enable or disable the has-indices flag (`d`).
    pub fn has_indices(self, yes: bool) -> Self {
        self.set(Flags::HAS_INDICES, yes)
    }

    /// Add the flags named by a flag string. Errors surface from `build`.
    pub fn flags(mut self, letters: &str) -> Self {
        match letters.parse::<Flags>() {
            Ok(flags) => self.flags |= flags,
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Compile the partial-match variant instead of the pattern itself.
    pub fn partial(mut self, yes: bool) -> Self {
        self.partial = yes;
        self
    }

    /// Compile with the default engine.
    pub fn build(self) -> Result<Regex, RegexError> {
        self.build_with::<Regress>()
    }

    /// Compile with engine `E`.
    pub fn build_with<E: Engine>(self) -> Result<Regex<E>, RegexError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        if self.flags.contains(Flags::UNICODE | Flags::UNICODE_SETS) {
            return Err(RegexError::IncompatibleFlags);
        }
        let pattern = Pattern::with_flags(self.source, self.flags);
        if self.partial {
            Regex::from_pattern(pattern.to_partial_match())
        } else {
            Regex::from_pattern(pattern)
        }
    }
}

// === Match ===

/// A single match result referencing the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the match (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// Length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === Captures ===

/// All capture groups from a single match.
///
/// Group 0 is the entire match. Groups 1..N correspond to capturing groups
/// in the pattern, named or not.
#[derive(Debug, Clone)]
pub struct Captures<'t> {
    text: &'t str,
    spans: Spans,
}

#[allow(clippy::len_without_is_empty)]
impl<'t> Captures<'t> {
    /// Get capture group `i`, or `None` if the group did not participate.
    pub fn get(&self, i: usize) -> Option<Match<'t>> {
        let span = self.spans.groups.get(i)?.clone()?;
        Some(self.to_match(span))
    }

    /// Get the named capture group, or `None`.
    pub fn name(&self, name: &str) -> Option<Match<'t>> {
        self.spans.named(name).map(|span| self.to_match(span))
    }

    /// Number of capture groups (including group 0, so never zero).
    pub fn len(&self) -> usize {
        self.spans.groups.len()
    }

    /// Iterate over all capture groups.
    pub fn iter(&self) -> CapturesIter<'_, 't> {
        CapturesIter {
            captures: self,
            index: 0,
        }
    }

    fn to_match(&self, span: Range<usize>) -> Match<'t> {
        Match {
            text: self.text,
            start: span.start,
            end: span.end,
        }
    }
}

// === CapturesIter ===

/// Iterator over capture groups in a [`Captures`].
pub struct CapturesIter<'c, 't> {
    captures: &'c Captures<'t>,
    index: usize,
}

impl<'c, 't> Iterator for CapturesIter<'c, 't> {
    type Item = Option<Match<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.captures.len() {
            return None;
        }
        let m = self.captures.get(self.index);
        self.index += 1;
        Some(m)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.captures.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CapturesIter<'_, '_> {}

// === FindIter ===

/// Iterator over all non-overlapping matches in a text.
pub struct FindIter<'r, 't, E: Engine = Regress> {
    regex: &'r Regex<E>,
    text: &'t str,
    next_start: usize,
}

impl<'r, 't, E: Engine> Iterator for FindIter<'r, 't, E> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        if self.next_start > self.text.len() {
            return None;
        }
        let m = self.regex.find_at(self.text, self.next_start)?;
        self.next_start = if m.is_empty() {
            // Step over one character so an empty match is not found again.
            m.end() + self.text[m.end()..].chars().next().map_or(1, char::len_utf8)
        } else {
            m.end()
        };
        Some(m)
    }
}
