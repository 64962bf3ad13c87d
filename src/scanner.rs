// scanner.rs - Forward-only cursor over pattern source text.
//
// Offsets are byte offsets into the UTF-8 source. Every syntax marker the
// rewrite looks for is ASCII, so single-byte inspection is exact; lengths of
// fixed-size units are counted in characters so the cursor never stops
// inside a multi-byte character.

use memchr::memchr;

/// Cursor over an immutable pattern source.
///
/// A single `Scanner` is shared by every recursive activation of the
/// rewrite: a nested group advances the same cursor its parent resumes from.
#[derive(Debug, Clone)]
pub struct Scanner<'p> {
    source: &'p str,
    pos: usize,
}

impl<'p> Scanner<'p> {
    pub fn new(source: &'p str) -> Self {
        Scanner { source, pos: 0 }
    }

    /// The full source text.
    pub fn source(&self) -> &'p str {
        self.source
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Byte `n` positions past the cursor.
    pub fn peek(&self, n: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + n).copied()
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'p str {
        &self.source[self.pos..]
    }

    /// Consume `len` bytes and return them.
    pub fn take(&mut self, len: usize) -> &'p str {
        let end = (self.pos + len).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(end));
        let taken = &self.source[self.pos..end];
        self.pos = end;
        taken
    }

    /// The source consumed since `start`.
    pub fn slice_from(&self, start: usize) -> &'p str {
        &self.source[start..self.pos]
    }

    /// Byte length of the next `n` characters, clamped at end of text.
    pub fn len_chars(&self, n: usize) -> usize {
        let rest = self.rest();
        rest.char_indices()
            .nth(n)
            .map_or(rest.len(), |(offset, _)| offset)
    }

    /// Byte length up to and including the next `terminator`.
    ///
    /// An absent terminator means a malformed pattern; the length then runs
    /// to the end of the text.
    pub fn len_through(&self, terminator: u8) -> usize {
        let rest = self.rest();
        memchr(terminator, rest.as_bytes()).map_or(rest.len(), |offset| offset + 1)
    }
}
