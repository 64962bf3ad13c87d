// transform.rs - The partial-match rewrite.
//
// One left-to-right pass over the source. Each unit is appended either
// verbatim or wrapped as `(?:unit|$)`. Open groups are kept on an explicit
// stack of frames rather than native recursion, so nesting depth is bounded
// only by memory; when a group closes, its body is wrapped, asserted or
// replaced by the untouched source it covered.

use crate::flags::Flags;
use crate::scanner::Scanner;
use crate::unit::{classify, Body, GroupKind, Unit, Wrap};

const OPTIONAL_OPEN: &str = "(?:";
const OPTIONAL_CLOSE: &str = "|$)";

/// Rewrite `source` so that it also matches every prefix of what it matches.
///
/// The flags decide how escapes and classes are delimited; they are not
/// part of the output and apply unchanged to the rewritten source.
///
/// # Examples
///
/// ```
/// use regex_partial_match::{to_partial_source, Flags};
///
/// assert_eq!(to_partial_source("ab*", Flags::empty()), "(?:a|$)(?:b|$)*");
/// assert_eq!(
///     to_partial_source("(ab)c", Flags::empty()),
///     "((?:a|$)(?:b|$)|$)(?:c|$)"
/// );
/// ```
pub fn to_partial_source(source: &str, flags: Flags) -> String {
    log_debug!("rewriting /{}/{}", source, flags);
    let mut transformer = Transformer {
        sc: Scanner::new(source),
        flags,
        frames: Vec::new(),
        opaque: 0,
        out: String::with_capacity(source.len() * 4),
    };
    transformer.run();
    log_debug!("rewrote /{}/ to /{}/", source, transformer.out);
    transformer.out
}

/// A group whose closing `)` has not been reached yet.
struct Frame {
    kind: GroupKind,
    /// Source offset of the group's `(`.
    start: usize,
    /// Output length before the group's header was written.
    out_start: usize,
}

struct Transformer<'p> {
    sc: Scanner<'p>,
    flags: Flags,
    frames: Vec<Frame>,
    /// Open frames whose body is copied from source on close.
    opaque: usize,
    out: String,
}

impl<'p> Transformer<'p> {
    fn run(&mut self) {
        while !self.sc.is_at_end() {
            let token = classify(&self.sc, self.flags);
            log_trace!("{:?} at {} (depth {})", token.unit, self.sc.pos(), self.frames.len());
            match token.unit {
                Unit::GroupClose if !self.frames.is_empty() => {
                    self.sc.take(token.len);
                    self.close();
                }
                Unit::GroupOpen(kind) => self.open(kind, token.len),
                unit => self.append(unit.wrap(), token.len),
            }
        }
        // Groups left open by a truncated pattern close at end of text.
        while !self.frames.is_empty() {
            self.close();
        }
    }

    fn append(&mut self, wrap: Wrap, len: usize) {
        let text = self.sc.take(len);
        match wrap {
            Wrap::Verbatim => self.out.push_str(text),
            Wrap::Optional => {
                self.out.push_str(OPTIONAL_OPEN);
                self.out.push_str(text);
                self.out.push_str(OPTIONAL_CLOSE);
            }
        }
    }

    fn open(&mut self, kind: GroupKind, header_len: usize) {
        if kind.body() == Body::Opaque {
            self.opaque += 1;
        }
        self.frames.push(Frame {
            kind,
            start: self.sc.pos(),
            out_start: self.out.len(),
        });
        self.out.push_str(self.sc.take(header_len));
    }

    /// Finish the innermost open group. The cursor is past its `)`, or at
    /// end of text.
    fn close(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        match frame.kind.body() {
            Body::Optional => self.out.push_str(OPTIONAL_CLOSE),
            Body::Assertion => self.out.push(')'),
            // The rewritten body is dropped for the source it came from. An
            // enclosing opaque group copies that source itself.
            Body::Opaque => {
                self.opaque -= 1;
                self.out.truncate(frame.out_start);
                if self.opaque == 0 {
                    self.out.push_str(self.sc.slice_from(frame.start));
                }
            }
        }
    }
}
