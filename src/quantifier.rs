// quantifier.rs - Bounded-occurrence quantifier recognizer.

use crate::scanner::Scanner;

/// Byte length of a `{m}`, `{m,}` or `{m,n}` quantifier at the cursor.
///
/// Returns `None` when the `{` at the cursor does not start one, in which
/// case it is a literal brace.
pub fn occurrence_len(sc: &Scanner<'_>) -> Option<usize> {
    let bytes = sc.rest().as_bytes();
    if bytes.first() != Some(&b'{') {
        return None;
    }
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut i = 1;
    let min = digits(i);
    if min == 0 {
        return None;
    }
    i += min;
    if bytes.get(i) == Some(&b',') {
        i += 1;
        i += digits(i);
    }
    (bytes.get(i) == Some(&b'}')).then_some(i + 1)
}
