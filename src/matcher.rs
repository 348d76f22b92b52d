// textpat Matcher
// Scans text for the leftmost occurrence of a compiled pattern

use crate::types::{Elem, Program};

/// Find the leftmost match of `program` in `text`
///
/// Tries an anchored match at every character boundary, left to right, and
/// returns `(start, length)` in bytes for the first position that matches.
/// The boundary at the very end of the text is a candidate only for the
/// empty program, which is how the empty pattern matches empty text.
///
/// # Examples
/// ```
/// use textpat::{compile, find};
///
/// let program = compile("a*b").unwrap();
/// assert_eq!(find("aaaab", &program), Some((0, 5)));
/// assert_eq!(find("xyz", &program), None);
/// ```
pub fn find(text: &str, program: &Program) -> Option<(usize, usize)> {
    for (start, _) in text.char_indices() {
        if let Some(len) = match_from(text, start, program.elems()) {
            return Some((start, len));
        }
    }
    if program.is_empty() {
        // Only reachable for empty text; a non-empty text already matched
        // the empty program at offset 0.
        return Some((text.len(), 0));
    }
    None
}

/// True if `program` matches anywhere in `text`
///
/// # Examples
/// ```
/// use textpat::{compile, matches};
///
/// let program = compile("ma?").unwrap();
/// assert!(matches("ala ma kota\n", &program));
/// ```
pub fn matches(text: &str, program: &Program) -> bool {
    find(text, program).is_some()
}

/// Match `program` anchored at byte position `pos` of `text`
///
/// Returns the length in bytes of the matched span, or `None` if the
/// program does not match exactly there. `pos` that is out of range or not
/// a character boundary is an ordinary non-match. Substitution tools use
/// this to replace a span in place; [`find`] is a scan over it.
pub fn match_at(text: &str, pos: usize, program: &Program) -> Option<usize> {
    if !text.is_char_boundary(pos) {
        return None;
    }
    match_from(text, pos, program.elems())
}

/// The recursive backtracking core
///
/// Walks `elems` left to right from `offset`. A closure first consumes the
/// maximal run of its governed element, then gives back one matched code
/// point at a time, retrying the rest of the program at each position down
/// to zero repetitions. Non-closure elements fail the whole attempt on the
/// first mismatch. Only the closure currently being processed backtracks;
/// combined closures rely on each one's local backtracking.
fn match_from(text: &str, offset: usize, elems: &[Elem]) -> Option<usize> {
    let mut pos = offset;
    let mut i = 0;

    while i < elems.len() {
        if elems[i] == Elem::Closure {
            // The governed element always consumes at least one code point
            // on success (the compiler rejects closures over anchors and
            // closures), so the greedy loop terminates.
            let inner = elems.get(i + 1)?;
            let rest = &elems[i + 2..];

            let mut end = pos;
            while let Some(n) = match_one(text, end, inner) {
                end += n;
            }

            loop {
                if let Some(n) = match_from(text, end, rest) {
                    return Some(end - offset + n);
                }
                if end == pos {
                    return None;
                }
                let c = text[..end].chars().next_back()?;
                end -= c.len_utf8();
            }
        }

        match match_one(text, pos, &elems[i]) {
            Some(n) => {
                pos += n;
                i += 1;
            }
            None => return None,
        }
    }

    Some(pos - offset)
}

/// Match a single element at byte position `pos`
///
/// Returns the number of bytes consumed (zero for anchors). Running past
/// the end of the text is a non-match for every element kind.
fn match_one(text: &str, pos: usize, elem: &Elem) -> Option<usize> {
    match elem {
        Elem::LineStart => (pos == 0).then_some(0),
        Elem::LineEnd => text[pos..].starts_with('\n').then_some(0),
        Elem::AnyChar => {
            let c = text[pos..].chars().next()?;
            (c != '\n').then(|| c.len_utf8())
        }
        Elem::Literal(lit) => {
            let c = text[pos..].chars().next()?;
            (c == *lit).then(|| c.len_utf8())
        }
        Elem::Class { members, negated } => {
            let c = text[pos..].chars().next()?;
            let found = members.contains(&c);
            let ok = if *negated { !found && c != '\n' } else { found };
            ok.then(|| c.len_utf8())
        }
        // A closure marker is interpreted by match_from, never matched as
        // a unit.
        Elem::Closure => None,
    }
}
