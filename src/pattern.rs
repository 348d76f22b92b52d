// textpat Pattern Compiler
// Compiles source pattern strings into flat element sequences

use crate::types::{CompileError, Elem, Program, MAX_CLASS_MEMBERS};

const BOL: char = '%';
const EOL: char = '$';
const ANY: char = '?';
const CCL_OPEN: char = '[';
const CCL_CLOSE: char = ']';
const NEGATE: char = '^';
const CLOSURE: char = '*';
const ESCAPE: char = '@';
const DASH: char = '-';

/// Compile a source pattern into a [`Program`]
///
/// # Pattern Syntax
/// - `%` at the start of the pattern anchors to the start of the text;
///   anywhere else it is a literal `%`
/// - `$` at the end of the pattern matches a newline at the current
///   position; anywhere else it is a literal `$`
/// - `?` matches any single code point except newline
/// - `[abc]` / `[^abc]` matches one code point by (negated) membership;
///   `c1-c2` inside the body expands to the inclusive ASCII-alphanumeric
///   range, `@`-escapes apply, and at most 255 members are allowed
/// - `*` repeats the preceding element zero or more times, greedily
/// - `@@` is `@`, `@t` is tab, `@n` is newline, `@c` is a literal `c` for
///   any other `c`
///
/// # Examples
/// ```
/// use textpat::compile;
///
/// let program = compile("ab*c").unwrap();
/// assert_eq!(program.to_string(), "<LITCHAR>a<CLOSURE><LITCHAR>b<LITCHAR>c");
///
/// let program = compile("%[0-2]$").unwrap();
/// assert_eq!(program.to_string(), "<BOL><CCL>012<EOL>");
/// ```
pub fn compile(source: &str) -> Result<Program, CompileError> {
    let chars: Vec<char> = source.chars().collect();
    let mut elems: Vec<Elem> = Vec::new();
    // Index of the most recently added element; after a closure insertion
    // it points at the Closure marker, which is what makes '**' detectable.
    let mut last = 0;
    let mut pos = 0;

    while pos < chars.len() {
        match chars[pos] {
            BOL if pos == 0 => {
                last = elems.len();
                elems.push(Elem::LineStart);
                pos += 1;
            }
            EOL if pos == chars.len() - 1 => {
                last = elems.len();
                elems.push(Elem::LineEnd);
                pos += 1;
            }
            ANY => {
                last = elems.len();
                elems.push(Elem::AnyChar);
                pos += 1;
            }
            CCL_OPEN => {
                last = elems.len();
                let (members, negated, next) = parse_class(&chars, pos)?;
                elems.push(Elem::Class { members, negated });
                pos = next;
            }
            CLOSURE if !elems.is_empty() => {
                match elems[last] {
                    Elem::LineStart | Elem::LineEnd | Elem::Closure => {
                        return Err(CompileError::InvalidClosure { pos });
                    }
                    _ => elems.insert(last, Elem::Closure),
                }
                pos += 1;
            }
            _ => {
                // Ordinary character or escape sequence; a leading '*'
                // lands here too and becomes a literal.
                last = elems.len();
                let (c, next) = esc(&chars, pos);
                elems.push(Elem::Literal(c));
                pos = next;
            }
        }
    }

    Ok(Program::new(elems))
}

/// Expand the escape sequence starting at `pos`
///
/// Returns the resulting character and the position after the consumed
/// sequence. A lone trailing `@` is a literal `@`.
fn esc(chars: &[char], pos: usize) -> (char, usize) {
    if chars[pos] != ESCAPE {
        return (chars[pos], pos + 1);
    }
    match chars.get(pos + 1) {
        None => (ESCAPE, pos + 1),
        Some('t') => ('\t', pos + 2),
        Some('n') => ('\n', pos + 2),
        Some(&c) => (c, pos + 2),
    }
}

/// Parse the character class starting at the `[` at `start`
///
/// Returns the expanded members, the negation flag, and the position after
/// the closing `]`.
fn parse_class(
    chars: &[char],
    start: usize,
) -> Result<(Vec<char>, bool, usize), CompileError> {
    let mut pos = start + 1;
    let mut negated = false;
    if chars.get(pos) == Some(&NEGATE) {
        negated = true;
        pos += 1;
    }

    let (members, next) = expand_class_body(chars, pos, start)?;
    if members.len() > MAX_CLASS_MEMBERS {
        return Err(CompileError::ClassTooLarge {
            pos: start,
            count: members.len(),
        });
    }

    Ok((members, negated, next))
}

/// Collect class members up to the closing `]`, expanding ranges and escapes
///
/// A `c1-c2` range expands only when both endpoints are ASCII letters or
/// digits and `c1 <= c2`; the left endpoint is the member appended just
/// before the dash, so only `c1+1..=c2` is added here. Any other dash is an
/// ordinary member, as is a dash first or last in the body. Duplicates are
/// kept.
fn expand_class_body(
    chars: &[char],
    mut pos: usize,
    class_start: usize,
) -> Result<(Vec<char>, usize), CompileError> {
    let mut members: Vec<char> = Vec::new();

    loop {
        match chars.get(pos) {
            None => return Err(CompileError::UnterminatedClass { pos: class_start }),
            Some(&CCL_CLOSE) => return Ok((members, pos + 1)),
            Some(&DASH) => {
                let lo = members.last().copied();
                let hi = chars.get(pos + 1).copied();
                match (lo, hi) {
                    (Some(lo), Some(hi))
                        if lo.is_ascii_alphanumeric()
                            && hi.is_ascii_alphanumeric()
                            && lo <= hi =>
                    {
                        members.extend((lo..=hi).skip(1));
                        pos += 2;
                    }
                    _ => {
                        members.push(DASH);
                        pos += 1;
                    }
                }
            }
            Some(_) => {
                let (c, next) = esc(chars, pos);
                members.push(c);
                pos = next;
            }
        }
    }
}
