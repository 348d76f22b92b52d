// textpat Type Definitions
// Compiled pattern representation and the compile-time error taxonomy

use std::fmt;

use thiserror::Error;

/// Maximum number of members in a character class (duplicates included)
pub const MAX_CLASS_MEMBERS: usize = 255;

/// One element of a compiled pattern
///
/// A compiled pattern is a flat sequence of these, not a tree. A `Closure`
/// marker governs the element that directly follows it in the sequence;
/// the compiler guarantees that element is always one that consumes text
/// (`Literal`, `AnyChar`, or `Class`), never an anchor or another closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Elem {
    /// Exactly one specific code point
    Literal(char),

    /// Any code point except newline (`?`)
    AnyChar,

    /// Zero-width assertion: start of text (`%` leading the pattern)
    LineStart,

    /// Zero-width assertion: current position holds `\n` (`$` ending the pattern)
    LineEnd,

    /// One code point matched by set membership (`[...]` / `[^...]`)
    ///
    /// Members are kept in appearance order with duplicates; a negated
    /// class additionally never matches newline.
    Class { members: Vec<char>, negated: bool },

    /// Zero or more repetitions of the next element (`*`), greedy with
    /// backtracking
    Closure,
}

/// A compiled, immutable pattern
///
/// Created once by [`compile`](crate::compile) and reusable for any number
/// of matches; it owns its class members and has no relationship to the
/// text it is matched against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    elems: Vec<Elem>,
}

impl Program {
    pub(crate) fn new(elems: Vec<Elem>) -> Self {
        Self { elems }
    }

    /// The compiled element sequence
    pub fn elems(&self) -> &[Elem] {
        &self.elems
    }

    /// Number of elements, closure markers included
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// True for the program compiled from an empty pattern
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Find the leftmost match of this program in `text`
    ///
    /// Convenience for [`find`](crate::find); returns `(start, length)` in
    /// bytes.
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        crate::matcher::find(text, self)
    }

    /// True if this program matches anywhere in `text`
    pub fn matches(&self, text: &str) -> bool {
        crate::matcher::matches(text, self)
    }
}

impl fmt::Display for Program {
    /// Renders the tag form of the compiled pattern, e.g. `%ab` as
    /// `<BOL><LITCHAR>a<LITCHAR>b`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in &self.elems {
            match elem {
                Elem::Literal(c) => write!(f, "<LITCHAR>{}", c)?,
                Elem::AnyChar => write!(f, "<ANY>")?,
                Elem::LineStart => write!(f, "<BOL>")?,
                Elem::LineEnd => write!(f, "<EOL>")?,
                Elem::Class { members, negated } => {
                    write!(f, "{}", if *negated { "<NCCL>" } else { "<CCL>" })?;
                    for c in members {
                        write!(f, "{}", c)?;
                    }
                }
                Elem::Closure => write!(f, "<CLOSURE>")?,
            }
        }
        Ok(())
    }
}

/// Pattern compilation errors
///
/// Offsets are character positions into the source pattern. Matching never
/// fails; malformed input to the matcher is an ordinary non-match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("character class opened at offset {pos} has no closing ']'")]
    UnterminatedClass { pos: usize },

    #[error("character class opened at offset {pos} has {count} members, limit is 255")]
    ClassTooLarge { pos: usize, count: usize },

    #[error("'*' at offset {pos} cannot follow an anchor or another '*'")]
    InvalidClosure { pos: usize },
}
