//! # textpat: a backtracking text-pattern engine
//!
//! A small pattern-matching engine in two parts: a compiler that turns a
//! textual pattern into a flat sequence of tagged elements (the "program"),
//! and a matcher that scans text for the leftmost occurrence of that
//! pattern, backtracking through greedy closures.
//!
//! ## Pattern Syntax
//!
//! - `%` — start-of-text anchor, only as the first pattern character;
//!   literal `%` elsewhere
//! - `$` — matches a newline at the current position, only as the last
//!   pattern character; literal `$` elsewhere
//! - `?` — any single code point except newline
//! - `[abc]` / `[^abc]` — character class, with `c1-c2` ASCII
//!   alphanumeric range expansion and `@`-escapes; at most 255 members
//! - `*` — zero or more repetitions of the preceding element, greedy with
//!   backtracking; a leading `*` is literal
//! - `@@` → `@`, `@t` → tab, `@n` → newline, `@c` → literal `c`
//!
//! ## Example Usage
//!
//! ```
//! use textpat::{compile, find, matches};
//!
//! let program = compile(" [0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9] ")?;
//!
//! assert!(matches("abc 2015-01-15 \n", &program));
//! assert!(!matches("abc 215-01-15 \n", &program));
//!
//! let dates = compile("[0-9]*-[0-9]*")?;
//! assert_eq!(find("on 2015-01, again", &dates), Some((3, 7)));
//! # Ok::<(), textpat::CompileError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Pattern Compiler** — parses the source pattern into a [`Program`],
//!   an immutable sequence of [`Elem`] variants
//! - **Matcher** — anchored backtracking match at one position
//!   ([`match_at`]) and the leftmost scan over it ([`find`], [`matches`])
//!
//! A compiled [`Program`] is read-only and safe to share between threads;
//! matching touches no shared mutable state. Matching never fails: running
//! off the end of the text is an ordinary non-match, so only compilation
//! returns errors ([`CompileError`]).

pub mod matcher;
pub mod pattern;
pub mod types;

// Re-export the public surface for convenience
pub use matcher::{find, match_at, matches};
pub use pattern::compile;
pub use types::{CompileError, Elem, Program, MAX_CLASS_MEMBERS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_program_methods_delegate() {
        let program = compile("a?c").unwrap();
        assert_eq!(program.find("xxabc"), Some((2, 3)));
        assert!(program.matches("abc"));
        assert!(!program.matches("ab"));
    }
}
