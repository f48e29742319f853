//! Parser for Gallina goals.
//!
//! This crate parses the statements of proof goals as printed by Coq,
//! such as `forall (n m : nat), n + m = m + n`,
//! as well as files of goals of the shape `Goal name (x : A) : t.`.
//! Notations are not interpreted:
//! infix operators such as `+` or `->` are parsed as
//! ordinary symbols inside left-associative applications.
//!
//! Example usage:
//!
//! ~~~
//! use gallina_parse::{Error, GoalIter, Parse, Term};
//!
//! let tm = Term::parse_str("forall (n : nat), n + 0 = n")?;
//! assert!(matches!(tm, Term::Comb(_)));
//!
//! let goals = "Goal add_0_r (n : nat) : n + 0 = n. Goal t : True.";
//! let goals: Result<Vec<_>, _> = GoalIter::new(goals).collect();
//! assert_eq!(goals?.len(), 2);
//! # Ok::<_, Error>(())
//! ~~~
#![no_std]

extern crate alloc;

pub mod cmd;
pub mod lex;
mod parse;
pub mod term;

pub use cmd::{Goal, GoalIter};
pub use lex::{Span, Spanned, Token};
pub use parse::{Error, ErrorKind, Parse};
pub use term::Term;

use logos::Logos;

/// Tokens of a string, without whitespace and comments.
pub type Lex<'s> = core::iter::Filter<logos::SpannedIter<'s, Token<'s>>, fn(&Spanned<'s>) -> bool>;

pub fn lex<'s>(s: &'s str) -> Lex<'s> {
    let relevant: fn(&Spanned<'s>) -> bool = |token| !matches!(token.0, Token::Space | Token::Comment);
    Token::lexer(s).spanned().filter(relevant)
}
