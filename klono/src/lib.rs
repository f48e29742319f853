#![forbid(unsafe_code)]

//! Detection of cloned proof goals modulo alpha-equivalence.
//!
//! This is the library underlying the `klonfind` clone finder.
//!
//! # Usage
//!
//! Goals are written in Gallina, the term language of the Coq proof assistant.
//! A goal statement is parsed from a string to a parse tree by [`gallina_parse`],
//! which is then converted ("scoped") to a [`Term`].
//! Scoping desugars binder groups into nested binders and
//! rejects malformed terms, such as fixpoints whose structural argument
//! is not a parameter.
//!
//! Two terms are *clones* if they are [alpha-equivalent](Term::alpha_equiv),
//! meaning that they are equal up to a renaming of bound variables:
//!
//! ~~~
//! # use klono::{parse, Error};
//! let t1 = parse("forall (A : Type) (l : list A), rev (rev l) = l")?;
//! let t2 = parse("forall (A : Type) (xs : list A), rev (rev xs) = xs")?;
//! let t3 = parse("forall (A : Type) (l : list A), rev l = l")?;
//! assert!(t1.alpha_equiv(&t2));
//! assert!(!t1.alpha_equiv(&t3));
//! # Ok::<_, Error>(())
//! ~~~
//!
//! Goals usually come with hypotheses.
//! Before comparing goals, we [generalize](Goal::generalize) them over
//! the hypotheses they depend on, yielding closed statements.
//! The [`search`] module then drops goals that are
//! the same as other goals after introducing some hypotheses,
//! and finds all pairs of alpha-equivalent goals from different theorems.
//!
//! # Organisation
//!
//! Terms are immutable and share their subterms via atomically reference-counted
//! pointers, so they can be compared from several threads at once.
//! Substitution creates new terms that share all unchanged subterms
//! with the original term.

extern crate alloc;
#[macro_use]
extern crate log;

mod alpha;
mod arg;
mod binder;
mod eq;
pub mod error;
mod fmt;
mod fv;
pub mod goal;
mod pattern;
mod scope;
pub mod search;
pub mod shape;
mod subst;
mod term;
mod var;

pub use arg::Arg;
pub use binder::{Binder, Cond, Fix};
pub use error::Error;
pub use fv::Vars;
pub use goal::{Goal, Hyp};
pub use pattern::{Case, Match, Pattern, Subject};
pub use term::{RTerm, Term, TermC};
pub use var::{Sort, Var};

/// Parse a term from a string.
///
/// ~~~
/// # use klono::{parse, Term};
/// assert_eq!(parse("f x")?, Term::var("f").appl(Term::var("x")));
/// assert!(parse("f (").is_err());
/// # Ok::<_, klono::Error>(())
/// ~~~
pub fn parse(s: &str) -> Result<Term, Error> {
    use gallina_parse::Parse;
    let tm = gallina_parse::Term::parse_str(s)?;
    trace!("Scope {:?}", tm);
    Ok(Term::try_from(tm)?)
}
