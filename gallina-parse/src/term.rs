//! Parse trees of Gallina terms.
//!
//! Parse trees stay close to the surface syntax:
//! binder groups are not yet desugared and applications are n-ary.

use alloc::{boxed::Box, vec::Vec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term<S> {
    /// Variable, constant, numeral, existential variable or notation symbol
    Symb(S),
    /// Sort (`Prop`, `Set`, `SProp`, `Type`), possibly with universe annotation
    Sort(S, Option<S>),
    Comb(Box<TermC<S>>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermC<S> {
    // Application (`t u1 ... un`)
    Appl(Term<S>, Vec<Term<S>>),
    // Type cast (`(t : A)`)
    Cast(Term<S>, Term<S>),
    // Abstraction (`fun (x y : A) => t`)
    Fun(Vec<Binder<S>>, Term<S>),
    // Dependent product (`forall (x y : A), t`)
    Forall(Vec<Binder<S>>, Term<S>),
    // Local definition (`let x : A := u in t`)
    Let(S, Option<Term<S>>, Term<S>, Term<S>),
    Fix(Fix<S>),
    If(If<S>),
    Match(Match<S>),
}

/// Group of names sharing a type, such as `(x y : A)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binder<S> {
    pub names: Vec<S>,
    pub ty: Term<S>,
}

/// Fixpoint `fix f (x : A) {struct x} : B := t`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fix<S> {
    pub name: S,
    pub params: Vec<Binder<S>>,
    pub struct_arg: Option<S>,
    pub ty: Term<S>,
    pub body: Term<S>,
}

/// Conditional `if g as x return P then t else u`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct If<S> {
    pub guard: Term<S>,
    pub alias: Option<S>,
    pub ret: Option<Term<S>>,
    pub then: Term<S>,
    pub els: Term<S>,
}

/// Pattern match `match t as x in I y return P with ... end`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<S> {
    pub subjects: Vec<Subject<S>>,
    pub ret: Option<Term<S>>,
    pub cases: Vec<Case<S>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject<S> {
    pub term: Term<S>,
    pub alias: Option<S>,
    pub pattern: Option<Pattern<S>>,
}

/// Case clause `| p1, ..., pn => t`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case<S> {
    pub patterns: Vec<Pattern<S>>,
    pub body: Term<S>,
}

/// Constructor pattern `C x1 ... xn as y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern<S> {
    pub names: Vec<S>,
    pub alias: Option<S>,
}

impl<S> Term<S> {
    pub fn comb(tm: TermC<S>) -> Self {
        Self::Comb(Box::new(tm))
    }
}

impl<'s> Term<&'s str> {
    /// Classify an identifier as sort or symbol.
    pub fn ident(s: &'s str) -> Self {
        let (base, annot) = match s.find('@') {
            Some(i) => (&s[..i], Some(&s[i..])),
            None => (s, None),
        };
        match base {
            "Prop" | "Set" | "SProp" | "Type" => Self::Sort(base, annot),
            _ => Self::Symb(s),
        }
    }
}
