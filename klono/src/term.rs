//! Terms of the Gallina goal language.

use crate::{Arg, Binder, Cond, Fix, Match, Sort, Var};
use alloc::sync::Arc;
use alloc::vec::Vec;

/// Term.
///
/// Variables and sorts are stored inline;
/// all other terms are behind a shared pointer, see [`RTerm`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    Var(Var),
    Sort(Sort),
    Comb(RTerm),
}

/// Combinator term.
///
/// Every abstraction binds exactly one variable;
/// binder groups are desugared into nested abstractions.
#[derive(Clone, Debug)]
pub enum TermC {
    /// application of a function to one argument
    Appl(Term, Term),
    /// `(t : A)`
    Cast(Term, Term),
    /// `fun x : A => t`
    Fun(Arg<Var, Term>, Term),
    /// `forall x : A, t`
    Prod(Arg<Var, Term>, Term),
    /// `let x : A := d in t`, where the type is optional
    Let(Arg<Var, Option<Term>>, Term, Term),
    Fix(Fix),
    Cond(Cond),
    Match(Match),
}

/// Pointer to a shared term.
#[derive(Clone, Debug)]
pub struct RTerm(Arc<TermC>);

impl RTerm {
    /// Create a term pointer from a term.
    pub fn new(tm: TermC) -> Self {
        Self(Arc::new(tm))
    }

    /// Compare the memory addresses of two term pointers.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl core::ops::Deref for RTerm {
    type Target = TermC;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<TermC> for RTerm {
    fn from(tm: TermC) -> Self {
        Self::new(tm)
    }
}

impl From<TermC> for Term {
    fn from(tm: TermC) -> Self {
        Self::Comb(RTerm::new(tm))
    }
}

impl From<Var> for Term {
    fn from(x: Var) -> Self {
        Self::Var(x)
    }
}

impl Term {
    pub fn var(name: &str) -> Self {
        Self::Var(Var::new(name))
    }

    /// Apply the term to an argument.
    pub fn appl(self, arg: Self) -> Self {
        TermC::Appl(self, arg).into()
    }

    /// Apply the term to several arguments, leftmost first.
    pub fn apply(self, args: impl IntoIterator<Item = Self>) -> Self {
        args.into_iter().fold(self, Self::appl)
    }

    /// Abstract a term over binder groups, rightmost name innermost.
    pub fn fun(binders: Vec<Binder>, body: Self) -> Self {
        Self::abstract_over(binders, body, TermC::Fun)
    }

    /// Quantify a term over binder groups, rightmost name innermost.
    pub fn prod(binders: Vec<Binder>, body: Self) -> Self {
        Self::abstract_over(binders, body, TermC::Prod)
    }

    pub fn let_in(id: Var, ty: Option<Self>, def: Self, body: Self) -> Self {
        TermC::Let(Arg { id, ty }, def, body).into()
    }

    fn abstract_over<F>(binders: Vec<Binder>, body: Self, f: F) -> Self
    where
        F: Fn(Arg<Var, Self>, Self) -> TermC,
    {
        binders.into_iter().rev().fold(body, |acc, b| {
            let ty = b.ty;
            let names = b.names.into_iter().rev();
            names.fold(acc, |acc, id| {
                let ty = ty.clone();
                f(Arg { id, ty }, acc).into()
            })
        })
    }

    /// Compare the memory addresses of two terms.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Var(x), Self::Var(y)) => x == y,
            (Self::Sort(s1), Self::Sort(s2)) => s1 == s2,
            (Self::Comb(c1), Self::Comb(c2)) => c1.ptr_eq(c2),
            _ => false,
        }
    }

    /// Return the bodies obtained by stripping one or more products.
    pub fn prod_bodies(&self) -> impl Iterator<Item = &Self> {
        let mut tm = self;
        core::iter::from_fn(move || match tm {
            Self::Comb(c) => match &**c {
                TermC::Prod(_, body) => {
                    tm = body;
                    Some(tm)
                }
                _ => None,
            },
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(names: &[&str], ty: Term) -> Binder {
        let names = names.iter().map(|n| Var::new(n)).collect();
        Binder::new(names, ty).unwrap()
    }

    #[test]
    fn desugar() {
        let nat = Term::var("nat");
        let groups = vec![bind(&["x", "y"], nat.clone()), bind(&["z"], nat.clone())];
        let tm = Term::prod(groups, Term::var("P"));
        assert_eq!(tm.prod_bodies().count(), 3);
        match &tm {
            Term::Comb(c) => match &**c {
                TermC::Prod(arg, _) => assert_eq!(arg.id, Var::new("x")),
                _ => panic!("product expected"),
            },
            _ => panic!("product expected"),
        }
        assert_eq!(tm.prod_bodies().last(), Some(&Term::var("P")));
    }

    #[test]
    fn apply() {
        let tm = Term::var("f").apply([Term::var("a"), Term::var("b")]);
        let expected = Term::var("f").appl(Term::var("a")).appl(Term::var("b"));
        assert_eq!(tm, expected);
        assert!(Term::var("f").apply([]).ptr_eq(&Term::var("f")));
    }
}
