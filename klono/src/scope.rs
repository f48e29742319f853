//! Conversion of parse trees to terms.
//!
//! Scoping desugars binder groups and
//! checks the shapes that the parser does not rule out,
//! such as `{struct x}` annotations that do not name a parameter.

use crate::shape::Error;
use crate::{Binder, Case, Cond, Fix, Match, Pattern, Sort, Subject, Term, TermC, Var};
use alloc::vec::Vec;
use gallina_parse::term as parse;

type Result<T> = core::result::Result<T, Error>;

fn var<S: AsRef<str>>(s: S) -> Var {
    Var::new(s.as_ref())
}

fn vars<S: AsRef<str>>(names: Vec<S>) -> Vec<Var> {
    names.into_iter().map(var).collect()
}

fn terms<S: AsRef<str>>(tms: Vec<parse::Term<S>>) -> Result<Vec<Term>> {
    tms.into_iter().map(Term::try_from).collect()
}

fn opt<S: AsRef<str>>(tm: Option<parse::Term<S>>) -> Result<Option<Term>> {
    tm.map(Term::try_from).transpose()
}

fn binders<S: AsRef<str>>(bs: Vec<parse::Binder<S>>) -> Result<Vec<Binder>> {
    bs.into_iter().map(Binder::try_from).collect()
}

impl<S: AsRef<str>> TryFrom<parse::Term<S>> for Term {
    type Error = Error;

    fn try_from(tm: parse::Term<S>) -> Result<Self> {
        match tm {
            parse::Term::Symb(s) => Ok(Self::Var(var(s))),
            parse::Term::Sort(s, annot) => {
                let annot = annot.as_ref().map(|a| a.as_ref());
                Ok(Self::Sort(Sort::new(s.as_ref(), annot)))
            }
            parse::Term::Comb(c) => Self::try_from(*c),
        }
    }
}

impl<S: AsRef<str>> TryFrom<parse::TermC<S>> for Term {
    type Error = Error;

    fn try_from(tm: parse::TermC<S>) -> Result<Self> {
        use parse::TermC as P;
        Ok(match tm {
            P::Appl(head, args) => Self::try_from(head)?.apply(terms(args)?),
            P::Cast(tm, ty) => TermC::Cast(tm.try_into()?, ty.try_into()?).into(),
            P::Fun(bs, body) => Self::fun(binders(bs)?, body.try_into()?),
            P::Forall(bs, body) => Self::prod(binders(bs)?, body.try_into()?),
            P::Let(x, ty, def, body) => {
                let (ty, def) = (opt(ty)?, def.try_into()?);
                Self::let_in(var(x), ty, def, body.try_into()?)
            }
            P::Fix(fix) => TermC::Fix(fix.try_into()?).into(),
            P::If(cond) => TermC::Cond(cond.try_into()?).into(),
            P::Match(m) => TermC::Match(m.try_into()?).into(),
        })
    }
}

impl<S: AsRef<str>> TryFrom<parse::Binder<S>> for Binder {
    type Error = Error;

    fn try_from(b: parse::Binder<S>) -> Result<Self> {
        Self::new(vars(b.names), b.ty.try_into()?)
    }
}

impl<S: AsRef<str>> TryFrom<parse::Fix<S>> for Fix {
    type Error = Error;

    fn try_from(fix: parse::Fix<S>) -> Result<Self> {
        let params = binders(fix.params)?;
        let (ty, body) = (fix.ty.try_into()?, fix.body.try_into()?);
        Self::new(var(fix.name), params, fix.struct_arg.map(var), ty, body)
    }
}

impl<S: AsRef<str>> TryFrom<parse::If<S>> for Cond {
    type Error = Error;

    fn try_from(cond: parse::If<S>) -> Result<Self> {
        Ok(Self {
            guard: cond.guard.try_into()?,
            alias: cond.alias.map(var),
            ret: opt(cond.ret)?,
            then: cond.then.try_into()?,
            els: cond.els.try_into()?,
        })
    }
}

impl<S: AsRef<str>> TryFrom<parse::Pattern<S>> for Pattern {
    type Error = Error;

    fn try_from(p: parse::Pattern<S>) -> Result<Self> {
        Self::new(vars(p.names), p.alias.map(var))
    }
}

impl<S: AsRef<str>> TryFrom<parse::Subject<S>> for Subject {
    type Error = Error;

    fn try_from(s: parse::Subject<S>) -> Result<Self> {
        Ok(Self {
            term: s.term.try_into()?,
            alias: s.alias.map(var),
            pattern: s.pattern.map(Pattern::try_from).transpose()?,
        })
    }
}

impl<S: AsRef<str>> TryFrom<parse::Case<S>> for Case {
    type Error = Error;

    fn try_from(c: parse::Case<S>) -> Result<Self> {
        let patterns = c.patterns.into_iter().map(Pattern::try_from);
        Self::new(patterns.collect::<Result<_>>()?, c.body.try_into()?)
    }
}

impl<S: AsRef<str>> TryFrom<parse::Match<S>> for Match {
    type Error = Error;

    fn try_from(m: parse::Match<S>) -> Result<Self> {
        let subjects = m.subjects.into_iter().map(Subject::try_from);
        let subjects = subjects.collect::<Result<_>>()?;
        let cases = m.cases.into_iter().map(Case::try_from);
        Self::new(subjects, opt(m.ret)?, cases.collect::<Result<_>>()?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse, shape, Error, Term, Var};
    use gallina_parse::Parse;

    fn shape_err(s: &str) -> Option<shape::Error> {
        match parse(s) {
            Err(Error::Shape(e)) => Some(e),
            _ => None,
        }
    }

    #[test]
    fn positive() {
        let tm = parse("fun (x y : A) (z : B) => f x y z").unwrap();
        let expected = Term::fun(
            vec![
                crate::Binder::new(vec![Var::new("x"), Var::new("y")], Term::var("A")).unwrap(),
                crate::Binder::new(vec![Var::new("z")], Term::var("B")).unwrap(),
            ],
            Term::var("f").apply(["x", "y", "z"].map(Term::var)),
        );
        assert_eq!(tm, expected);
        assert!(matches!(parse("Type@{u}"), Ok(Term::Sort(_))));
        assert!(matches!(parse("Typ"), Ok(Term::Var(_))));
    }

    #[test]
    fn negative() {
        let err = shape_err("fix f (n : nat) {struct m} : nat := n");
        assert_eq!(err, Some(shape::Error::StructArg(Var::new("m"))));
        assert!(matches!(parse("f ("), Err(Error::Parse(_))));

        // shapes that the parser cannot produce are still rejected by scoping
        let empty: gallina_parse::term::Match<&str> = gallina_parse::term::Match {
            subjects: Vec::new(),
            ret: None,
            cases: Vec::new(),
        };
        let empty = gallina_parse::term::TermC::Match(empty);
        let scoped = Term::try_from(gallina_parse::Term::comb(empty));
        assert_eq!(scoped.err(), Some(shape::Error::NoSubjects));
        let tm = gallina_parse::Term::parse_str("x").unwrap();
        assert_eq!(Term::try_from(tm), Ok(Term::var("x")));
    }
}
