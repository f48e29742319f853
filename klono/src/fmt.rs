//! Printing of terms in Gallina syntax.
//!
//! Printed terms can be parsed back to structurally equal terms.

use crate::{Binder, Case, Cond, Fix, Match, Pattern, RTerm, Subject, Term, TermC};
use core::fmt::{self, Display};

impl Term {
    fn is_atomic(&self) -> bool {
        match self {
            Self::Var(_) | Self::Sort(_) => true,
            Self::Comb(c) => matches!(**c, TermC::Cast(..) | TermC::Match(_)),
        }
    }

    fn is_binder(&self) -> bool {
        match self {
            Self::Var(_) | Self::Sort(_) => false,
            Self::Comb(c) => !matches!(**c, TermC::Appl(..) | TermC::Cast(..) | TermC::Match(_)),
        }
    }
}

/// Term that is parenthesized unless it is atomic.
struct Atom<'a>(&'a Term);

/// Term that is parenthesized if it starts with a binder.
struct Operand<'a>(&'a Term);

impl<'a> Display for Atom<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_atomic() {
            self.0.fmt(f)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

impl<'a> Display for Operand<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_binder() {
            write!(f, "({})", self.0)
        } else {
            self.0.fmt(f)
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var(x) => x.fmt(f),
            Self::Sort(s) => s.fmt(f),
            Self::Comb(c) => c.fmt(f),
        }
    }
}

impl Display for RTerm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (**self).fmt(f)
    }
}

/// Print an application `head args... last`, where `head` may be an application itself.
fn fmt_appl(mut head: &Term, last: &Term, f: &mut fmt::Formatter) -> fmt::Result {
    let mut args = alloc::vec![last];
    while let Term::Comb(c) = head {
        match &**c {
            TermC::Appl(h, a) => {
                args.push(a);
                head = h
            }
            _ => break,
        }
    }
    Atom(head).fmt(f)?;
    args.iter().rev().try_for_each(|a| write!(f, " {}", Atom(a)))
}

impl Display for TermC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Appl(head, arg) => fmt_appl(head, arg, f),
            Self::Cast(tm, ty) => write!(f, "({} : {})", tm, ty),
            Self::Fun(arg, body) => write!(f, "fun ({} : {}) => {}", arg.id, arg.ty, body),
            Self::Prod(arg, body) => write!(f, "forall ({} : {}), {}", arg.id, arg.ty, body),
            Self::Let(arg, def, body) => {
                write!(f, "let {}", arg.id)?;
                if let Some(ty) = &arg.ty {
                    write!(f, " : {}", ty)?
                }
                write!(f, " := {} in {}", def, body)
            }
            Self::Fix(fix) => fix.fmt(f),
            Self::Cond(cond) => cond.fmt(f),
            Self::Match(m) => m.fmt(f),
        }
    }
}

impl Display for Binder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        self.names.iter().try_for_each(|x| write!(f, "{} ", x))?;
        write!(f, ": {})", self.ty)
    }
}

impl Display for Fix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fix {}", self.name)?;
        self.params.iter().try_for_each(|b| write!(f, " {}", b))?;
        if let Some(x) = &self.struct_arg {
            write!(f, " {{struct {}}}", x)?
        }
        write!(f, " : {} := {}", self.ty, self.body)
    }
}

impl Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "if {}", Operand(&self.guard))?;
        if let Some(x) = &self.alias {
            write!(f, " as {}", x)?
        }
        if let Some(ret) = &self.ret {
            write!(f, " return {}", ret)?
        }
        write!(f, " then {} else {}", self.then, self.els)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.head().fmt(f)?;
        self.args().iter().try_for_each(|x| write!(f, " {}", x))?;
        self.alias.iter().try_for_each(|x| write!(f, " as {}", x))
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Operand(&self.term).fmt(f)?;
        self.alias.iter().try_for_each(|x| write!(f, " as {}", x))?;
        self.pattern.iter().try_for_each(|p| write!(f, " in {}", p))
    }
}

impl Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, p) in self.patterns.iter().enumerate() {
            write!(f, "{} {}", if i == 0 { "|" } else { "," }, p)?
        }
        write!(f, " => {}", self.body)
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "match ")?;
        for (i, s) in self.subjects.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?
            }
            s.fmt(f)?
        }
        if let Some(ret) = &self.ret {
            write!(f, " return {}", ret)?
        }
        write!(f, " with")?;
        self.cases.iter().try_for_each(|c| write!(f, " {}", c))?;
        write!(f, " end")
    }
}

#[test]
fn roundtrip() {
    let terms = [
        "f (g x) (fun x : A => x) y",
        "forall (A : Type@{u}) (x y : A), x = y -> (x : A) = y",
        "let x := fix f (n m : nat) {struct n} : nat := f n m in x",
        "if b x as y return P y then match n, m as k in I j return Q k j with O, _ => a | S p as q, _ => b end else c",
        "match (fun x : A => x) y with end",
        "(if b then x else y) z",
    ];
    for s in terms {
        let tm = crate::parse(s).unwrap();
        assert_eq!(crate::parse(&tm.to_string()), Ok(tm))
    }
}
