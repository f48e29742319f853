//! Goals and their generalization to closed statements.

use crate::{Arg, Term, TermC, Var};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use fnv::FnvHashMap;

/// Hypothesis `x : A` of a goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hyp {
    pub name: Var,
    pub ty: Term,
}

/// Proof goal, consisting of hypotheses and a conclusion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    /// name of the theorem in whose proof the goal occurs
    pub theorem: String,
    pub hyps: Vec<Hyp>,
    pub concl: Term,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// hypothesis whose type depends on itself, directly or indirectly
    Cycle(Var),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Cycle(x) => write!(f, "hypothesis {} depends on itself", x),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    New,
    Active,
    Done,
}

/// Depth-first traversal of the dependencies between hypotheses.
struct Deps<'a> {
    hyps: &'a [Hyp],
    /// position of the last hypothesis with a given name
    index: FnvHashMap<&'a Var, usize>,
    marks: Vec<Mark>,
    order: Vec<usize>,
}

impl<'a> Deps<'a> {
    fn new(hyps: &'a [Hyp]) -> Self {
        let index = hyps.iter().enumerate().map(|(i, h)| (&h.name, i)).collect();
        let marks = alloc::vec![Mark::New; hyps.len()];
        let order = Vec::new();
        Self {
            hyps,
            index,
            marks,
            order,
        }
    }

    /// Positions of the hypotheses that occur freely in `tm`, in declaration order.
    fn used_by(&self, tm: &Term) -> Vec<usize> {
        let fvs = tm.free_vars();
        let mut used: Vec<_> = fvs.iter().filter_map(|x| self.index.get(x).copied()).collect();
        used.sort_unstable();
        used
    }

    fn visit(&mut self, i: usize) -> Result<(), Error> {
        match self.marks[i] {
            Mark::Done => return Ok(()),
            Mark::Active => return Err(Error::Cycle(self.hyps[i].name.clone())),
            Mark::New => self.marks[i] = Mark::Active,
        }
        for j in self.used_by(&self.hyps[i].ty) {
            self.visit(j)?
        }
        self.marks[i] = Mark::Done;
        self.order.push(i);
        Ok(())
    }
}

impl Goal {
    /// Return the hypotheses that the conclusion depends on, transitively.
    ///
    /// Every hypothesis comes after the hypotheses that its type depends on.
    pub fn dependencies(&self) -> Result<Vec<&Hyp>, Error> {
        let mut deps = Deps::new(&self.hyps);
        for i in deps.used_by(&self.concl) {
            deps.visit(i)?
        }
        Ok(deps.order.iter().map(|i| &self.hyps[*i]).collect())
    }

    /// Quantify the conclusion over the hypotheses it depends on.
    ///
    /// ~~~
    /// # use klono::{parse, Goal};
    /// let goal = Goal::parse("Goal t (A : Type) (x y : A) (H : x = x) : x = x.")?;
    /// let expected = parse("forall (A : Type) (x : A), x = x")?;
    /// assert_eq!(goal.generalize()?, expected);
    /// # Ok::<_, klono::Error>(())
    /// ~~~
    pub fn generalize(&self) -> Result<Term, Error> {
        let deps = self.dependencies()?;
        debug!("Generalize {} over {} hypotheses", self.theorem, deps.len());
        let prod = |acc: Term, h: &Hyp| -> Term {
            let arg = Arg {
                id: h.name.clone(),
                ty: h.ty.clone(),
            };
            TermC::Prod(arg, acc).into()
        };
        Ok(deps.into_iter().rev().fold(self.concl.clone(), prod))
    }

    /// Parse a single goal command.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        use gallina_parse::Parse;
        let goal = gallina_parse::Goal::parse_str(s)?;
        Ok(Self::try_from(goal)?)
    }
}

impl<S: AsRef<str>> TryFrom<gallina_parse::Goal<S>> for Goal {
    type Error = crate::shape::Error;

    fn try_from(goal: gallina_parse::Goal<S>) -> Result<Self, Self::Error> {
        let mut hyps = Vec::new();
        for b in goal.hyps {
            let ty = Term::try_from(b.ty)?;
            let names = b.names.iter().map(|x| Var::new(x.as_ref()));
            hyps.extend(names.map(|name| Hyp {
                name,
                ty: ty.clone(),
            }));
        }
        Ok(Self {
            theorem: goal.theorem.as_ref().into(),
            hyps,
            concl: Term::try_from(goal.concl)?,
        })
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Goal {}", self.theorem)?;
        for h in &self.hyps {
            write!(f, " ({} : {})", h.name, h.ty)?;
        }
        write!(f, " : {}.", self.concl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn generalize(s: &str) -> Result<Term, Error> {
        Goal::parse(s).unwrap().generalize()
    }

    #[test]
    fn positive() {
        let goal = "Goal t (n : nat) (m : nat) : m = m.";
        assert_eq!(generalize(goal), Ok(parse("forall m : nat, m = m").unwrap()));

        // dependencies come first, even when declared later
        let goal = "Goal t (x : A) (A : Type) : x = x.";
        let expected = parse("forall (A : Type) (x : A), x = x").unwrap();
        assert_eq!(generalize(goal), Ok(expected));

        // transitive dependencies, ties broken by declaration order
        let goal = "Goal t (B : Type) (A : Type) (f : A -> B) (y : B) : f = f /\\ y = y.";
        let expected = "forall (B : Type) (A : Type) (f : A -> B) (y : B), f = f /\\ y = y";
        assert_eq!(generalize(goal), Ok(parse(expected).unwrap()));

        // later hypotheses shadow earlier ones
        let goal = "Goal t (x : A) (x : B) : x = x.";
        assert_eq!(generalize(goal), Ok(parse("forall x : B, x = x").unwrap()));

        let goal = "Goal t (n : nat) : True.";
        assert_eq!(generalize(goal), Ok(parse("True").unwrap()));
    }

    #[test]
    fn negative() {
        let goal = "Goal t (x : P x) : x = x.";
        assert_eq!(generalize(goal), Err(Error::Cycle(Var::new("x"))));
        let goal = "Goal t (x : P y) (y : Q x) : x = y.";
        assert!(matches!(generalize(goal), Err(Error::Cycle(_))));
    }

    #[test]
    fn display() {
        let s = "Goal t (n : nat) : n = n.";
        let goal = Goal::parse(s).unwrap();
        assert_eq!(Goal::parse(&goal.to_string()), Ok(goal));
    }
}
