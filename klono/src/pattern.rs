//! Patterns and pattern matching.

use crate::shape::Error;
use crate::{Term, Var};
use alloc::vec::Vec;

/// Pattern `C x y as z`.
///
/// The head `C` is a constructor and is not bound;
/// the remaining names and the alias are bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    names: Vec<Var>,
    pub alias: Option<Var>,
}

impl Pattern {
    pub fn new(names: Vec<Var>, alias: Option<Var>) -> Result<Self, Error> {
        if names.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Self { names, alias })
    }

    pub fn head(&self) -> &Var {
        &self.names[0]
    }

    /// Replace the head of the pattern.
    pub fn with_head(&self, head: Var) -> Self {
        let mut names = self.names.clone();
        names[0] = head;
        let alias = self.alias.clone();
        Self { names, alias }
    }

    pub fn args(&self) -> &[Var] {
        &self.names[1..]
    }

    /// Non-wildcard bound names in declaration order.
    pub fn bound(&self) -> impl Iterator<Item = &Var> {
        let bound = self.args().iter().chain(self.alias.iter());
        bound.filter(|x| !x.is_wildcard())
    }
}

/// Case clause `| p1, ..., pn => t`, with one pattern per match subject.
#[derive(Clone, Debug)]
pub struct Case {
    pub patterns: Vec<Pattern>,
    pub body: Term,
}

impl Case {
    pub fn new(patterns: Vec<Pattern>, body: Term) -> Result<Self, Error> {
        if patterns.is_empty() {
            return Err(Error::EmptyCase);
        }
        Ok(Self { patterns, body })
    }

    /// Names bound in the body, in declaration order.
    pub fn bound(&self) -> impl Iterator<Item = &Var> {
        self.patterns.iter().flat_map(Pattern::bound)
    }

    pub fn binds(&self, x: &Var) -> bool {
        self.bound().any(|b| b == x)
    }
}

/// Match subject `t as x in I y z`.
///
/// The alias and the names of the `in` pattern are bound in the motive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject {
    pub term: Term,
    pub alias: Option<Var>,
    pub pattern: Option<Pattern>,
}

impl Subject {
    /// Non-wildcard names bound in the motive, without duplicates.
    pub fn bound(&self) -> Vec<&Var> {
        let pat = self.pattern.iter().flat_map(Pattern::bound);
        let mut bound: Vec<&Var> = Vec::new();
        for x in self.alias.iter().filter(|x| !x.is_wildcard()).chain(pat) {
            if !bound.contains(&x) {
                bound.push(x)
            }
        }
        bound
    }
}

/// Pattern matching `match s1, ..., sn return P with cases end`.
#[derive(Clone, Debug)]
pub struct Match {
    pub subjects: Vec<Subject>,
    pub ret: Option<Term>,
    pub cases: Vec<Case>,
}

impl Match {
    pub fn new(subjects: Vec<Subject>, ret: Option<Term>, cases: Vec<Case>) -> Result<Self, Error> {
        if subjects.is_empty() {
            return Err(Error::NoSubjects);
        }
        Ok(Self {
            subjects,
            ret,
            cases,
        })
    }

    /// Names bound in the motive, in declaration order.
    pub fn ret_bound(&self) -> Vec<&Var> {
        self.subjects.iter().flat_map(Subject::bound).collect()
    }

    pub fn ret_binds(&self, x: &Var) -> bool {
        self.subjects.iter().any(|s| s.bound().contains(&x))
    }
}

#[test]
fn bound() {
    let v = |s: &str| Var::new(s);
    let pat = Pattern::new(vec![v("S"), v("_"), v("k")], Some(v("n"))).unwrap();
    assert_eq!(pat.head(), &v("S"));
    assert_eq!(pat.bound().collect::<Vec<_>>(), [&v("k"), &v("n")]);
    assert_eq!(Pattern::new(Vec::new(), None), Err(Error::EmptyPattern));

    let pattern = Some(Pattern::new(vec![v("eq"), v("_"), v("y")], None).unwrap());
    let alias = Some(v("y"));
    let subject = Subject { term: Term::var("h"), alias, pattern };
    assert_eq!(subject.bound(), [&v("y")]);

    let no_subjects = Match::new(Vec::new(), None, Vec::new());
    assert!(matches!(no_subjects, Err(Error::NoSubjects)));
}
