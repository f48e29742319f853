//! Free variables.

use crate::{Case, Cond, Fix, Match, Term, TermC, Var};
use fnv::FnvHashSet;

/// Set of variables.
pub type Vars = FnvHashSet<Var>;

impl Term {
    /// Return the variables that occur free in the term.
    ///
    /// The result never contains the wildcard.
    pub fn free_vars(&self) -> Vars {
        match self {
            Self::Var(x) if x.is_wildcard() => Vars::default(),
            Self::Var(x) => core::iter::once(x.clone()).collect(),
            Self::Sort(_) => Vars::default(),
            Self::Comb(c) => c.free_vars(),
        }
    }
}

impl TermC {
    pub fn free_vars(&self) -> Vars {
        match self {
            Self::Appl(t, u) | Self::Cast(t, u) => union(t.free_vars(), u.free_vars()),
            Self::Fun(arg, body) | Self::Prod(arg, body) => {
                let mut fvs = body.free_vars();
                fvs.remove(&arg.id);
                union(fvs, arg.ty.free_vars())
            }
            Self::Let(arg, def, body) => {
                let mut fvs = body.free_vars();
                fvs.remove(&arg.id);
                fvs.extend(arg.ty.iter().flat_map(Term::free_vars));
                union(fvs, def.free_vars())
            }
            Self::Fix(fix) => fix.free_vars(),
            Self::Cond(cond) => cond.free_vars(),
            Self::Match(m) => m.free_vars(),
        }
    }
}

impl Fix {
    fn free_vars(&self) -> Vars {
        let mut inner = union(self.ty.free_vars(), self.body.free_vars());
        inner.remove(&self.name);
        let mut tys: Vars = self.params.iter().flat_map(|b| b.ty.free_vars()).collect();
        for x in self.param_names() {
            inner.remove(x);
            tys.remove(x);
        }
        union(inner, tys)
    }
}

impl Cond {
    fn free_vars(&self) -> Vars {
        let mut fvs = self.ret.as_ref().map(Term::free_vars).unwrap_or_default();
        if let Some(x) = &self.alias {
            fvs.remove(x);
        }
        fvs.extend(self.guard.free_vars());
        fvs.extend(self.then.free_vars());
        union(fvs, self.els.free_vars())
    }
}

impl Case {
    fn free_vars(&self) -> Vars {
        let mut fvs = self.body.free_vars();
        self.bound().for_each(|x| {
            fvs.remove(x);
        });
        fvs
    }
}

impl Match {
    fn free_vars(&self) -> Vars {
        let mut fvs = self.ret.as_ref().map(Term::free_vars).unwrap_or_default();
        for x in self.ret_bound() {
            fvs.remove(x);
        }
        for s in &self.subjects {
            fvs.extend(s.term.free_vars());
            let head = s.pattern.as_ref().map(|p| p.head());
            fvs.extend(head.filter(|h| !h.is_wildcard()).cloned());
        }
        fvs.extend(self.cases.iter().flat_map(Case::free_vars));
        fvs
    }
}

fn union(mut l: Vars, r: Vars) -> Vars {
    if l.len() < r.len() {
        return union(r, l);
    }
    l.extend(r);
    l
}

#[cfg(test)]
mod tests {
    use crate::{parse, Var, Vars};

    fn fvs(s: &str) -> Vars {
        parse(s).unwrap().free_vars()
    }

    fn vars(names: &[&str]) -> Vars {
        names.iter().map(|n| Var::new(n)).collect()
    }

    #[test]
    fn binders() {
        assert_eq!(fvs("forall x : A, f x y"), vars(&["A", "f", "y"]));
        assert_eq!(fvs("fun (x : x) => x"), vars(&["x"]));
        assert_eq!(fvs("let x := x in x"), vars(&["x"]));
        assert_eq!(fvs("let x : T := d in x"), vars(&["T", "d"]));
        assert_eq!(fvs("forall _ : _, Prop"), vars(&[]));
    }

    #[test]
    fn fixpoints() {
        let fix = "fix f (n : nat) (m : n) : T n := f m";
        assert_eq!(fvs(fix), vars(&["nat", "T"]));
    }

    #[test]
    fn conditionals() {
        let cond = "if b x as y return P y z then t else u";
        assert_eq!(fvs(cond), vars(&["b", "x", "P", "z", "t", "u"]));
    }

    #[test]
    fn matches() {
        let m = "match n as k in nat return P k j with O => a | S p => f p q end";
        assert_eq!(fvs(m), vars(&["n", "nat", "P", "j", "a", "f", "q"]));
    }
}
