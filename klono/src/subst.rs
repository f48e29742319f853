//! Substitution of variables by variables.

use crate::{Case, Cond, Fix, Match, Pattern, RTerm, Subject, Term, TermC, Var};

/// Substitution of `x` by `y` that records whether it changed anything.
struct Subst<'a> {
    x: &'a Var,
    y: &'a Var,
    changed: bool,
}

impl<'a> Subst<'a> {
    fn new(x: &'a Var, y: &'a Var) -> Self {
        let changed = false;
        Self { x, y, changed }
    }

    fn term(&mut self, tm: &Term) -> Term {
        let tm2 = tm.subst(self.x, self.y);
        self.changed |= !tm.ptr_eq(&tm2);
        tm2
    }

    /// Substitute in a term unless `bound` holds, in which case `x` is shadowed.
    fn under(&mut self, bound: bool, tm: &Term) -> Term {
        if bound {
            tm.clone()
        } else {
            self.term(tm)
        }
    }

    fn opt(&mut self, tm: &Option<Term>) -> Option<Term> {
        tm.as_ref().map(|tm| self.term(tm))
    }

    /// Substitute the head of an `in` pattern, which lives in the outer scope.
    fn head(&mut self, pat: &Pattern) -> Pattern {
        if pat.head() == self.x {
            self.changed = true;
            pat.with_head(self.y.clone())
        } else {
            pat.clone()
        }
    }
}

impl Term {
    /// Replace every free occurrence of `x` by `y`.
    ///
    /// Subterms that do not contain `x` freely are shared with the original term.
    pub fn subst(&self, x: &Var, y: &Var) -> Self {
        match self {
            Self::Var(v) if v == x => Self::Var(y.clone()),
            Self::Comb(c) => Self::Comb(c.subst(x, y)),
            Self::Var(_) | Self::Sort(_) => self.clone(),
        }
    }
}

impl RTerm {
    pub fn subst(&self, x: &Var, y: &Var) -> Self {
        let mut s = Subst::new(x, y);
        let tm = match &**self {
            TermC::Appl(t, u) => TermC::Appl(s.term(t), s.term(u)),
            TermC::Cast(t, u) => TermC::Cast(s.term(t), s.term(u)),
            TermC::Fun(arg, body) => {
                let body = s.under(&arg.id == x, body);
                TermC::Fun(arg.clone().map_ty(|ty| s.term(&ty)), body)
            }
            TermC::Prod(arg, body) => {
                let body = s.under(&arg.id == x, body);
                TermC::Prod(arg.clone().map_ty(|ty| s.term(&ty)), body)
            }
            TermC::Let(arg, def, body) => {
                let body = s.under(&arg.id == x, body);
                let def = s.term(def);
                TermC::Let(arg.clone().map_ty(|ty| s.opt(&ty)), def, body)
            }
            TermC::Fix(fix) if fix.binds(x) => return self.clone(),
            TermC::Fix(fix) => TermC::Fix(fix.subst(&mut s)),
            TermC::Cond(cond) => TermC::Cond(cond.subst(&mut s)),
            TermC::Match(m) => TermC::Match(m.subst(&mut s)),
        };
        if s.changed {
            tm.into()
        } else {
            self.clone()
        }
    }
}

impl Fix {
    fn subst(&self, s: &mut Subst) -> Self {
        let mut params = self.params.clone();
        params.iter_mut().for_each(|b| b.ty = s.term(&b.ty));
        Self {
            name: self.name.clone(),
            params,
            struct_arg: self.struct_arg.clone(),
            ty: s.term(&self.ty),
            body: s.term(&self.body),
        }
    }
}

impl Cond {
    fn subst(&self, s: &mut Subst) -> Self {
        let shadowed = self.alias.as_ref() == Some(s.x);
        Self {
            guard: s.term(&self.guard),
            alias: self.alias.clone(),
            ret: self.ret.as_ref().map(|ret| s.under(shadowed, ret)),
            then: s.term(&self.then),
            els: s.term(&self.els),
        }
    }
}

impl Match {
    fn subst(&self, s: &mut Subst) -> Self {
        let subjects = self.subjects.iter().map(|subj| Subject {
            term: s.term(&subj.term),
            alias: subj.alias.clone(),
            pattern: subj.pattern.as_ref().map(|p| s.head(p)),
        });
        let subjects = subjects.collect();
        let shadowed = self.ret_binds(s.x);
        let ret = self.ret.as_ref().map(|ret| s.under(shadowed, ret));
        let cases = self.cases.iter().map(|case| Case {
            patterns: case.patterns.clone(),
            body: s.under(case.binds(s.x), &case.body),
        });
        Self {
            subjects,
            ret,
            cases: cases.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse, Term, Var};

    fn subst(s: &str, x: &str) -> Term {
        parse(s).unwrap().subst(&Var::new(x), &Var::new("z"))
    }

    fn check(s: &str, x: &str, expected: &str) {
        assert_eq!(subst(s, x), parse(expected).unwrap())
    }

    #[test]
    fn shadowing() {
        check("f x (fun x : x => x)", "x", "f z (fun x : z => x)");
        check("forall y : x, x y", "x", "forall y : z, z y");
        check("let x : x := x in x", "x", "let x : z := z in x");
        check("Type@{x}", "x", "Type@{x}");
    }

    #[test]
    fn fixpoints() {
        let fix = "fix f (n : A) : T := f n x";
        check(fix, "x", "fix f (n : A) : T := f n z");
        check(fix, "A", "fix f (n : z) : T := f n x");
        // self name and parameters shadow everything, even parameter types
        check(fix, "f", fix);
        check("fix f (n : n) : T := n", "n", "fix f (n : n) : T := n");
    }

    #[test]
    fn conditionals() {
        let cond = "if x as x return P x then x else y";
        check(cond, "x", "if z as x return P x then z else y");
        check(cond, "P", "if x as x return z x then x else y");
    }

    #[test]
    fn matches() {
        let m = "match x as y return P x y with S x => x | O => x end";
        check(m, "x", "match z as y return P z y with S x => x | O => z end");
        check(m, "y", m);

        let m = "match h in eq _ y return P y with eq_refl => tt end";
        check(m, "eq", "match h in z _ y return P y with eq_refl => tt end");
        check(m, "y", m);
        assert!(!subst(m, "eq").free_vars().contains(&Var::new("eq")));
    }

    #[test]
    fn sharing() {
        let tm = parse("f (g a) (h b)").unwrap();
        let tm2 = tm.subst(&Var::new("c"), &Var::new("z"));
        assert!(tm.ptr_eq(&tm2));
    }
}
