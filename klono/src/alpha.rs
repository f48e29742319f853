//! Alpha-equivalence, i.e. equality modulo renaming of bound variables.
//!
//! Two binders are compared by renaming the variables they bind
//! to shared synthetic variables and then comparing the results structurally.
//! Where a construct binds several variables at once,
//! the variables of each side are sorted by name and paired positionally.
//! This is a heuristic: it identifies terms whose bound names are
//! consistently renamed in an order-preserving way.

use crate::eq::unordered_eq;
use crate::{Case, Cond, Fix, Match, Term, TermC, Var};
use alloc::vec::Vec;

impl Term {
    /// Return true if the terms are equal up to renaming of bound variables.
    ///
    /// ~~~
    /// # use klono::parse;
    /// let t1 = parse("forall (n : nat), n + 0 = n")?;
    /// let t2 = parse("forall (m : nat), m + 0 = m")?;
    /// assert!(t1.alpha_equiv(&t2));
    /// # Ok::<_, klono::Error>(())
    /// ~~~
    pub fn alpha_equiv(&self, other: &Self) -> bool {
        trace!("alpha: {} ~ {}", self, other);
        match (self, other) {
            (Self::Var(x), Self::Var(y)) => x == y,
            (Self::Sort(s1), Self::Sort(s2)) => s1 == s2,
            (Self::Comb(c1), Self::Comb(c2)) => c1.ptr_eq(c2) || c1.alpha_equiv(c2),
            _ => false,
        }
    }
}

impl TermC {
    pub fn alpha_equiv(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Appl(t1, u1), Self::Appl(t2, u2)) | (Self::Cast(t1, u1), Self::Cast(t2, u2)) => {
                t1.alpha_equiv(t2) && u1.alpha_equiv(u2)
            }
            (Self::Fun(a1, b1), Self::Fun(a2, b2)) | (Self::Prod(a1, b1), Self::Prod(a2, b2)) => {
                a1.ty.alpha_equiv(&a2.ty) && bound_equiv(&a1.id, b1, &a2.id, b2)
            }
            (Self::Let(a1, d1, b1), Self::Let(a2, d2, b2)) => {
                opt_equiv(&a1.ty, &a2.ty) && d1.alpha_equiv(d2) && bound_equiv(&a1.id, b1, &a2.id, b2)
            }
            (Self::Fix(f1), Self::Fix(f2)) => f1.alpha_equiv(f2),
            (Self::Cond(c1), Self::Cond(c2)) => c1.alpha_equiv(c2),
            (Self::Match(m1), Self::Match(m2)) => m1.alpha_equiv(m2),
            _ => false,
        }
    }
}

fn opt_equiv(tm1: &Option<Term>, tm2: &Option<Term>) -> bool {
    match (tm1, tm2) {
        (None, None) => true,
        (Some(tm1), Some(tm2)) => tm1.alpha_equiv(tm2),
        _ => false,
    }
}

/// Compare the bodies of two binders that bind `x1` and `x2`, respectively.
fn bound_equiv(x1: &Var, tm1: &Term, x2: &Var, tm2: &Term) -> bool {
    if x1 == x2 {
        tm1.alpha_equiv(tm2)
    } else {
        let v = Var::synthetic(0);
        tm1.subst(x1, &v) == tm2.subst(x2, &v)
    }
}

/// Rename the bound variables of two terms to shared synthetic variables.
///
/// Fails if the numbers of bound variables differ.
fn canonicalize(
    mut xs1: Vec<&Var>,
    tm1: &Term,
    mut xs2: Vec<&Var>,
    tm2: &Term,
) -> Option<(Term, Term)> {
    if xs1.len() != xs2.len() {
        return None;
    }
    xs1.sort();
    xs2.sort();
    let (mut tm1, mut tm2) = (tm1.clone(), tm2.clone());
    for (i, (x1, x2)) in xs1.into_iter().zip(xs2).enumerate() {
        let v = Var::synthetic(i);
        tm1 = tm1.subst(x1, &v);
        tm2 = tm2.subst(x2, &v);
    }
    Some((tm1, tm2))
}

/// Compare two terms structurally after canonicalizing their bound variables.
fn canonical_eq(xs1: Vec<&Var>, tm1: &Term, xs2: Vec<&Var>, tm2: &Term) -> bool {
    canonicalize(xs1, tm1, xs2, tm2).map_or(false, |(tm1, tm2)| tm1 == tm2)
}

impl Fix {
    /// Self name and non-wildcard parameters.
    fn bound(&self) -> Vec<&Var> {
        let params = self.param_names().filter(|x| !x.is_wildcard());
        core::iter::once(&self.name).chain(params).collect()
    }

    fn alpha_equiv(&self, other: &Self) -> bool {
        let mut params = self.params.iter().zip(&other.params);
        self.params.len() == other.params.len()
            && params.all(|(b1, b2)| b1.ty == b2.ty)
            && self.ty.alpha_equiv(&other.ty)
            && canonical_eq(self.bound(), &self.body, other.bound(), &other.body)
    }
}

impl Cond {
    fn alpha_equiv(&self, other: &Self) -> bool {
        let rets = match (&self.alias, &other.alias) {
            // motives without alias must still agree
            (None, None) => self.ret == other.ret,
            (Some(x1), Some(x2)) => match (&self.ret, &other.ret) {
                (None, None) => true,
                (Some(r1), Some(r2)) => canonical_eq(vec![x1], r1, vec![x2], r2),
                _ => false,
            },
            _ => false,
        };
        self.guard == other.guard
            && rets
            && self.then.alpha_equiv(&other.then)
            && self.els.alpha_equiv(&other.els)
    }
}

impl Case {
    fn alpha_equiv(&self, other: &Self) -> bool {
        let mut heads = self.patterns.iter().zip(&other.patterns);
        let (xs1, xs2) = (self.bound().collect(), other.bound().collect());
        self.patterns.len() == other.patterns.len()
            && heads.all(|(p1, p2)| p1.head() == p2.head())
            && canonical_eq(xs1, &self.body, xs2, &other.body)
    }
}

impl Match {
    fn alpha_equiv(&self, other: &Self) -> bool {
        let mut subjects = self.subjects.iter().zip(&other.subjects);
        let rets = match (&self.ret, &other.ret) {
            (None, None) => true,
            (Some(r1), Some(r2)) => canonical_eq(self.ret_bound(), r1, other.ret_bound(), r2),
            _ => false,
        };
        self.subjects.len() == other.subjects.len()
            && subjects.all(|(s1, s2)| s1.term.alpha_equiv(&s2.term))
            && rets
            && unordered_eq(&self.cases, &other.cases, Case::alpha_equiv)
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse, Term};

    fn equiv(s1: &str, s2: &str) -> bool {
        let (t1, t2) = (parse(s1).unwrap(), parse(s2).unwrap());
        let eq = t1.alpha_equiv(&t2);
        assert_eq!(eq, t2.alpha_equiv(&t1), "symmetry");
        eq
    }

    #[test]
    fn reflexive() {
        let terms = [
            "forall (A : Type) (x y : A), x = y -> y = x",
            "fun (f : nat -> nat) (n : nat) => let m := f n in m + m",
            "fix add (n m : nat) {struct n} : nat := match n with O => m | S p => S (add p m) end",
            "if b as c return P c then t else u",
            "match h in eq _ y return P y with eq_refl => tt end",
        ];
        for s in terms {
            let tm = parse(s).unwrap();
            let copy = tm.clone();
            assert!(tm.alpha_equiv(&tm));
            assert!(tm.alpha_equiv(&parse(s).unwrap()));
            // comparison must not rename anything in its arguments
            assert!(tm.ptr_eq(&copy));
            assert_eq!(tm, parse(s).unwrap());
        }
    }

    #[test]
    fn scenarios() {
        assert!(equiv("fun x : Nat => x", "fun y : Nat => y"));
        assert!(!equiv("fun x : Nat => x", "fun x : Bool => x"));
        assert!(equiv("let x := 1 in x + x", "let y := 1 in y + y"));
        assert!(!equiv("let x := 1 in x + x", "let y := 2 in y + y"));
        let f = "fix f (x : Nat) : Nat := x";
        assert!(equiv(f, "fix g (y : Nat) : Nat := y"));
        let m1 = "match n with | O => 0 | S k => k end";
        let m2 = "match n with | O => 0 | S j => j end";
        assert!(equiv(m1, m2));
        // scrutinees are compared by alpha-equivalence, so unlike clause
        // variables, differently named free scrutinees are not identified
        assert!(!equiv(m1, "match m with | O => 0 | S j => j end"));
        assert!(equiv(m1, "match n with | S j => j | O => 0 end"));
    }

    #[test]
    fn renaming() {
        let t1 = "forall (A : Type) (x : A), ex (fun y : A => x = y)";
        let t2 = "forall (B : Type) (x : B), ex (fun y : B => x = y)";
        assert!(equiv(t1, t2));
        assert!(equiv("fun x y : A => x y", "fun z y : A => z y"));
        assert!(!equiv("fun x y : A => x y", "fun x y : A => y x"));
        // only the outermost pair of differing binders is renamed
        assert!(!equiv("fun x y : A => x y", "fun u v : A => u v"));
        // free variables are not renamed
        assert!(!equiv("forall x : A, P x", "forall x : B, P x"));
        assert!(!equiv("fun x : A => y", "fun x : A => z"));
        // inner binders are compared by name after the outer renaming
        let f1 = "fun (a : A) (y : B) (z : C) => y";
        assert!(!equiv(f1, "fun (b : A) (z : B) (y : C) => y"));
        let g1 = "forall (a : A) (y : B) (z : C), P y";
        assert!(!equiv(g1, "forall (b : A) (z : B) (y : C), P y"));
        assert!(equiv(g1, "forall (b : A) (y : B) (z : C), P y"));
    }

    #[test]
    fn variants() {
        assert!(!equiv("fun x : A => x", "forall x : A, x"));
        assert!(!equiv("f x", "(f : x)"));
        assert!(!equiv("Prop", "P"));
        assert!(!equiv("Type@{u}", "Type"));
        assert!(!equiv("let x : T := d in x", "let x := d in x"));
    }

    #[test]
    fn fixpoints() {
        let f = "fix f (n : nat) (m : nat) : nat := f n m";
        assert!(equiv(f, "fix g (q : nat) (p : nat) : nat := g q p"));
        // renamings that do not preserve the order of names are not detected
        assert!(!equiv(f, "fix g (a : nat) (b : nat) : nat := g a b"));
        assert!(!equiv(f, "fix f (n m : nat) : nat := f n m"));
        assert!(!equiv(f, "fix f (n : nat) (m : bool) : nat := f n m"));
        assert!(!equiv(f, "fix f (n : nat) (m : nat) : bool := f n m"));
        // wildcard parameters are not renamed
        assert!(equiv("fix f (_ : A) : B := f", "fix g (_ : A) : B := g"));
    }

    #[test]
    fn conditionals() {
        let c = "if b as x return P x then t else u";
        assert!(equiv(c, "if b as y return P y then t else u"));
        assert!(!equiv(c, "if b return P x then t else u"));
        assert!(!equiv(c, "if c as x return P x then t else u"));
        assert!(!equiv(c, "if b as x then t else u"));
        assert!(!equiv("if b return P then t else u", "if b return Q then t else u"));
        assert!(equiv("if b then fun x : A => x else u", "if b then fun y : A => y else u"));
    }

    #[test]
    fn matches() {
        let m = "match h as e in eq _ y return P y e with eq_refl => tt end";
        assert!(equiv(m, "match h as f in eq _ z return P z f with eq_refl => tt end"));
        assert!(!equiv(m, "match h as e in eq _ y with eq_refl => tt end"));
        let pairs = "match p, q with | pair a b, c => a | d, e => e end";
        assert!(equiv(pairs, "match p, q with | d, e => e | pair x y, c => x end"));
        assert!(!equiv(pairs, "match q, p with | pair a b, c => a | d, e => e end"));
        let nested = "match n with S k => fun x : A => k end";
        assert!(equiv(nested, "match n with S j => fun x : A => j end"));
        assert!(!equiv(nested, "match n with S j => fun y : A => j end"));
    }

    #[test]
    fn shadowing() {
        let t1 = parse("forall x : A, forall x : B, x").unwrap();
        let t2 = parse("forall y : A, forall x : B, x").unwrap();
        let t3 = parse("forall y : A, forall x : B, y").unwrap();
        assert!(t1.alpha_equiv(&t2));
        assert!(!t1.alpha_equiv(&t3));
        assert!(!Term::var("x").alpha_equiv(&Term::var("y")));
    }
}
