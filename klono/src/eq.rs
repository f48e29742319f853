//! Structural equality.
//!
//! Structural equality is name-sensitive,
//! except that case clauses compare only the heads of their patterns.

use crate::{Case, Match, RTerm, TermC};

impl PartialEq for RTerm {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || **self == **other
    }
}

impl Eq for RTerm {}

impl PartialEq for TermC {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TermC::Appl(t1, u1), TermC::Appl(t2, u2))
            | (TermC::Cast(t1, u1), TermC::Cast(t2, u2)) => t1 == t2 && u1 == u2,
            (TermC::Fun(a1, b1), TermC::Fun(a2, b2))
            | (TermC::Prod(a1, b1), TermC::Prod(a2, b2)) => a1 == a2 && b1 == b2,
            (TermC::Let(a1, d1, b1), TermC::Let(a2, d2, b2)) => a1 == a2 && d1 == d2 && b1 == b2,
            (TermC::Fix(f1), TermC::Fix(f2)) => f1 == f2,
            (TermC::Cond(c1), TermC::Cond(c2)) => c1 == c2,
            (TermC::Match(m1), TermC::Match(m2)) => m1 == m2,
            _ => false,
        }
    }
}

impl Eq for TermC {}

impl PartialEq for Case {
    fn eq(&self, other: &Self) -> bool {
        let mut heads = self.patterns.iter().zip(&other.patterns);
        self.patterns.len() == other.patterns.len()
            && heads.all(|(p1, p2)| p1.head() == p2.head())
            && self.body == other.body
    }
}

impl Eq for Case {}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.subjects == other.subjects
            && self.ret == other.ret
            && unordered_eq(&self.cases, &other.cases, Case::eq)
    }
}

impl Eq for Match {}

/// Return true if the elements of `l` can be paired one-to-one
/// with equal elements of `r`, disregarding order.
///
/// Equality is assumed to be an equivalence relation,
/// which makes greedy pairing complete.
pub(crate) fn unordered_eq<T, F>(l: &[T], r: &[T], eq: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    if l.len() != r.len() {
        return false;
    }
    let mut used = vec![false; r.len()];
    l.iter().all(|x| {
        let pos = r.iter().zip(&used).position(|(y, u)| !u && eq(x, y));
        pos.map(|i| used[i] = true).is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::unordered_eq;
    use crate::parse;

    fn eq(s1: &str, s2: &str) -> bool {
        parse(s1).unwrap() == parse(s2).unwrap()
    }

    #[test]
    fn positive() {
        assert!(eq("f (g x) y", "f (g x) y"));
        assert!(eq("fun x : A => b", "fun x : A => b"));
        assert!(eq("let x := d in b", "let x := d in b"));
        let m1 = "match n with O => a | S k => b end";
        let m2 = "match n with S j => b | O => a end";
        assert!(eq(m1, m2));
    }

    #[test]
    fn negative() {
        assert!(!eq("f x", "f y"));
        assert!(!eq("f x", "(f : x)"));
        assert!(!eq("forall x : A, b", "fun x : A => b"));
        assert!(!eq("fun x : A => x", "fun y : A => y"));
        assert!(!eq("fun x : A => b", "fun y : A => b"));
        assert!(!eq("let x := d in b", "let y := d in b"));
        assert!(!eq("let x : T := d in b", "let x := d in b"));
        assert!(!eq("Type@{u}", "Type@{v}"));
        assert!(!eq("Type", "Set"));
        assert!(!eq("if b then x else y", "if b as c then x else y"));
        assert!(!eq("match n with O => a end", "match n with O => a | S k => a end"));
        assert!(!eq("fix f (n : A) : T := f", "fix g (n : A) : T := g"));
    }

    #[test]
    fn unordered() {
        let eq = |x: &u8, y: &u8| x == y;
        assert!(unordered_eq(&[1, 2, 2], &[2, 1, 2], eq));
        assert!(!unordered_eq(&[1, 1, 2], &[2, 1, 2], eq));
        assert!(!unordered_eq(&[1], &[1, 1], eq));
    }
}
