//! Search for cloned goals.

use crate::goal::{Error, Goal};
use crate::Term;
use alloc::string::String;
use alloc::vec::Vec;

/// Goal prepared for clone search.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// file that contains the goal
    pub file: String,
    pub goal: Goal,
    /// generalized goal
    pub term: Term,
}

impl Candidate {
    pub fn new(file: String, goal: Goal) -> Result<Self, Error> {
        let term = goal.generalize()?;
        Ok(Self { file, goal, term })
    }

    /// Return true if the candidates come from different theorems
    /// and their generalized goals are alpha-equivalent.
    pub fn is_clone_of(&self, other: &Self) -> bool {
        self.goal.theorem != other.goal.theorem && self.term.alpha_equiv(&other.term)
    }

    /// Return true if the candidate is obtained from another by stripping products.
    ///
    /// Such candidates are the same goals after introducing some hypotheses.
    pub fn is_redundant(&self, cands: &[Self]) -> bool {
        cands.iter().any(|c| c.term.is_prod_body(&self.term))
    }
}

impl Term {
    /// Return true if `tm` is obtained from `self` by stripping one or more products.
    pub fn is_prod_body(&self, tm: &Self) -> bool {
        self.prod_bodies().any(|body| body == tm)
    }
}

/// Remove redundant candidates.
pub fn drop_redundant(cands: Vec<Candidate>) -> Vec<Candidate> {
    let redundant: Vec<bool> = cands.iter().map(|c| c.is_redundant(&cands)).collect();
    retain(cands, redundant)
}

/// Keep only the candidates that are not marked as redundant.
pub fn retain(cands: Vec<Candidate>, redundant: Vec<bool>) -> Vec<Candidate> {
    let kept = cands.into_iter().zip(redundant).filter(|(_, r)| !r);
    let kept: Vec<_> = kept.map(|(c, _)| c).collect();
    info!("Kept {} non-redundant goals", kept.len());
    kept
}

/// Clone pairs `(i, j)` with `i < j`, in ascending order of `j`.
pub fn clones_of(cands: &[Candidate], i: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    let rest = cands.iter().enumerate().skip(i + 1);
    rest.filter(move |(_, c)| cands[i].is_clone_of(c))
        .map(move |(j, _)| (i, j))
}

/// All clone pairs `(i, j)` with `i < j`, in ascending order.
pub fn clones(cands: &[Candidate]) -> Vec<(usize, usize)> {
    (0..cands.len()).flat_map(|i| clones_of(cands, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cands(goals: &[&str]) -> Vec<Candidate> {
        let goal = |s: &&str| Goal::parse(s).unwrap();
        let cand = |g| Candidate::new("test.v".into(), g).unwrap();
        goals.iter().map(goal).map(cand).collect()
    }

    #[test]
    fn redundant() {
        let goals = [
            "Goal a (n : nat) : n = n.",
            "Goal a : forall n : nat, n = n.",
            "Goal b : forall (m : nat), m = m.",
            "Goal c (x : A) : P.",
        ];
        let kept = drop_redundant(cands(&goals));
        let theorems: Vec<_> = kept.iter().map(|c| c.goal.theorem.as_str()).collect();
        assert_eq!(theorems, ["a", "a", "b", "c"]);

        let goals = ["Goal a : forall (n : nat) (H : n = n), n = n.", "Goal a (n : nat) : n = n -> n = n."];
        let kept = drop_redundant(cands(&goals));
        assert_eq!(kept.len(), 2);

        let goals = ["Goal a : forall (n : nat), n = n.", "Goal b : nat = nat."];
        let kept = drop_redundant(cands(&goals));
        assert_eq!(kept.len(), 2);

        let goals = ["Goal a : forall (n : nat), P.", "Goal b : P."];
        let kept = drop_redundant(cands(&goals));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].goal.theorem, "a");
    }

    #[test]
    fn pairs() {
        let goals = [
            "Goal a (n : nat) : n + 0 = n.",
            "Goal a (m : nat) : m + 0 = m.",
            "Goal b (k : nat) : k + 0 = k.",
            "Goal c : True.",
            "Goal d (m : nat) : m + 0 = m.",
        ];
        let cands = cands(&goals);
        assert_eq!(clones(&cands), [(0, 2), (0, 4), (1, 2), (1, 4), (2, 4)]);
    }
}
