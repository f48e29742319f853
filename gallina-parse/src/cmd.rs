//! Goal commands.

use crate::parse::{Error, Parse};
use crate::term::{Binder, Term};
use crate::{Spanned, Token};
use alloc::vec::Vec;
use core::iter::Peekable;

/// A goal as produced by a goal extractor.
///
/// Example: `Goal plus_comm (n m : nat) : n + m = m + n.`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goal<S> {
    /// name of the theorem in whose proof the goal occurs
    pub theorem: S,
    /// local context
    pub hyps: Vec<Binder<S>>,
    /// conclusion
    pub concl: Term<S>,
}

/// Iterator over the goals in a string.
///
/// After a goal fails to parse, the iterator resumes after the next period.
pub struct GoalIter<I: Iterator> {
    iter: Peekable<I>,
}

impl<'s> GoalIter<crate::Lex<'s>> {
    pub fn new(s: &'s str) -> Self {
        let iter = crate::lex(s).peekable();
        Self { iter }
    }
}

impl<'s, I: Iterator<Item = Spanned<'s>>> Iterator for GoalIter<I> {
    type Item = Result<Goal<&'s str>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.peek()?;
        let goal = Goal::parse(&mut self.iter);
        if goal.is_err() {
            // skip the remainder of the erroneous command
            for (tok, _) in &mut self.iter {
                if tok == Token::Dot {
                    break;
                }
            }
        }
        Some(goal)
    }
}

#[test]
fn positive() -> Result<(), Error> {
    let goal = Goal::parse_str("Goal plus_comm (n m : nat) : n + m = m + n.")?;
    assert_eq!(goal.theorem, "plus_comm");
    assert_eq!(goal.hyps[0].names, ["n", "m"]);
    Goal::parse_str("Goal Nat.le_refl : forall n : nat, n <= n.")?;
    Goal::parse_str("Goal t (A : Type) (l : list A) : l ++ nil = l.")?;
    Ok(())
}

#[test]
fn iterate() {
    use crate::ErrorKind;
    let goals = "Goal a : True.\nGoal b (x : : nat.\nGoal c (x : nat) : x = x.";
    let goals: Vec<_> = GoalIter::new(goals).collect();
    assert_eq!(goals.len(), 3);
    assert!(goals[0].is_ok());
    assert_eq!(goals[1].as_ref().unwrap_err().kind, ErrorKind::ExpectedTerm);
    assert_eq!(goals[2].as_ref().map(|g| g.theorem), Ok("c"));
}
