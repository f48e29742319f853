//! Parallel goal processing.

use crate::{Clones, Error, Opt, Stage};
use klono::search::{self, Candidate};
use klono::Goal;
use rayon::iter::{IntoParallelIterator, IntoParallelRefIterator, ParallelIterator};

fn drop_redundant(cands: Vec<Candidate>) -> Vec<Candidate> {
    let redundant = cands.par_iter().map(|c| c.is_redundant(&cands)).collect();
    search::retain(cands, redundant)
}

fn clones(cands: &[Candidate]) -> Vec<(usize, usize)> {
    let pairs = (0..cands.len()).into_par_iter();
    let mut pairs: Vec<_> = pairs.flat_map_iter(|i| search::clones_of(cands, i)).collect();
    pairs.sort_unstable();
    pairs
}

pub fn run(goals: Vec<(String, Goal)>, opt: &Opt) -> Result<Option<Clones>, Error> {
    use Stage::{Filter, Search};

    let cands = goals.into_par_iter().map(|(file, goal)| crate::candidate(file, goal));
    let cands = cands.collect::<Result<Vec<_>, _>>()?;
    if opt.omits(Filter) {
        return Ok(None);
    }

    let cands = if opt.keep_redundant {
        cands
    } else {
        drop_redundant(cands)
    };
    if opt.omits(Search) {
        return Ok(None);
    }

    let pairs = clones(&cands);
    Ok(Some(Clones { cands, pairs }))
}

#[test]
fn same_as_seq() {
    use clap::Parser;
    let goals = include_str!("../../demos/arith.goals");
    let file = crate::PathRead {
        path: "arith.goals".into(),
        read: goals.into(),
    };
    let goals = crate::goals(&file).unwrap();
    let keep = ["klonfind", "--keep-redundant", "-j", "--", "-"];
    for args in [&["klonfind", "-j", "--", "-"][..], &keep[..]] {
        let opt = Opt::parse_from(args);
        let par = run(goals.clone(), &opt).unwrap().unwrap();
        let seq = crate::seq::run(goals.clone(), &opt).unwrap().unwrap();
        assert_eq!(par.pairs, seq.pairs);
        assert!(!par.pairs.is_empty());
    }
}
