//! Sequential goal processing.

use crate::{Clones, Error, Opt, Stage};
use klono::{search, Goal};

pub fn run(goals: Vec<(String, Goal)>, opt: &Opt) -> Result<Option<Clones>, Error> {
    use Stage::{Filter, Search};

    let cands = goals.into_iter().map(|(file, goal)| crate::candidate(file, goal));
    let cands = cands.collect::<Result<Vec<_>, _>>()?;
    if opt.omits(Filter) {
        return Ok(None);
    }

    let cands = if opt.keep_redundant {
        cands
    } else {
        search::drop_redundant(cands)
    };
    if opt.omits(Search) {
        return Ok(None);
    }

    let pairs = search::clones(&cands);
    Ok(Some(Clones { cands, pairs }))
}
