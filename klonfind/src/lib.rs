//! Finder for cloned proof goals modulo alpha-equivalence.

mod error;
mod opt;
pub mod par;
mod path_read;
mod report;
pub mod seq;
mod stage;

pub use error::Error;
pub use opt::Opt;
pub use path_read::PathRead;
pub use report::Clones;
pub use stage::Stage;

use gallina_parse::GoalIter;
use klono::search::Candidate;
use klono::Goal;

/// Parse and scope all goals of a file.
pub fn goals(file: &PathRead) -> Result<Vec<(String, Goal)>, Error> {
    let err = |e: klono::Error| Error::Goal(file.path.clone(), e);
    let goals = GoalIter::new(&file.read).map(|goal| {
        let goal = goal.map_err(|e| err(e.into()))?;
        let goal = Goal::try_from(goal).map_err(|e| err(e.into()))?;
        log::debug!("Parsed goal of {}", goal.theorem);
        Ok((file.path.clone(), goal))
    });
    goals.collect()
}

/// Generalize a goal from the given file.
pub fn candidate(file: String, goal: Goal) -> Result<Candidate, Error> {
    let theorem = goal.theorem.clone();
    Candidate::new(file.clone(), goal).map_err(|e| {
        log::error!("Failed to generalize goal of {}", theorem);
        Error::Goal(file, e.into())
    })
}
