use crate::Stage;
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
/// Find cloned proof goals modulo alpha-equivalence
pub struct Opt {
    /// Perform only operations until (excluding) the given stage.
    ///
    /// Possible values are: generalize, filter, search.
    #[arg(long)]
    pub omit: Option<Stage>,

    /// Do not remove redundant goals
    ///
    /// A goal is redundant if it is the same as another goal
    /// after introducing some of its hypotheses.
    /// By default, redundant goals are not searched for clones.
    #[arg(long)]
    pub keep_redundant: bool,

    /// Process goals in parallel
    ///
    /// If this option is used, goals are generalized and compared in parallel.
    /// If this option is given with a number n, then
    /// maximally n tasks are concurrently executed.
    /// If this option is given without an extra argument, then
    /// the number of concurrently executed tasks is
    /// determined automatically from the number of CPUs.
    #[arg(long, short = 'j')]
    pub jobs: Option<Option<usize>>,

    /// Write clones to the given file instead of standard output
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Files to process (cumulative)
    ///
    /// Every file contains goals of the shape `Goal name (x : A) : t.`.
    /// To read from standard input, use "-" as file name.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

impl Opt {
    pub fn omits(&self, stage: Stage) -> bool {
        self.omit.as_ref().map_or(false, |omit| *omit <= stage)
    }
}

#[test]
fn omits() {
    let opt = Opt::parse_from(["klonfind", "--omit", "filter", "a.goals", "-j"]);
    assert!(!opt.omits(Stage::Generalize));
    assert!(opt.omits(Stage::Filter));
    assert!(opt.omits(Stage::Search));
    assert_eq!(opt.jobs, Some(None));

    let opt = Opt::parse_from(["klonfind", "-j4", "-o", "out.txt", "a.goals", "-"]);
    assert_eq!(opt.omit, None);
    assert_eq!(opt.jobs, Some(Some(4)));
    assert_eq!(opt.files.len(), 2);
    assert!(Opt::try_parse_from(["klonfind", "--omit", "check", "a.goals"]).is_err());
}
