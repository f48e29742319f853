use klono::search::Candidate;
use std::fmt::{self, Display};

/// Clone pairs of candidates.
pub struct Clones {
    pub cands: Vec<Candidate>,
    /// indices of candidates in ascending order
    pub pairs: Vec<(usize, usize)>,
}

fn fmt_cand(c: &Candidate, n: usize, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "Goal {}: {}", n, c.term)?;
    writeln!(f, "\t Inside theorem: {}", c.goal.theorem)?;
    writeln!(f, "\t Inside file: {}", c.file)
}

impl Display for Clones {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, j) in &self.pairs {
            fmt_cand(&self.cands[*i], 1, f)?;
            fmt_cand(&self.cands[*j], 2, f)?;
            writeln!(f, "{}", "=".repeat(50))?;
        }
        Ok(())
    }
}

#[test]
fn report() {
    let file = crate::PathRead {
        path: "a.goals".into(),
        read: "Goal a (n : nat) : n = n. Goal b (m : nat) : m = m.".into(),
    };
    let goals = crate::goals(&file).unwrap();
    let opt = <crate::Opt as clap::Parser>::parse_from(["klonfind", "-"]);
    let clones = crate::seq::run(goals, &opt).unwrap().unwrap();
    let rule = "=".repeat(50);
    let expected = [
        "Goal 1: forall (n : nat), n = n",
        "\t Inside theorem: a",
        "\t Inside file: a.goals",
        "Goal 2: forall (m : nat), m = m",
        "\t Inside theorem: b",
        "\t Inside file: a.goals",
        rule.as_str(),
        "",
    ];
    assert_eq!(clones.to_string(), expected.join("\n"));
}
