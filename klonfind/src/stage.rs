/// A stage in the processing of goals.
///
/// This is useful to omit certain parts of goal processing.
/// Omitting one stage also omits all stages after it,
/// i.e. all stages greater than the stage.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Quantification of goals over their hypotheses
    Generalize,
    /// Removal of goals that are the same as others after introducing hypotheses
    Filter,
    /// Search for clone pairs
    Search,
}

impl core::str::FromStr for Stage {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generalize" => Ok(Self::Generalize),
            "filter" => Ok(Self::Filter),
            "search" => Ok(Self::Search),
            _ => Err("unknown stage: ".to_owned() + s),
        }
    }
}
