//! Errors for terms that are malformed independently of their names.

use crate::Var;
use core::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// binder group without names
    EmptyBinder,
    /// pattern without head
    EmptyPattern,
    /// case clause without patterns
    EmptyCase,
    /// match without subjects
    NoSubjects,
    /// fixpoint without parameters
    NoParams,
    /// `{struct x}` where `x` is not a parameter
    StructArg(Var),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyBinder => write!(f, "binder group without names"),
            Self::EmptyPattern => write!(f, "empty pattern"),
            Self::EmptyCase => write!(f, "case clause without patterns"),
            Self::NoSubjects => write!(f, "match without subjects"),
            Self::NoParams => write!(f, "fixpoint without parameters"),
            Self::StructArg(x) => write!(f, "structural argument {} is not a parameter", x),
        }
    }
}
