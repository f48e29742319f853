//! Common error type.

use crate::goal::Error as GoalError;
use crate::shape::Error as ShapeError;
use core::fmt::{self, Display};
use gallina_parse::Error as ParseError;

/// Common error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Parse(ParseError),
    Shape(ShapeError),
    Goal(GoalError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<ShapeError> for Error {
    fn from(err: ShapeError) -> Self {
        Self::Shape(err)
    }
}

impl From<GoalError> for Error {
    fn from(err: GoalError) -> Self {
        Self::Goal(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::Shape(e) => write!(f, "malformed term: {}", e),
            Self::Goal(e) => e.fmt(f),
        }
    }
}
