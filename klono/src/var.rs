//! Variables and sorts.

use alloc::sync::Arc;
use core::fmt::{self, Display};

/// Variable, identified by its name.
///
/// Constants, notation symbols and numerals are variables, too.
/// The wildcard `_` is a variable that never binds anything.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(Arc<str>);

const WILDCARD: &str = "_";

impl Var {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn wildcard() -> Self {
        Self::new(WILDCARD)
    }

    /// The `i`-th synthetic variable.
    ///
    /// Synthetic variables cannot be produced by the parser,
    /// so they never clash with the variables of a parsed term.
    pub fn synthetic(i: usize) -> Self {
        Self(Arc::from(alloc::format!("#{}", i)))
    }

    pub fn is_wildcard(&self) -> bool {
        &*self.0 == WILDCARD
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Sort, such as `Prop` or `Type@{u}`.
///
/// The universe annotation is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    pub name: alloc::string::String,
    pub annot: Option<alloc::string::String>,
}

impl Sort {
    pub fn new(name: &str, annot: Option<&str>) -> Self {
        Self {
            name: name.into(),
            annot: annot.map(Into::into),
        }
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.name.fmt(f)?;
        self.annot.iter().try_for_each(|a| a.fmt(f))
    }
}

#[test]
fn wildcard() {
    assert!(Var::wildcard().is_wildcard());
    assert!(!Var::new("x").is_wildcard());
    assert_ne!(Var::synthetic(0), Var::synthetic(1));
    assert!(Var::new("a") < Var::new("b"));
}
