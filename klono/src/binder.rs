//! Binder groups, fixpoints and conditionals.

use crate::shape::Error;
use crate::{Term, Var};
use alloc::vec::Vec;

/// Non-empty group of names sharing one type, such as `(x y : nat)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binder {
    pub names: Vec<Var>,
    pub ty: Term,
}

impl Binder {
    pub fn new(names: Vec<Var>, ty: Term) -> Result<Self, Error> {
        if names.is_empty() {
            return Err(Error::EmptyBinder);
        }
        Ok(Self { names, ty })
    }
}

/// Fixpoint `fix f (x : A) ... {struct x} : B := t`.
///
/// The self name `f` and all parameters are bound in the return type and in the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fix {
    pub name: Var,
    pub params: Vec<Binder>,
    pub struct_arg: Option<Var>,
    pub ty: Term,
    pub body: Term,
}

impl Fix {
    pub fn new(
        name: Var,
        params: Vec<Binder>,
        struct_arg: Option<Var>,
        ty: Term,
        body: Term,
    ) -> Result<Self, Error> {
        if params.is_empty() {
            return Err(Error::NoParams);
        }
        let fix = Self {
            name,
            params,
            struct_arg,
            ty,
            body,
        };
        match &fix.struct_arg {
            Some(x) if !fix.param_names().any(|p| p == x) => Err(Error::StructArg(x.clone())),
            _ => Ok(fix),
        }
    }

    /// Parameter names in declaration order, including wildcards.
    pub fn param_names(&self) -> impl Iterator<Item = &Var> {
        self.params.iter().flat_map(|b| b.names.iter())
    }

    /// Return true if `x` is the self name or a parameter.
    pub fn binds(&self, x: &Var) -> bool {
        &self.name == x || self.param_names().any(|p| p == x)
    }
}

/// Conditional `if b as x return P then t else u`.
///
/// The alias is bound in the motive only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cond {
    pub guard: Term,
    pub alias: Option<Var>,
    pub ret: Option<Term>,
    pub then: Term,
    pub els: Term,
}

#[test]
fn shapes() {
    let nat = Term::var("nat");
    assert_eq!(Binder::new(Vec::new(), nat.clone()), Err(Error::EmptyBinder));

    let x = Var::new("x");
    let params = vec![Binder::new(vec![x.clone()], nat.clone()).unwrap()];
    let fix = |s: &str| {
        let sa = Some(Var::new(s));
        Fix::new(Var::new("f"), params.clone(), sa, nat.clone(), nat.clone())
    };
    assert!(fix("x").is_ok());
    assert_eq!(fix("y"), Err(Error::StructArg(Var::new("y"))));

    let no_params = Fix::new(x.clone(), Vec::new(), None, nat.clone(), nat);
    assert_eq!(no_params, Err(Error::NoParams));
}
