use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

/// How tightly an operator binds. `Barrier` is reserved for `(`: it is below
/// every real operator, so operator comparisons never pop it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Barrier = 0,
    Additive = 1,
    Multiplicative = 2,
}

impl BindingPower {
    pub fn level(self) -> u8 {
        self as u8
    }
}

lazy_static! {
    pub static ref PRECEDENCE_LOOKUP: HashMap<&'static str, BindingPower> = {
        let mut map = HashMap::new();
        map.insert("(", BindingPower::Barrier);
        map.insert("+", BindingPower::Additive);
        map.insert("-", BindingPower::Additive);
        map.insert("*", BindingPower::Multiplicative);
        map.insert("/", BindingPower::Multiplicative);
        map.insert("%", BindingPower::Multiplicative);
        map
    };
}

/// Looks up the binding power of an operator or `(` token.
///
/// A miss means a token outside the operator set reached the operator stack.
pub fn binding_power(token: &Token) -> Result<BindingPower, Error> {
    PRECEDENCE_LOOKUP
        .get(token.value.as_str())
        .copied()
        .ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownOperator {
                    operator: token.value.clone(),
                },
                token.span.start.clone(),
            )
        })
}
