//! Literals are variables paired with a (boolean) polarity.
//!
//! The integer form follows DIMACS convention: the magnitude names the variable and the sign carries the polarity, with negative integers denoting negation.
//! Zero is not a literal.
//!
//! ```rust
//! # use tier_sat::structures::literal::Literal;
//! let literal = Literal::try_from(-79).unwrap();
//!
//! assert_eq!(literal.variable(), 79);
//! assert!(!literal.polarity());
//!
//! assert_eq!(literal.negate(), Literal::new(79, true));
//! assert_eq!(literal.negate().as_int(), 79);
//! ```

use crate::{
    structures::variable::{Variable, VARIABLE_MAX},
    types::err,
};

/// A variable paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The variable of the literal.
    variable: Variable,

    /// The polarity of the literal, with `false` denoting negation.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a variable with a polarity.
    pub fn new(variable: Variable, polarity: bool) -> Self {
        Literal { variable, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    /// The variable of the literal.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal in its integer form, with sign indicating polarity.
    pub fn as_int(&self) -> i32 {
        match self.polarity {
            true => self.variable as i32,
            false => -(self.variable as i32),
        }
    }
}

impl TryFrom<i32> for Literal {
    type Error = err::TripletError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(err::TripletError::ZeroVariable);
        }
        if value.unsigned_abs() > VARIABLE_MAX {
            return Err(err::TripletError::VariableTooLarge);
        }
        Ok(Literal {
            variable: value.unsigned_abs(),
            polarity: value > 0,
        })
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}
