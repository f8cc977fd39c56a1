//! Error types used in the library.
//!
//! - Every operation in this layer is a deterministic pure function of valid input, so any error indicates a defect in whatever upstream layer validates (or fails to validate) input.
//!   Errors propagate immediately, and nothing is retried or silently repaired.
//! - Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Triplet(TripletError),
    Formula(FormulaError),
}

/// Noted errors during construction or transposition of a triplet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TripletError {
    /// A variable named `0` --- variables are positive.
    ZeroVariable,

    /// Two of the three variables coincide.
    DuplicateVariable,

    /// A variable exceeds [VARIABLE_MAX](crate::structures::variable::VARIABLE_MAX).
    /// Packing the canonical name into 64 bits requires each variable fit in 21 bits.
    VariableTooLarge,

    /// A transposition target over a different variable set.
    ///
    /// Only raised when the target check is compiled in (debug assertions or the `diagnostics` feature).
    /// Otherwise, a disjoint target is undefined behaviour in the informal sense --- the caller was required to never supply one.
    DisjointTarget,
}

impl From<TripletError> for ErrorKind {
    fn from(e: TripletError) -> Self {
        ErrorKind::Triplet(e)
    }
}

/// Noted errors surfaced through the [TabularFormula](crate::formula::TabularFormula) contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// Completion was requested of a formula with no structure to complete.
    EmptyStructure,
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}
