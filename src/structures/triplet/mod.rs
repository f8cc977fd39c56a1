//! Triplets: three-literal clauses over three distinct variables, comparable across presentation orders.
//!
//! A triplet pairs the [permutation](TripletPermutation) of its variables with the one [value](TripletValue) the clause forbids.
//! Grouping triplets into tiers and combining them is the business of the external [formula](crate::formula) layer; this module supplies the identity and reordering that make the grouping possible:
//!
//! - Permutations of the same variable set share a [canonical hash](TripletPermutation::canonical_hash), however the clauses were written.
//! - Any triplet may be [transposed](Transposable) in place to a tier's presentation order.
//!   Transposing a triplet carries the polarity bits of its value along with the variable names, so the forbidden assignment is preserved.
//!
//! One permutation or triplet is created per input clause, is mutated only by transposition, and lives and dies with its clause.

pub mod permutation;
pub mod transpose;
pub mod value;

pub use permutation::TripletPermutation;
pub use transpose::Transposable;
pub use value::TripletValue;

use crate::{
    structures::{literal::Literal, variable::Variable},
    types::err,
};

/// A three-literal clause: the permutation of its variables, paired with the sign pattern it forbids.
#[derive(Clone, Debug)]
pub struct Triplet {
    /// The variables of the clause, in presentation order.
    permutation: TripletPermutation,

    /// The assignment the clause forbids, read against the presentation order.
    value: TripletValue,
}

impl Triplet {
    /// The triplet of a clause given as three literals, in the order written.
    pub fn new(a: Literal, b: Literal, c: Literal) -> Result<Self, err::TripletError> {
        let permutation = TripletPermutation::new(a.variable(), b.variable(), c.variable())?;
        let value = TripletValue::from_literals(a, b, c);

        Ok(Triplet { permutation, value })
    }

    /// The permutation of the triplet's variables.
    pub fn permutation(&self) -> &TripletPermutation {
        &self.permutation
    }

    /// The sign pattern the clause forbids, read against the current presentation order.
    pub fn value(&self) -> TripletValue {
        self.value
    }

    /// The canonical hash of the variable set.
    pub fn canonical_hash(&self) -> u64 {
        self.permutation.canonical_hash()
    }

    /// Whether `other` ranges over exactly the same three variables.
    pub fn same_variables_as(&self, other: &TripletPermutation) -> bool {
        self.permutation.same_variables_as(other)
    }

    /// Whether `variable` is one of the three variables.
    pub fn has_variable(&self, variable: Variable) -> bool {
        self.permutation.has_variable(variable)
    }
}

impl Transposable for Triplet {
    fn abc(&self) -> [Variable; 3] {
        self.permutation.abc()
    }

    fn swap_ab(&mut self) {
        Transposable::swap_ab(&mut self.permutation);
        self.value = self.value.swap_ab();
    }

    fn swap_ac(&mut self) {
        Transposable::swap_ac(&mut self.permutation);
        self.value = self.value.swap_ac();
    }

    fn swap_bc(&mut self) {
        Transposable::swap_bc(&mut self.permutation);
        self.value = self.value.swap_bc();
    }
}

impl std::fmt::Display for Triplet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.permutation, self.value)
    }
}
