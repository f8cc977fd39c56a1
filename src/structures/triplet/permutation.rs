//! The permutation of a variable triple: presentation order over a fixed three-variable set, with a canonical name and hash.
//!
//! Two clauses belong to the same tier exactly when their variable triples agree as sets, regardless of the order the clauses were written in.
//! A permutation therefore keeps two views of its triple:
//! - The presentation order `abc`, which transposition rearranges.
//! - The canonical name, the triple sorted ascending, fixed at construction and packed into a 64-bit hash.
//!
//! The packing is injective over valid triples: each variable fits in 21 bits, and the three sorted variables occupy disjoint fields of the hash.
//! So two permutations have equal hashes iff they range over the same variables, and [same_variables_as](TripletPermutation::same_variables_as) is a single integer comparison.

use crate::{
    misc::log::targets::{self},
    structures::{
        triplet::transpose::Transposable,
        variable::{Variable, VARIABLE_MAX},
    },
    types::err,
};

/// A fixed three-variable set in some presentation order.
#[derive(Clone, Debug)]
pub struct TripletPermutation {
    /// The variables, in presentation order.
    abc: [Variable; 3],

    /// The variables, sorted ascending.
    canonical_name: [Variable; 3],

    /// The canonical name packed as three disjoint 21-bit fields, low bits smallest.
    canonical_hash: u64,
}

impl TripletPermutation {
    /// A permutation presenting `a`, `b`, `c` in the order given.
    ///
    /// The variables must be distinct, non-zero, and at most [VARIABLE_MAX].
    pub fn new(a: Variable, b: Variable, c: Variable) -> Result<Self, err::TripletError> {
        if a == 0 || b == 0 || c == 0 {
            log::error!(target: targets::TRIPLET, "Zero variable in {a} {b} {c}");
            return Err(err::TripletError::ZeroVariable);
        }

        if a == b || b == c || a == c {
            log::error!(target: targets::TRIPLET, "Duplicate variable in {a} {b} {c}");
            return Err(err::TripletError::DuplicateVariable);
        }

        if a > VARIABLE_MAX || b > VARIABLE_MAX || c > VARIABLE_MAX {
            log::error!(target: targets::TRIPLET, "Variable over {VARIABLE_MAX} in {a} {b} {c}");
            return Err(err::TripletError::VariableTooLarge);
        }

        let canonical_name = Self::canonicalize(a, b, c);

        let canonical_hash = ((canonical_name[2] as u64) << 42)
            | ((canonical_name[1] as u64) << 21)
            | (canonical_name[0] as u64);

        Ok(TripletPermutation {
            abc: [a, b, c],
            canonical_name,
            canonical_hash,
        })
    }

    /// The ascending order of three distinct variables, by a fixed decision tree over the pairwise comparisons.
    ///
    /// No general sort, and no tie cases --- distinctness is guaranteed by construction.
    fn canonicalize(a: Variable, b: Variable, c: Variable) -> [Variable; 3] {
        if a < b {
            if b < c {
                [a, b, c]
            } else if c < a {
                [c, a, b]
            } else {
                [a, c, b]
            }
        } else {
            if c < b {
                [c, b, a]
            } else if a < c {
                [b, a, c]
            } else {
                [b, c, a]
            }
        }
    }

    /// The variables, in presentation order.
    pub fn abc(&self) -> [Variable; 3] {
        self.abc
    }

    /// The variables, sorted ascending.
    pub fn canonical_name(&self) -> [Variable; 3] {
        self.canonical_name
    }

    /// The canonical name as a 64-bit key, identical for every presentation order of the same set and distinct for any other set.
    pub fn canonical_hash(&self) -> u64 {
        self.canonical_hash
    }

    /// Whether `other` ranges over exactly the same three variables.
    pub fn same_variables_as(&self, other: &TripletPermutation) -> bool {
        self.canonical_hash == other.canonical_hash
    }

    /// Whether `variable` is one of the three variables.
    pub fn has_variable(&self, variable: Variable) -> bool {
        self.abc[0] == variable || self.abc[1] == variable || self.abc[2] == variable
    }
}

impl Transposable for TripletPermutation {
    fn abc(&self) -> [Variable; 3] {
        self.abc
    }

    fn swap_ab(&mut self) {
        self.abc.swap(0, 1);
    }

    fn swap_ac(&mut self) {
        self.abc.swap(0, 2);
    }

    fn swap_bc(&mut self) {
        self.abc.swap(1, 2);
    }
}

impl std::fmt::Display for TripletPermutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.abc[0], self.abc[1], self.abc[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order() {
        let orderings = [
            (1, 2, 3),
            (1, 3, 2),
            (2, 1, 3),
            (2, 3, 1),
            (3, 1, 2),
            (3, 2, 1),
        ];

        for (a, b, c) in orderings {
            let permutation = TripletPermutation::new(a, b, c).unwrap();
            assert_eq!(permutation.canonical_name(), [1, 2, 3]);
            assert_eq!(permutation.abc(), [a, b, c]);
        }
    }

    #[test]
    fn hash_packing() {
        let permutation = TripletPermutation::new(3, 1, 2).unwrap();
        assert_eq!(permutation.canonical_hash(), (3_u64 << 42) | (2 << 21) | 1);
    }

    #[test]
    fn rejections() {
        assert_eq!(
            TripletPermutation::new(0, 1, 2).unwrap_err(),
            err::TripletError::ZeroVariable
        );
        assert_eq!(
            TripletPermutation::new(1, 1, 2).unwrap_err(),
            err::TripletError::DuplicateVariable
        );
        assert_eq!(
            TripletPermutation::new(1, 2, VARIABLE_MAX + 1).unwrap_err(),
            err::TripletError::VariableTooLarge
        );
        assert!(TripletPermutation::new(1, 2, VARIABLE_MAX).is_ok());
    }
}
