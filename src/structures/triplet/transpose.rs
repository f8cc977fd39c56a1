//! Transposition: in-place reordering of a triple's presentation to a required order.
//!
//! The routine is a manual specialisation of permutation application to exactly three slots, using at most three pairwise swaps and no structure beyond the slots themselves:
//! 1. If slot 1 does not hold the target's first variable, swap slot 1 with whichever of slots 2/3 holds it, slot 2 preferred.
//! 2. If slot 2 does not hold the target's second variable, swap slot 2 with slot 1 if slot 1 now holds it, and otherwise with slot 3.
//! 3. Re-check step 1's condition, as step 2 may have disturbed an already-correct slot 1, and correct it with one more swap if needed.
//!
//! The slot-2-before-slot-3 preference fixes which of several equal-result swap paths is taken, and is kept as-is rather than simplified.
//!
//! The routine is carried by the [Transposable] trait: an implementor supplies the three swap primitives, and in return may be transposed to any order over its variable set.
//! [Permutations](super::TripletPermutation) swap variable names alone, while [triplets](super::Triplet) swap the polarity bits of their value in lockstep --- the routine itself is indifferent.
//!
//! Targets are checked against the current variable set only when debug assertions are enabled or the `diagnostics` feature is active.
//! Otherwise callers must guarantee the target ranges over the same three variables.

use crate::{
    misc::log::targets::{self},
    structures::variable::Variable,
    types::err,
};

/// Something with three variable slots which may be pairwise swapped.
pub trait Transposable {
    /// The variables, in presentation order.
    fn abc(&self) -> [Variable; 3];

    /// Swap slots 1 and 2.
    fn swap_ab(&mut self);

    /// Swap slots 1 and 3.
    fn swap_ac(&mut self);

    /// Swap slots 2 and 3.
    fn swap_bc(&mut self);

    /// Reorder the slots so `target_a` is first and `target_b` second, by the fixed three-swap routine.
    ///
    /// The third slot follows from the other two, so no third argument is taken.
    /// No check is made that the targets are held --- use [transpose_to_names](Transposable::transpose_to_names) for the checked form.
    fn transpose(&mut self, target_a: Variable, target_b: Variable) {
        log::trace!(target: targets::TRANSPOSE, "{:?} to {target_a} {target_b} _", self.abc());

        if target_a != self.abc()[0] {
            if target_a == self.abc()[1] {
                self.swap_ab()
            } else {
                self.swap_ac()
            }
        }

        if target_b != self.abc()[1] {
            if target_b == self.abc()[0] {
                self.swap_ab()
            } else {
                self.swap_bc()
            }
        }

        if target_a != self.abc()[0] {
            if target_a == self.abc()[1] {
                self.swap_ab()
            } else {
                self.swap_ac()
            }
        }
    }

    /// Reorder the slots to present `a`, `b`, `c` in the order given.
    ///
    /// The target must range over exactly the current variable set.
    /// The check is compiled in only for diagnostic builds; its absence never makes an invalid target valid.
    fn transpose_to_names(
        &mut self,
        a: Variable,
        b: Variable,
        c: Variable,
    ) -> Result<(), err::TripletError> {
        if cfg!(any(debug_assertions, feature = "diagnostics")) {
            let abc = self.abc();
            if !(abc.contains(&a) && abc.contains(&b) && abc.contains(&c)) {
                log::error!(target: targets::TRANSPOSE, "{a} {b} {c} is not an order of {:?}", abc);
                return Err(err::TripletError::DisjointTarget);
            }
        }

        self.transpose(a, b);
        Ok(())
    }

    /// Reorder the slots to match the presentation order of `target`.
    fn transpose_to<T: Transposable>(&mut self, target: &T) -> Result<(), err::TripletError> {
        let [a, b, c] = target.abc();
        self.transpose_to_names(a, b, c)
    }

    /// Reorder the slots to match `target`, given as an ordered triple of names.
    fn transpose_to_order(&mut self, target: [Variable; 3]) -> Result<(), err::TripletError> {
        self.transpose_to_names(target[0], target[1], target[2])
    }
}
