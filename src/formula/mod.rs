//! The consumption contract of the external tabular-formula layer.
//!
//! A tabular formula owns the tiers of a 3-CNF formula: each tier collects the [values](crate::structures::triplet::TripletValue) of every clause over one canonical variable triple.
//! The container, its union and completion procedures, and what exactly constitutes a valid route are all external to this crate --- only the surface through which such a layer consumes the triplet structures is declared here.
//!
//! In outline, an implementor:
//! - builds one [Triplet] per input clause;
//! - groups triplets into tiers by [canonical hash](crate::structures::triplet::TripletPermutation::canonical_hash);
//! - [transposes](crate::structures::triplet::Transposable) each triplet to its tier's presentation order before combining it with others;
//! - walks the [adjoin graph](crate::structures::triplet::TripletValue::adjoin_right_targets) across tiers sharing exactly one variable to evaluate routes.
//!
//! This crate never implements the trait.

use crate::{
    structures::{
        triplet::{Triplet, TripletPermutation, TripletValue},
        variable::Variable,
    },
    types::err,
};

/// A formula as a table of tiers, one per canonical variable triple.
pub trait TabularFormula {
    /// A tier: the collected values of every clause over one canonical variable triple.
    type Tier;

    /// The number of distinct variables in the formula.
    fn variable_count(&self) -> usize;

    /// The number of clauses in the formula.
    ///
    /// Use this method only if performance is not a goal.
    fn clause_count(&self) -> usize;

    /// An iterator over the tiers of the formula.
    fn tiers(&self) -> impl Iterator<Item = &Self::Tier>;

    /// The tier at `index`, if one exists.
    fn tier(&self, index: usize) -> Option<&Self::Tier>;

    /// The tier over the same variable set as `permutation`, if one exists.
    fn tier_for(&self, permutation: &TripletPermutation) -> Option<&Self::Tier>;

    /// Add a triplet to the formula, extending or creating the matching tier.
    fn add(&mut self, triplet: Triplet);

    /// Union `tier` with the tier over the same variable set, or add it as a fresh tier.
    fn union_or_add(&mut self, tier: Self::Tier);

    /// The presentation order of the formula's variables.
    fn variable_order(&self) -> &[Variable];

    /// Whether the formula has no tiers.
    fn is_empty(&self) -> bool;

    /// Complete the formula with respect to the given variable order.
    fn complete(&mut self, variables: &[Variable]) -> Result<(), err::FormulaError>;

    /// Every tier containing `variable`.
    fn tiers_for_variable(&self, variable: Variable) -> Vec<&Self::Tier>;

    /// Every tier containing both `first` and `second`.
    fn tiers_for_pair(&self, first: Variable, second: Variable) -> Vec<&Self::Tier>;

    /// Sort tiers by canonical name.
    fn sort_tiers(&mut self);

    /// Whether the given route of (inverse) triplet values is consistent with the formula.
    fn evaluate_route(&self, route: &[TripletValue]) -> bool;

    /// Whether every value of `tier` appears in the matching tier of the formula.
    fn contains_all_values_of(&self, tier: &Self::Tier) -> bool;
}
