//! Key structures, such as variables, literals, and triplets.
//!
//! # Formulas
//!
//! A formula 𝐅 in 3-CNF is a set of three-literal clauses, interpreted as the conjunction of those clauses.
//! Within this library a clause is represented as a [triplet](triplet::Triplet): the [permutation](triplet::TripletPermutation) of its three variables paired with the one [sign pattern](triplet::TripletValue) the clause forbids.
//! A disjunction over three literals excludes exactly one assignment to its variables --- the assignment on which every literal is false --- and the procedure this library supports works entirely in terms of those excluded patterns, grouped by canonical variable triple.

pub mod literal;
pub mod triplet;
pub mod variable;
