//! A library of core structures for a tier-based decision procedure over 3-CNF boolean formulas.
//!
//! tier_sat provides the identity and sign-pattern algebra used to group three-literal clauses into 'tiers' --- collections of clauses over the same (unordered) triple of variables --- and to chain tiers which overlap on a variable.
//!
//! The library is built around two pieces:
//! - [Triplet permutations](structures::triplet::TripletPermutation), which make clauses over the same three variables comparable regardless of the order the clause was written in.
//!   A permutation records the presentation order of a variable triple together with a canonical (sorted) name and a collision-free 64-bit hash of that name, and supports in-place [transposition](structures::triplet::Transposable) to any required presentation order.
//! - [Triplet values](structures::triplet::value), the closed set of eight sign patterns over a canonically ordered triple, each bijective with a 'tier key' and wired into a fixed adjoin graph used to slide a three-variable window along a chain of overlapping triples.
//!
//! The container which owns tiers, unions them, and evaluates routes across the adjoin graph is an external collaborator.
//! Its consumption contract is declared as the [TabularFormula](formula::TabularFormula) trait, and nothing more: route semantics are not re-derived here.
//!
//! Parsing of clause input (e.g. DIMACS) is likewise external.
//! Whatever delivers triples must deliver well-formed ones: three distinct variables in `1..=2^21`, each with a polarity.
//!
//! # Examples
//!
//! + Group clauses into tiers by canonical hash.
//!
//! ```rust
//! # use std::collections::HashMap;
//! # use tier_sat::structures::triplet::TripletPermutation;
//! let clauses = [(3, 1, 2), (1, 2, 3), (2, 4, 7)];
//!
//! let mut tiers: HashMap<u64, Vec<TripletPermutation>> = HashMap::new();
//!
//! for (a, b, c) in clauses {
//!     let permutation = TripletPermutation::new(a, b, c).unwrap();
//!     tiers.entry(permutation.canonical_hash()).or_default().push(permutation);
//! }
//!
//! assert_eq!(tiers.len(), 2);
//! ```
//!
//! + Classify a clause by the sign pattern it forbids, then normalise its presentation order.
//!
//! ```rust
//! # use tier_sat::structures::literal::Literal;
//! # use tier_sat::structures::triplet::{Transposable, Triplet};
//! let not_five = Literal::try_from(-5).unwrap();
//! let six = Literal::try_from(6).unwrap();
//! let not_seven = Literal::try_from(-7).unwrap();
//!
//! let mut triplet = Triplet::new(not_five, six, not_seven).unwrap();
//! assert_eq!(triplet.value().to_string(), "101");
//! assert_eq!(triplet.value().tier_key(), 32);
//!
//! let hash = triplet.canonical_hash();
//!
//! triplet.transpose_to_names(6, 7, 5).unwrap();
//!
//! assert_eq!(triplet.abc(), [6, 7, 5]);
//! assert_eq!(triplet.value().to_string(), "011");
//! assert_eq!(triplet.canonical_hash(), hash);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made on rejected construction and during transposition, with targets listed in [misc::log].
//! No log implementation is provided.

#![allow(clippy::collapsible_else_if)]

pub mod formula;
pub mod misc;
pub mod structures;
pub mod types;
