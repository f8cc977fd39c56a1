/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made on rejected triplet construction and during transposition.
These are intended to help locate validation defects in whatever layer delivers triples.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [triplet construction](crate::structures::triplet)
    pub const TRIPLET: &str = "triplet";

    /// Logs related to [transposition](crate::structures::triplet::transpose)
    pub const TRANSPOSE: &str = "transpose";
}
