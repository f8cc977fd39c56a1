/*!
(The representation of) a variable.

Variables are things with a name to which assigning a (boolean) value is of interest.

Each variable is a u32 *v* with `1 <= v <= 2^21`:
- `0` is excluded so the sign of an integer literal can carry polarity without ambiguity.
- Variables above 2^21 are excluded so the canonical name of a [triplet](crate::structures::triplet) packs into three disjoint 21-bit fields of a u64.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// A variable, aka. an 'atom'.
pub type Variable = u32;

/// The maximum instance of a variable.
pub const VARIABLE_MAX: Variable = 1 << 21;
