//! The eight sign patterns over a canonically ordered variable triple, and their adjoin graph.
//!
//! A triplet value is a pattern of negations (negate-a?, negate-b?, negate-c?) over the three slots of an ordered triple.
//! As a clause, a value read against a triple denotes the one assignment the clause forbids: the assignment on which every literal is false.
//!
//! Each value is bijective with a 'tier key': starting from 1, the key is shifted left by 4 if the first slot is negated, by 2 if the second is, and by 1 if the third is.
//! This yields exactly the eight powers of two, with 128 stored as −128 in the 8-bit signed field used by tier bookkeeping.
//!
//! Values are wired into a fixed adjoin graph with out-degree 2 and in-degree 2 --- a De Bruijn graph over 3-bit patterns.
//! Sliding a three-variable window one position right along a chain of variables drops the first slot and admits a fresh third slot, so pattern `xyz` adjoins right to `yz0` and `yz1`, and symmetrically adjoins left from `0xy` and `1xy`.
//! Route evaluation across tiers sharing a variable walks this graph.
//!
//! The closed set of eight is an enum, so identity is tag equality, every value is `Copy`, and the value table is never duplicated nor mutated.

use crate::structures::literal::Literal;

/// A sign pattern over an ordered variable triple, named by its negation bits.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TripletValue {
    /// No slot negated.
    _000 = 0b000,

    /// The third slot negated.
    _001 = 0b001,

    /// The second slot negated.
    _010 = 0b010,

    /// The second and third slots negated.
    _011 = 0b011,

    /// The first slot negated.
    _100 = 0b100,

    /// The first and third slots negated.
    _101 = 0b101,

    /// The first and second slots negated.
    _110 = 0b110,

    /// Every slot negated.
    _111 = 0b111,
}

use TripletValue::*;

impl TripletValue {
    /// Every value, in pattern order.
    pub const ALL: [TripletValue; 8] = [_000, _001, _010, _011, _100, _101, _110, _111];

    /// The value with the given negation bits.
    pub fn new(negate_a: bool, negate_b: bool, negate_c: bool) -> Self {
        Self::from_pattern(
            ((negate_a as u8) << 2) | ((negate_b as u8) << 1) | (negate_c as u8),
        )
    }

    /// The value a clause of three literals forbids: a negated literal sets the corresponding bit.
    ///
    /// Well-formedness of the underlying triple is not re-validated here.
    pub fn from_literals(a: Literal, b: Literal, c: Literal) -> Self {
        Self::new(!a.polarity(), !b.polarity(), !c.polarity())
    }

    /// The value with the given tier key, if the key is one of the eight valid keys.
    pub fn from_tier_key(key: i8) -> Option<Self> {
        match key as u8 {
            1 => Some(_000),
            2 => Some(_001),
            4 => Some(_010),
            8 => Some(_011),
            16 => Some(_100),
            32 => Some(_101),
            64 => Some(_110),
            128 => Some(_111),
            _ => None,
        }
    }

    /// The negation bits as a 3-bit pattern, first slot highest.
    pub fn pattern(self) -> u8 {
        self as u8
    }

    /// Whether the first slot is negated.
    pub fn negates_a(self) -> bool {
        self.pattern() & 0b100 != 0
    }

    /// Whether the second slot is negated.
    pub fn negates_b(self) -> bool {
        self.pattern() & 0b010 != 0
    }

    /// Whether the third slot is negated.
    pub fn negates_c(self) -> bool {
        self.pattern() & 0b001 != 0
    }

    /// The tier key of the value: 1 shifted left by 4, 2, and 1 for each negated slot, with 128 as −128.
    pub fn tier_key(self) -> i8 {
        let mut key: u8 = 1;

        if self.negates_a() {
            key <<= 4
        }
        if self.negates_b() {
            key <<= 2
        }
        if self.negates_c() {
            key <<= 1
        }

        key as i8
    }

    /// The two values reachable when the third slot becomes the shared first slot of a following overlapping triple.
    pub fn adjoin_right_targets(self) -> [TripletValue; 2] {
        let shifted = (self.pattern() << 1) & 0b110;
        [Self::from_pattern(shifted), Self::from_pattern(shifted | 0b001)]
    }

    /// The two values from which this value is reachable, symmetric to [adjoin_right_targets](TripletValue::adjoin_right_targets).
    pub fn adjoin_left_sources(self) -> [TripletValue; 2] {
        let shifted = self.pattern() >> 1;
        [Self::from_pattern(shifted), Self::from_pattern(shifted | 0b100)]
    }

    /// The value with the first and second negation bits exchanged.
    pub fn swap_ab(self) -> Self {
        let pattern = self.pattern();
        Self::from_pattern(((pattern & 0b100) >> 1) | ((pattern & 0b010) << 1) | (pattern & 0b001))
    }

    /// The value with the first and third negation bits exchanged.
    pub fn swap_ac(self) -> Self {
        let pattern = self.pattern();
        Self::from_pattern(((pattern & 0b100) >> 2) | ((pattern & 0b001) << 2) | (pattern & 0b010))
    }

    /// The value with the second and third negation bits exchanged.
    pub fn swap_bc(self) -> Self {
        let pattern = self.pattern();
        Self::from_pattern(((pattern & 0b010) >> 1) | ((pattern & 0b001) << 1) | (pattern & 0b100))
    }

    fn from_pattern(pattern: u8) -> Self {
        match pattern & 0b111 {
            0b000 => _000,
            0b001 => _001,
            0b010 => _010,
            0b011 => _011,
            0b100 => _100,
            0b101 => _101,
            0b110 => _110,
            _ => _111,
        }
    }
}

impl std::fmt::Display for TripletValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03b}", self.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_keys() {
        let keys = TripletValue::ALL.map(|value| value.tier_key() as u8);
        assert_eq!(keys, [1, 2, 4, 8, 16, 32, 64, 128]);

        assert_eq!(_111.tier_key(), -128);
        assert_eq!(_100.tier_key(), 16);
    }

    #[test]
    fn key_bijection() {
        for value in TripletValue::ALL {
            assert_eq!(TripletValue::from_tier_key(value.tier_key()), Some(value));
        }

        assert_eq!(TripletValue::from_tier_key(0), None);
        assert_eq!(TripletValue::from_tier_key(3), None);
        assert_eq!(TripletValue::from_tier_key(-1), None);
    }

    #[test]
    fn adjoin_table() {
        // The fixed wiring, spelt out.
        assert_eq!(_000.adjoin_right_targets(), [_000, _001]);
        assert_eq!(_001.adjoin_right_targets(), [_010, _011]);
        assert_eq!(_010.adjoin_right_targets(), [_100, _101]);
        assert_eq!(_011.adjoin_right_targets(), [_110, _111]);
        assert_eq!(_100.adjoin_right_targets(), [_000, _001]);
        assert_eq!(_101.adjoin_right_targets(), [_010, _011]);
        assert_eq!(_110.adjoin_right_targets(), [_100, _101]);
        assert_eq!(_111.adjoin_right_targets(), [_110, _111]);

        assert_eq!(_000.adjoin_left_sources(), [_000, _100]);
        assert_eq!(_001.adjoin_left_sources(), [_000, _100]);
        assert_eq!(_010.adjoin_left_sources(), [_001, _101]);
        assert_eq!(_011.adjoin_left_sources(), [_001, _101]);
        assert_eq!(_100.adjoin_left_sources(), [_010, _110]);
        assert_eq!(_101.adjoin_left_sources(), [_010, _110]);
        assert_eq!(_110.adjoin_left_sources(), [_011, _111]);
        assert_eq!(_111.adjoin_left_sources(), [_011, _111]);
    }

    #[test]
    fn adjoin_mutual_consistency() {
        for value in TripletValue::ALL {
            for target in value.adjoin_right_targets() {
                assert!(target.adjoin_left_sources().contains(&value));
            }
            for source in value.adjoin_left_sources() {
                assert!(source.adjoin_right_targets().contains(&value));
            }
        }
    }

    #[test]
    fn render() {
        assert_eq!(_000.to_string(), "000");
        assert_eq!(_101.to_string(), "101");
        assert_eq!(TripletValue::new(true, false, false).to_string(), "100");
        assert_eq!(TripletValue::new(true, false, false).tier_key(), 16);
    }

    #[test]
    fn bit_swaps() {
        assert_eq!(_100.swap_ab(), _010);
        assert_eq!(_100.swap_ac(), _001);
        assert_eq!(_110.swap_bc(), _101);
        assert_eq!(_111.swap_ab(), _111);
        assert_eq!(_000.swap_ac(), _000);
    }
}
