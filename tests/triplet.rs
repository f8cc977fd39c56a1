use tier_sat::structures::literal::Literal;
use tier_sat::structures::triplet::{Transposable, Triplet, TripletValue};
use tier_sat::structures::variable::Variable;
use tier_sat::types::err;

mod literals {
    use super::*;

    #[test]
    fn signed_form() {
        let literal = Literal::try_from(-42).unwrap();

        assert_eq!(literal.variable(), 42);
        assert!(!literal.polarity());
        assert_eq!(literal.as_int(), -42);
        assert_eq!(literal.negate().as_int(), 42);
    }

    #[test]
    fn rejections() {
        assert_eq!(
            Literal::try_from(0).unwrap_err(),
            err::TripletError::ZeroVariable
        );
        assert_eq!(
            Literal::try_from((1 << 21) + 1).unwrap_err(),
            err::TripletError::VariableTooLarge
        );
        assert_eq!(
            Literal::try_from(-((1 << 21) + 1)).unwrap_err(),
            err::TripletError::VariableTooLarge
        );
    }
}

mod classification {
    use super::*;

    #[test]
    fn value_and_key_agree() {
        // Every polarity pattern over the clause (1, 2, 3).
        for pattern in 0_u8..8 {
            let a = Literal::new(1, pattern & 0b100 == 0);
            let b = Literal::new(2, pattern & 0b010 == 0);
            let c = Literal::new(3, pattern & 0b001 == 0);

            let value = TripletValue::from_literals(a, b, c);

            assert_eq!(value.pattern(), pattern);
            assert_eq!(TripletValue::from_tier_key(value.tier_key()), Some(value));
        }
    }

    #[test]
    fn forbidden_assignment() {
        // (¬5 ∨ 6 ∨ ¬7) forbids 5 ↦ true, 6 ↦ false, 7 ↦ true.
        let triplet = triplet_of(&[-5, 6, -7]);

        assert_eq!(triplet.value(), TripletValue::_101);
        assert_eq!(triplet.value().tier_key(), 32);
    }
}

mod transposition {
    use super::*;

    #[test]
    fn value_follows_names() {
        let targets = [
            [5, 6, 7],
            [5, 7, 6],
            [6, 5, 7],
            [6, 7, 5],
            [7, 5, 6],
            [7, 6, 5],
        ];

        for target in targets {
            let mut triplet = triplet_of(&[-5, 6, -7]);
            let negations = negation_map(&triplet);
            let hash = triplet.canonical_hash();

            assert!(triplet.transpose_to_order(target).is_ok());

            assert_eq!(triplet.abc(), target);
            assert_eq!(triplet.canonical_hash(), hash);
            // The forbidden assignment is unchanged, slot by slot.
            assert_eq!(negation_map(&triplet), negations);
        }
    }

    #[test]
    fn tier_normalisation() {
        // Two writings of clauses over one variable set, normalised to a shared order.
        let mut first = triplet_of(&[3, -1, 2]);
        let second = triplet_of(&[1, 2, -3]);

        assert!(first.same_variables_as(second.permutation()));

        assert!(first.transpose_to(second.permutation()).is_ok());

        assert_eq!(first.abc(), second.abc());
        // ¬1 moved to the first slot, so the forbidden pattern reads 100 in the shared order.
        assert_eq!(first.value(), TripletValue::_100);
        assert_eq!(second.value(), TripletValue::_001);
    }

    /// The negated-or-not status of each variable, keyed by variable rather than slot.
    fn negation_map(triplet: &Triplet) -> Vec<(Variable, bool)> {
        let [a, b, c] = triplet.abc();
        let value = triplet.value();

        let mut map = vec![
            (a, value.negates_a()),
            (b, value.negates_b()),
            (c, value.negates_c()),
        ];
        map.sort_unstable();
        map
    }
}

fn triplet_of(ints: &[i32; 3]) -> Triplet {
    let a = Literal::try_from(ints[0]).unwrap();
    let b = Literal::try_from(ints[1]).unwrap();
    let c = Literal::try_from(ints[2]).unwrap();

    Triplet::new(a, b, c).unwrap()
}
