//! Property-based tests for rational normalization and arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::{parse, Integer, Rational, RationalError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for an integer-like part with one foreign character spliced in
    fn part_with_non_digit() -> impl Strategy<Value = String> {
        "[+-]?[0-9]{0,3}[^0-9/+\\-][0-9]{0,3}"
    }

    fn is_invalid_format(input: &str) -> bool {
        matches!(parse(input), Err(RationalError::InvalidFormat { .. }))
    }

    fn raw(n: i64, d: i64) -> Rational {
        Rational::new(Integer::new(n), Integer::new(d)).unwrap()
    }

    fn hash_of(r: &Rational) -> u64 {
        let mut hasher = DefaultHasher::new();
        r.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        // Normal form

        #[test]
        fn normalize_idempotent(n in small_int(), d in non_zero_int()) {
            let once = raw(n, d).normalize();
            let twice = once.normalize();
            prop_assert_eq!(once.numerator(), twice.numerator());
            prop_assert_eq!(once.denominator(), twice.denominator());
        }

        #[test]
        fn normalize_positive_denominator(n in small_int(), d in non_zero_int()) {
            let r = raw(n, d).normalize();
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(!r.denominator().is_zero());
            if n == 0 {
                prop_assert!(r.denominator().is_one());
            }
        }

        #[test]
        fn normalize_coprime(n in small_int(), d in non_zero_int()) {
            let r = raw(n, d).normalize();
            prop_assert!(r.numerator().gcd(r.denominator()).is_one());
            prop_assert!(r.is_normalized());
        }

        #[test]
        fn normalize_preserves_value(n in small_int(), d in non_zero_int()) {
            let r = raw(n, d);
            let c = r.normalize();
            // n * d' == n' * d
            prop_assert_eq!(
                r.numerator() * c.denominator(),
                c.numerator() * r.denominator()
            );
        }

        #[test]
        fn scaled_pairs_are_equal(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            let a = raw(n, d);
            let b = raw(n * k, d * k);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }

        // Ordering

        #[test]
        fn ordering_matches_difference_sign(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = raw(num_a, den_a);
            let b = raw(num_b, den_b);
            let expected = (&a - &b).signum().cmp(&0);
            prop_assert_eq!(a.cmp(&b), expected);
        }

        #[test]
        fn ordering_consistent_with_eq(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = raw(num_a, den_a);
            let b = raw(num_b, den_b);
            prop_assert_eq!(a == b, a.cmp(&b).is_eq());
        }

        // Field axioms

        #[test]
        fn add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = raw(num_a, den_a);
            let b = raw(num_b, den_b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = raw(num_a, den_a);
            let b = raw(num_b, den_b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = raw(num_a, den_a);
            let b = raw(num_b, den_b);
            let c = raw(num_c, den_c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn sub_is_add_neg(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = raw(num_a, den_a);
            let b = raw(num_b, den_b);
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn div_undoes_mul(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in non_zero_int(),
            den_b in non_zero_int()
        ) {
            let a = raw(num_a, den_a);
            let b = raw(num_b, den_b);
            let product = &a * &b;
            prop_assert_eq!(product.checked_div(&b).unwrap(), a);
        }

        #[test]
        fn multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = raw(num, den);
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn results_are_normalized(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in non_zero_int(),
            den_b in non_zero_int()
        ) {
            let a = raw(num_a, den_a);
            let b = raw(num_b, den_b);
            prop_assert!((&a + &b).is_normalized());
            prop_assert!((&a - &b).is_normalized());
            prop_assert!((&a * &b).is_normalized());
            prop_assert!((&a / &b).is_normalized());
            prop_assert!((-&a).is_normalized());
        }

        // Display

        #[test]
        fn display_parse_round_trip(n in small_int(), d in non_zero_int()) {
            let r = raw(n, d);
            let text = r.to_string();
            prop_assert!(!text.ends_with("/1"));
            prop_assert_eq!(parse(&text).unwrap(), r);
        }

        // Parsing

        #[test]
        fn parse_rejects_non_digit_numerator(bad in part_with_non_digit(), d in non_zero_int()) {
            let input = format!("{bad}/{d}");
            prop_assert!(is_invalid_format(&input), "accepted {:?}", input);
        }

        #[test]
        fn parse_rejects_non_digit_denominator(n in small_int(), bad in part_with_non_digit()) {
            let input = format!("{n}/{bad}");
            prop_assert!(is_invalid_format(&input), "accepted {:?}", input);
            prop_assert!(is_invalid_format(&bad), "accepted {:?}", bad);
        }
    }
}
