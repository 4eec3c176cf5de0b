//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{DivBy, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    // Digit strings well past 64 bits
    fn huge_int() -> impl Strategy<Value = Integer> {
        "-?[1-9][0-9]{20,45}".prop_map(|s| s.parse::<Integer>().unwrap())
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_reduced(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert!(r.denominator().is_positive());
            prop_assert!(r.numerator().gcd(r.denominator()).is_one());
        }

        #[test]
        fn construction_is_idempotent(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            let again = Rational::new(r.numerator().clone(), r.denominator().clone()).unwrap();
            prop_assert_eq!(again, r);
        }

        #[test]
        fn scaling_preserves_value(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            prop_assert_eq!(
                Rational::from_i64(n * k, d * k).unwrap(),
                Rational::from_i64(n, d).unwrap()
            );
        }

        #[test]
        fn huge_operands_reduce(n in huge_int(), d in huge_int()) {
            let scaled = (&n * &Integer::new(2)).div_by(&d * &Integer::new(2)).unwrap();
            prop_assert!(scaled.denominator().is_positive());
            prop_assert!(scaled.numerator().gcd(scaled.denominator()).is_one());
            prop_assert_eq!(scaled, n.div_by(d).unwrap());
        }

        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a + &b) + &c, a + (&b + &c));
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn additive_inverse(a in rational()) {
            prop_assert!((&a + &(-&a)).is_zero());
            prop_assert_eq!(&a - &a, Rational::zero());
        }

        #[test]
        fn multiplicative_inverse(a in non_zero_rational()) {
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn divide_undoes_multiply(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!((&(&a * &b) / &b).unwrap(), a);
        }

        #[test]
        fn divide_by_zero_fails(a in rational()) {
            prop_assert!(a.divide(&Rational::zero()).is_err());
        }

        // Ordering and text

        #[test]
        fn order_matches_difference_sign(a in rational(), b in rational()) {
            let sign = (&a - &b).signum();
            prop_assert_eq!(a.cmp(&b), sign.cmp(&0));
        }

        #[test]
        fn within_matches_range(x in rational(), lo in rational(), hi in rational()) {
            prop_assert_eq!(x.within(&lo, &hi), (lo..=hi).contains(&x));
        }

        #[test]
        fn display_parses_back(a in rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
        }
    }
}
