//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::sparse::Polynomial;

    // Strategy for generating (coefficient, exponent) pairs, zeros included
    fn raw_term() -> impl Strategy<Value = (i64, i64)> {
        (-100i64..100i64, 0i64..8i64)
    }

    fn raw_terms() -> impl Strategy<Value = Vec<(i64, i64)>> {
        proptest::collection::vec(raw_term(), 0..=8)
    }

    // Strategy for generating small polynomials (degree 0-7)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        raw_terms().prop_map(|terms| terms.into_iter().collect())
    }

    fn small_point() -> impl Strategy<Value = i64> {
        -4i64..=4i64
    }

    proptest! {
        // Normal form

        #[test]
        fn insertion_keeps_normal_form(terms in raw_terms()) {
            let p: Polynomial = terms.into_iter().collect();
            let exps: Vec<u32> = p.terms().map(|t| t.exp).collect();
            for pair in exps.windows(2) {
                prop_assert!(pair[0] > pair[1]);
            }
            prop_assert!(p.terms().all(|t| t.coeff != 0));
        }

        #[test]
        fn insertion_order_irrelevant(
            (terms, shuffled) in raw_terms().prop_flat_map(|t| (Just(t.clone()), Just(t).prop_shuffle()))
        ) {
            let a: Polynomial = terms.into_iter().collect();
            let b: Polynomial = shuffled.into_iter().collect();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn negative_exponents_ignored(terms in raw_terms(), c in -100i64..100i64, e in -50i64..0i64) {
            let mut p: Polynomial = terms.into_iter().collect();
            let before = p.clone();
            p.insert_term(c, e);
            prop_assert_eq!(p, before);
        }

        // Ring axioms

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).to_string(), b.add(&a).to_string());
        }

        #[test]
        fn add_matches_bulk_insertion(a in small_poly(), b in small_poly()) {
            let bulk: Polynomial = a
                .terms()
                .chain(b.terms())
                .map(|t| (t.coeff, i64::from(t.exp)))
                .collect();
            prop_assert_eq!(a.add(&b), bulk);
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_zero(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert!(a.mul(&zero).is_zero());
            prop_assert!(zero.mul(&a).is_zero());
        }

        #[test]
        fn mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&Polynomial::one()), a);
        }

        #[test]
        fn additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        // Degree properties

        #[test]
        fn mul_degree(a in small_poly(), b in small_poly()) {
            // Integer coefficients have no zero divisors
            let product = a.mul(&b);
            match (a.degree(), b.degree()) {
                (Some(da), Some(db)) => prop_assert_eq!(product.degree(), Some(da + db)),
                _ => prop_assert!(product.is_zero()),
            }
        }

        // Derivative

        #[test]
        fn derivative_linear(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).derivative(), a.derivative().add(&b.derivative()));
        }

        #[test]
        fn derivative_product_rule(a in small_poly(), b in small_poly()) {
            let left = a.mul(&b).derivative();
            let right = a.derivative().mul(&b).add(&a.mul(&b.derivative()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn derivative_of_constant(c in -100i64..100i64) {
            prop_assert_eq!(Polynomial::constant(c).derivative().to_string(), "0");
        }

        // Evaluation

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in small_point()) {
            prop_assert_eq!(a.add(&b).eval(x), a.eval(x) + b.eval(x));
        }

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in small_point()) {
            prop_assert_eq!(a.mul(&b).eval(x), a.eval(x) * b.eval(x));
        }

        // Checked variants agree when nothing overflows

        #[test]
        fn checked_matches_unchecked(a in small_poly(), b in small_poly(), x in small_point()) {
            prop_assert_eq!(a.checked_add(&b), Ok(a.add(&b)));
            prop_assert_eq!(a.checked_mul(&b), Ok(a.mul(&b)));
            prop_assert_eq!(a.checked_derivative(), Ok(a.derivative()));
            prop_assert_eq!(a.checked_eval(x), Ok(a.eval(x)));
        }
    }
}
