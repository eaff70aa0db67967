//! End-to-end scenarios through the public facade.

use polyterm::prelude::*;

fn build(terms: &[(i64, i64)]) -> Polynomial {
    let mut p = Polynomial::new();
    for &(coeff, exp) in terms {
        p.insert_term(coeff, exp);
    }
    p
}

#[test]
fn demonstration_sequence() {
    let p1 = build(&[(3, 4), (2, 2), (-1, 1), (5, 0)]);
    let p2 = build(&[(1, 4), (1, 0)]);
    let p3 = build(&[(2, 1)]);

    let sum = p1.add(&p2);
    let prod = sum.mul(&p3);
    let deriv = p1.derivative();

    assert_eq!(p1.to_string(), "3x^4 + 2x^2 - x + 5");
    assert_eq!(sum.to_string(), "4x^4 + 2x^2 - x + 6");
    assert_eq!(prod.to_string(), "8x^5 + 4x^3 - 2x^2 + 12x");
    assert_eq!(deriv.to_string(), "12x^3 + 4x - 1");
}

#[test]
fn operands_untouched_by_arithmetic() {
    let p1 = build(&[(3, 4), (2, 2), (-1, 1), (5, 0)]);
    let p2 = build(&[(1, 4), (1, 0)]);
    let snapshot = (p1.clone(), p2.clone());

    let _ = &p1 + &p2;
    let _ = &p1 * &p2;
    let _ = p1.derivative();

    assert_eq!((p1, p2), snapshot);
}

#[test]
fn hardened_insertion() {
    let mut p = Polynomial::<i64>::new();
    assert!(matches!(
        p.try_insert_term(1, -3),
        Err(PolyError::NegativeExponent { exponent: -3 })
    ));
    assert!(p.try_insert_term(4, 2).is_ok());
    assert_eq!(p.to_string(), "4x^2");
}

#[test]
fn custom_variable_and_width() {
    let p: Polynomial<i128> = [(1, 2), (-2, 1), (1, 0)].into_iter().collect();
    let options = RenderOptions::new().with_variable("y");
    assert_eq!(p.display_with(&options).to_string(), "y^2 - 2y + 1");
    assert_eq!(p.eval(1), 0);
}
