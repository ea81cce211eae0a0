use approx::assert_relative_eq;

use crate::fixed::{isqrt, Fixed, Fixed48};

// ============================================================================
// Construction and conversion
// ============================================================================

#[test]
fn test_from_ratio_and_int() {
    assert_eq!(Fixed::from_ratio(1, 2).to_f64(), 0.5);
    assert_eq!(Fixed::from_int(7).to_i32(), 7);
    assert_eq!(Fixed::from_ratio(-3, 2).to_i32(), -2, "to_i32 floors");
    assert_eq!(Fixed::ONE, Fixed::from_int(1));
}

#[test]
fn test_pi_approximation() {
    assert_relative_eq!(Fixed::PI.to_f64(), std::f64::consts::PI, epsilon = 1e-6);
    assert_relative_eq!(Fixed48::PI.to_f64(), std::f64::consts::PI, epsilon = 1e-6);
}

#[test]
fn test_precision_conversion() {
    let x = Fixed::from_ratio(5, 8);
    let wide: Fixed48 = x.convert();
    assert_eq!(wide.to_f64(), 0.625);
    let back: Fixed = wide.convert();
    assert_eq!(back, x);
}

#[test]
fn test_quotient_keeps_small_magnitudes() {
    let num = Fixed::from_int(1);
    let den = Fixed::from_int(998_994);
    let narrow = num / den;
    let wide = Fixed48::quotient(num, den);
    assert!(wide.raw() > narrow.raw() << 15, "widened quotient carries extra bits");
    assert_relative_eq!(wide.to_f64(), 1.0 / 998_994.0, max_relative = 1e-6);
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_basic_arithmetic() {
    let a = Fixed::from_ratio(3, 2);
    let b = Fixed::from_ratio(1, 4);
    assert_eq!((a + b).to_f64(), 1.75);
    assert_eq!((a - b).to_f64(), 1.25);
    assert_eq!((a * b).to_f64(), 0.375);
    assert_eq!((a / b).to_f64(), 6.0);
    assert_eq!((a * 4).to_f64(), 6.0);
    assert_eq!((4 * a).to_f64(), 6.0);
    assert_eq!((a >> 1).to_f64(), 0.75);
    assert_eq!((-a).to_f64(), -1.5);
}

#[test]
fn test_compound_assignment() {
    let mut a = Fixed::from_ratio(3, 4);
    a *= 2;
    assert_eq!(a, Fixed::from_ratio(3, 2));
    a *= Fixed::from_ratio(1, 2);
    assert_eq!(a, Fixed::from_ratio(3, 4));
    a += Fixed::ONE;
    a -= Fixed::from_ratio(1, 4);
    assert_eq!(a, Fixed::from_ratio(3, 2));
    a /= Fixed::from_int(3);
    assert_eq!(a, Fixed::from_ratio(1, 2));

    let mut big = Fixed::MAX >> 1;
    big *= 4;
    assert_eq!(big, Fixed::MAX);
}

#[test]
fn test_multiplication_saturates_instead_of_wrapping() {
    let big = Fixed::from_int(1 << 30);
    assert_eq!(big * big, Fixed::MAX);
    assert_eq!(-big * big, Fixed::MIN);
    assert_eq!(Fixed::MAX + Fixed::ONE, Fixed::MAX);
}

#[test]
fn test_division_by_zero_saturates() {
    assert_eq!(Fixed::ONE / Fixed::ZERO, Fixed::MAX);
    assert_eq!(-Fixed::ONE / Fixed::ZERO, Fixed::MIN);
    assert_eq!(Fixed::ZERO / Fixed::ZERO, Fixed::ZERO);
}

#[test]
fn test_operations_are_bit_reproducible() {
    let run = || {
        let mut acc = Fixed::from_ratio(17, 3);
        for i in 1..50 {
            acc = (acc * Fixed::from_ratio(i, 7) + Fixed::from_int(i)) / Fixed::from_ratio(i + 1, 5);
            acc = acc.sqrt() + acc.cbrt();
        }
        acc.raw()
    };
    assert_eq!(run(), run());
}

// ============================================================================
// Roots
// ============================================================================

#[test]
fn test_sqrt() {
    assert_eq!(Fixed::from_int(16).sqrt(), Fixed::from_int(4));
    assert_relative_eq!(Fixed::from_int(2).sqrt().to_f64(), 2f64.sqrt(), epsilon = 1e-9);
    assert_eq!(Fixed::from_int(-4).sqrt(), Fixed::ZERO);
}

#[test]
fn test_cbrt() {
    assert_relative_eq!(Fixed::from_int(27).cbrt().to_f64(), 3.0, epsilon = 1e-8);
    assert_relative_eq!(Fixed::from_int(1000).cbrt().to_f64(), 10.0, epsilon = 1e-7);
    assert_relative_eq!(Fixed::from_ratio(1, 8).cbrt().to_f64(), 0.5, epsilon = 1e-8);
    assert_relative_eq!(Fixed::from_int(-8).cbrt().to_f64(), -2.0, epsilon = 1e-8);
    assert_eq!(Fixed::ZERO.cbrt(), Fixed::ZERO);
}

#[test]
fn test_cbrt_of_tiny_wide_value() {
    let x = Fixed48::from_ratio(1, 1_000_000);
    assert_relative_eq!(x.cbrt().to_f64(), 0.01, max_relative = 1e-6);
}

#[test]
fn test_isqrt() {
    assert_eq!(isqrt(0), 0);
    assert_eq!(isqrt(1), 1);
    assert_eq!(isqrt(15), 3);
    assert_eq!(isqrt(16), 4);
    assert_eq!(isqrt(u64::MAX), 4_294_967_295);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_deserialize_number_and_ratio() {
    let from_number: Fixed = serde_json::from_str("0.25").unwrap();
    let from_int: Fixed = serde_json::from_str("3").unwrap();
    let from_ratio: Fixed = serde_json::from_str("[1, 3]").unwrap();
    assert_eq!(from_number, Fixed::from_ratio(1, 4));
    assert_eq!(from_int, Fixed::from_int(3));
    assert_eq!(from_ratio, Fixed::from_ratio(1, 3));
    assert!(serde_json::from_str::<Fixed>("[1, 0]").is_err());
}
