//! Epsilon-aware comparison primitives.
//!
//! Everything in the interval engine that compares two floats goes
//! through a [`Tolerance`]. Values closer together than the tolerance's
//! epsilon are considered equal, and NaN is never equal to (or
//! ordered against) anything.

use crate::error::InvalidEpsilonError;
use crate::util::Sign;

use std::cmp::Ordering;

/// The epsilon used by [`Tolerance::STANDARD`].
pub const EPSILON: f64 = 1e-10;

/// A comparison policy: two floats are equal if their distance is
/// strictly less than the epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
  epsilon: f64,
}

impl Tolerance {
  pub const STANDARD: Tolerance = Tolerance { epsilon: EPSILON };

  /// Constructs a tolerance with a custom epsilon, which must be
  /// finite and positive.
  pub fn new(epsilon: f64) -> Result<Self, InvalidEpsilonError> {
    if epsilon.is_finite() && epsilon > 0.0 {
      Ok(Self { epsilon })
    } else {
      Err(InvalidEpsilonError::new(epsilon))
    }
  }

  pub fn epsilon(self) -> f64 {
    self.epsilon
  }

  /// Returns false if either argument is NaN.
  pub fn approx_eq(self, a: f64, b: f64) -> bool {
    (a - b).abs() < self.epsilon
  }

  pub fn approx_le(self, a: f64, b: f64) -> bool {
    a < b || self.approx_eq(a, b)
  }

  pub fn approx_ge(self, a: f64, b: f64) -> bool {
    a > b || self.approx_eq(a, b)
  }

  pub fn is_zero(self, a: f64) -> bool {
    self.approx_eq(a, 0.0)
  }

  /// The sign of `a`, where anything within epsilon of zero (and NaN)
  /// counts as zero.
  pub fn sign(self, a: f64) -> Ordering {
    if a.is_nan() || self.is_zero(a) {
      Ordering::Equal
    } else if a < 0.0 {
      Ordering::Less
    } else {
      Ordering::Greater
    }
  }

  /// True if `a` and `b` are on strictly opposite sides of zero.
  pub fn opposite_signs(self, a: f64, b: f64) -> bool {
    matches!(
      (self.sign(a), self.sign(b)),
      (Ordering::Less, Ordering::Greater) | (Ordering::Greater, Ordering::Less),
    )
  }
}

impl Default for Tolerance {
  fn default() -> Self {
    Self::STANDARD
  }
}

pub fn is_signed_infinity(x: f64, sign: Sign) -> bool {
  x == sign.infinity()
}

/// Minimum of two floats in which NaN acts as an identity rather than
/// as a value, so a fold starting from NaN behaves like a fold over an
/// empty accumulator.
pub fn nan_aware_min(a: f64, b: f64) -> f64 {
  if a.is_nan() {
    b
  } else if b.is_nan() || a < b {
    a
  } else {
    b
  }
}

/// See [`nan_aware_min`].
pub fn nan_aware_max(a: f64, b: f64) -> f64 {
  if a.is_nan() {
    b
  } else if b.is_nan() || a > b {
    a
  } else {
    b
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_approx_eq() {
    let tol = Tolerance::STANDARD;
    assert!(tol.approx_eq(1.0, 1.0));
    assert!(tol.approx_eq(1.0, 1.0 + 1e-11));
    assert!(!tol.approx_eq(1.0, 1.0 + 1e-9));
    assert!(!tol.approx_eq(0.0, EPSILON));
    assert!(tol.approx_eq(0.0, -0.0));
  }

  #[test]
  fn test_approx_eq_nan() {
    let tol = Tolerance::STANDARD;
    assert!(!tol.approx_eq(f64::NAN, f64::NAN));
    assert!(!tol.approx_eq(f64::NAN, 0.0));
    assert!(!tol.approx_eq(0.0, f64::NAN));
  }

  #[test]
  fn test_approx_eq_infinities() {
    let tol = Tolerance::STANDARD;
    assert!(!tol.approx_eq(f64::INFINITY, f64::INFINITY));
    assert!(!tol.approx_eq(f64::INFINITY, 1e300));
  }

  #[test]
  fn test_approx_ordering() {
    let tol = Tolerance::STANDARD;
    assert!(tol.approx_le(1.0, 2.0));
    assert!(tol.approx_le(2.0 + 1e-11, 2.0));
    assert!(!tol.approx_le(2.0 + 1e-9, 2.0));
    assert!(tol.approx_ge(2.0, 1.0));
    assert!(tol.approx_ge(2.0 - 1e-11, 2.0));
    assert!(!tol.approx_ge(2.0 - 1e-9, 2.0));
    assert!(tol.approx_le(f64::NEG_INFINITY, 0.0));
    assert!(!tol.approx_le(f64::NAN, 0.0));
    assert!(!tol.approx_ge(f64::NAN, 0.0));
  }

  #[test]
  fn test_sign() {
    let tol = Tolerance::STANDARD;
    assert_eq!(tol.sign(3.0), Ordering::Greater);
    assert_eq!(tol.sign(-3.0), Ordering::Less);
    assert_eq!(tol.sign(0.0), Ordering::Equal);
    assert_eq!(tol.sign(-0.0), Ordering::Equal);
    assert_eq!(tol.sign(5e-11), Ordering::Equal);
    assert_eq!(tol.sign(-5e-11), Ordering::Equal);
    assert_eq!(tol.sign(f64::NAN), Ordering::Equal);
    assert_eq!(tol.sign(f64::NEG_INFINITY), Ordering::Less);
  }

  #[test]
  fn test_opposite_signs() {
    let tol = Tolerance::STANDARD;
    assert!(tol.opposite_signs(-1.0, 1.0));
    assert!(tol.opposite_signs(1.0, -1.0));
    assert!(!tol.opposite_signs(0.0, 1.0));
    assert!(!tol.opposite_signs(-1.0, -2.0));
    assert!(!tol.opposite_signs(f64::NAN, 1.0));
  }

  #[test]
  fn test_is_signed_infinity() {
    assert!(is_signed_infinity(f64::INFINITY, Sign::Positive));
    assert!(is_signed_infinity(f64::NEG_INFINITY, Sign::Negative));
    assert!(!is_signed_infinity(f64::INFINITY, Sign::Negative));
    assert!(!is_signed_infinity(f64::NEG_INFINITY, Sign::Positive));
    assert!(!is_signed_infinity(f64::MAX, Sign::Positive));
    assert!(!is_signed_infinity(f64::NAN, Sign::Positive));
  }

  #[test]
  fn test_nan_aware_min_max() {
    assert_eq!(nan_aware_min(1.0, 2.0), 1.0);
    assert_eq!(nan_aware_min(f64::NAN, 2.0), 2.0);
    assert_eq!(nan_aware_min(1.0, f64::NAN), 1.0);
    assert!(nan_aware_min(f64::NAN, f64::NAN).is_nan());
    assert_eq!(nan_aware_max(1.0, 2.0), 2.0);
    assert_eq!(nan_aware_max(f64::NAN, 2.0), 2.0);
    assert_eq!(nan_aware_max(1.0, f64::NAN), 1.0);
    assert!(nan_aware_max(f64::NAN, f64::NAN).is_nan());
  }

  #[test]
  fn test_nan_aware_fold() {
    let values = [f64::NAN, 3.0, f64::NAN, -1.0, 7.0];
    assert_eq!(values.iter().copied().fold(f64::NAN, nan_aware_min), -1.0);
    assert_eq!(values.iter().copied().fold(f64::NAN, nan_aware_max), 7.0);
    let empty: [f64; 0] = [];
    assert!(empty.iter().copied().fold(f64::NAN, nan_aware_min).is_nan());
  }

  #[test]
  fn test_custom_tolerance() {
    let tol = Tolerance::new(0.5).unwrap();
    assert_eq!(tol.epsilon(), 0.5);
    assert!(tol.approx_eq(1.0, 1.4));
    assert_eq!(tol.sign(0.3), Ordering::Equal);
    assert_eq!(Tolerance::default(), Tolerance::STANDARD);
  }

  #[test]
  fn test_invalid_tolerance() {
    assert!(Tolerance::new(0.0).is_err());
    assert!(Tolerance::new(-1.0).is_err());
    assert!(Tolerance::new(f64::NAN).is_err());
    assert!(Tolerance::new(f64::INFINITY).is_err());
  }
}
