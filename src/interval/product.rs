//! Multiplication of intervals, dispatching on which of the operands
//! are complements.

use super::base::Interval;
use super::raw::RawInterval;
use crate::tolerance::{Tolerance, nan_aware_min, nan_aware_max};
use crate::util::Sign;

use itertools::iproduct;

use std::ops::Mul;

impl Interval {
  pub fn mul_with(self, other: Interval, tolerance: Tolerance) -> Interval {
    let (Some(left), Some(right)) = (self.into_raw(), other.into_raw()) else {
      return Interval::empty();
    };
    // Both guards keep 0 * inf from leaking NaN into the bounds.
    if left.is_zero_point(tolerance) || right.is_zero_point(tolerance) {
      log::trace!("multiplying by the zero point");
      return Interval::exact(0.0);
    }
    if left.is_full() || right.is_full() {
      log::trace!("multiplying by the full line");
      return Interval::full();
    }
    let product = match (left.complemented, right.complemented) {
      (false, false) => mul_bounded(left, right),
      (true, true) => mul_both_complemented(left, right, tolerance),
      (true, false) => mul_one_complemented(right, left, tolerance),
      (false, true) => mul_one_complemented(left, right, tolerance),
    };
    product.normalize(tolerance)
  }
}

impl Mul for Interval {
  type Output = Interval;

  fn mul(self, other: Interval) -> Interval {
    self.mul_with(other, Tolerance::STANDARD)
  }
}

fn mul_bounded(left: RawInterval, right: RawInterval) -> RawInterval {
  debug_assert!(!left.complemented && !right.complemented);
  let (low, high) = iproduct!([left.low, left.high], [right.low, right.high])
    .map(|(x, y)| x * y)
    .fold((f64::NAN, f64::NAN), |(low, high), p| (nan_aware_min(low, p), nan_aware_max(high, p)));
  RawInterval::new(low, high, false)
}

/// Negates `operand` if it lies entirely at or below zero, flipping
/// `sign` to record that the product must be negated back.
fn reflect_nonpositive(operand: RawInterval, sign: &mut Sign, tolerance: Tolerance) -> RawInterval {
  if operand.is_nonpositive(tolerance) {
    *sign = sign.other();
    operand.negated()
  } else {
    operand
  }
}

fn mul_one_complemented(bounded: RawInterval, complement: RawInterval, tolerance: Tolerance) -> RawInterval {
  debug_assert!(!bounded.complemented && complement.complemented);
  // After reflection a single formula covers every sign combination.
  let mut sign = Sign::Positive;
  let bounded = reflect_nonpositive(bounded, &mut sign, tolerance);
  let complement = reflect_nonpositive(complement, &mut sign, tolerance);

  let low = nan_aware_min(bounded.low * complement.low, bounded.high * complement.low);
  let high = nan_aware_max(bounded.low * complement.high, bounded.high * complement.high);
  // If the tails overlap, normalization turns this into the full line.
  let product = RawInterval::new(low, high, true);
  match sign {
    Sign::Positive => product,
    Sign::Negative => product.negated(),
  }
}

fn mul_both_complemented(left: RawInterval, right: RawInterval, tolerance: Tolerance) -> RawInterval {
  debug_assert!(left.complemented && right.complemented);
  if left.contains(0.0, tolerance) || right.contains(0.0, tolerance) {
    return RawInterval::full();
  }
  // Neither contains zero, so in both `high < 0 < low`.
  RawInterval::new(
    nan_aware_min(left.low * right.low, left.high * right.high),
    nan_aware_max(left.low * right.high, left.high * right.low),
    true,
  )
}
