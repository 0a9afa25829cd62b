//! Defines the interval datatype and interval arithmetic over
//! bounded intervals, complements of intervals, and the empty set.

mod base;
mod product;
mod raw;

pub use base::Interval;

use raw::RawInterval;
use crate::tolerance::Tolerance;
use crate::util::Recip;

use std::ops::Div;

impl Interval {
  /// The set `{x | 1/x in self}`.
  ///
  /// Dividing by an interval straddling zero produces a complement;
  /// dividing by the zero point produces the empty set.
  pub fn recip_with(self, tolerance: Tolerance) -> Interval {
    let Some(raw) = self.into_raw() else {
      return Interval::empty();
    };
    if raw.is_zero_point(tolerance) {
      log::trace!("reciprocal of the zero point is empty");
      return Interval::empty();
    }
    let mut result = RawInterval::new(raw.high.recip(), raw.low.recip(), raw.complemented);
    if tolerance.opposite_signs(raw.low, raw.high) {
      // Passing through zero sends the covered part of the line out
      // past infinity, in either direction.
      result.complemented = !result.complemented;
      if tolerance.approx_eq(result.low, result.high) {
        log::trace!("reciprocal ends meet at {}, collapsing to the full line", result.low);
        result = RawInterval::full();
      }
    }
    // An end at zero is approached from one side only, so it maps to
    // a single unbounded tail. These take priority over the straddle
    // case above. Both use the same tolerance, so an end near zero
    // never has a sign and the two cannot fire together.
    if tolerance.is_zero(raw.low) {
      result.high = f64::INFINITY;
      result.complemented = false;
    }
    if tolerance.is_zero(raw.high) {
      result.low = f64::NEG_INFINITY;
      result.complemented = false;
    }
    result.normalize(tolerance)
  }

  pub fn div_with(self, other: Interval, tolerance: Tolerance) -> Interval {
    self.mul_with(other.recip_with(tolerance), tolerance)
  }
}

impl Recip for Interval {
  type Output = Interval;

  fn recip(self) -> Interval {
    self.recip_with(Tolerance::STANDARD)
  }
}

impl Div for Interval {
  type Output = Interval;

  fn div(self, other: Interval) -> Interval {
    self.div_with(other, Tolerance::STANDARD)
  }
}
