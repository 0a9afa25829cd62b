
use super::base::{Interval, Repr};
use crate::tolerance::{Tolerance, is_signed_infinity};
use crate::util::Sign;

/// Equivalent to the [`Interval`] type but does not force its
/// structure into normal form. The arithmetic engine computes with
/// this triple, since most operations treat both states uniformly,
/// and then normalizes the result.
///
/// If `complemented` is false, the triple denotes `low ..= high`.
/// Otherwise it denotes everything at most `high` together with
/// everything at least `low`. A NaN endpoint denotes the empty set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RawInterval {
  pub low: f64,
  pub high: f64,
  pub complemented: bool,
}

impl RawInterval {
  pub fn new(low: f64, high: f64, complemented: bool) -> Self {
    Self { low, high, complemented }
  }

  pub fn full() -> Self {
    Self::new(f64::NEG_INFINITY, f64::INFINITY, false)
  }

  pub fn negated(self) -> Self {
    Self::new(- self.high, - self.low, self.complemented)
  }

  pub fn is_zero_point(self, tolerance: Tolerance) -> bool {
    tolerance.is_zero(self.low) && tolerance.is_zero(self.high)
  }

  pub fn is_full(self) -> bool {
    !self.complemented &&
      is_signed_infinity(self.low, Sign::Negative) &&
      is_signed_infinity(self.high, Sign::Positive)
  }

  /// True if neither endpoint is (approximately) positive.
  pub fn is_nonpositive(self, tolerance: Tolerance) -> bool {
    tolerance.approx_le(self.low, 0.0) && tolerance.approx_le(self.high, 0.0)
  }

  pub fn contains(self, x: f64, tolerance: Tolerance) -> bool {
    if self.complemented {
      tolerance.approx_ge(x, self.low) || tolerance.approx_le(x, self.high)
    } else {
      tolerance.approx_ge(x, self.low) && tolerance.approx_le(x, self.high)
    }
  }

  /// Brings the triple into normal form, collapsing every combination
  /// that [`Interval`] forbids.
  pub fn normalize(self, tolerance: Tolerance) -> Interval {
    let Self { low, high, complemented } = self;
    if low.is_nan() || high.is_nan() {
      return Interval::empty();
    }
    if !complemented {
      debug_assert!(
        low <= high || tolerance.approx_eq(low, high),
        "bounded interval with low > high: [{low}; {high}]",
      );
      return Interval::from_repr(Repr::Bounded { low, high });
    }
    if tolerance.approx_ge(high, low) {
      log::trace!("complement tails [{high}; {low}] overlap, collapsing to the full line");
      return Interval::full();
    }
    // A tail that starts at infinity contains no reals.
    if is_signed_infinity(low, Sign::Positive) {
      return Interval::from_repr(Repr::Bounded { low: f64::NEG_INFINITY, high });
    }
    if is_signed_infinity(high, Sign::Negative) {
      return Interval::from_repr(Repr::Bounded { low, high: f64::INFINITY });
    }
    Interval::from_repr(Repr::Complement { low, high })
  }
}
