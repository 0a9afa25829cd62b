
use super::raw::RawInterval;
use crate::error::ConstructionError;
use crate::tolerance::{Tolerance, EPSILON, is_signed_infinity};
use crate::util::Sign;

use approx::AbsDiffEq;
use num::Zero;

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub, Neg};

/// A set of reals arising from uncertain arithmetic.
///
/// Intervals are always kept in normal form, which is defined as
/// follows. An interval is exactly one of
///
/// * the empty set, which has no other representation;
/// * a closed range `low ..= high`, with `low <= high` up to
///   tolerance, where either end may be infinite;
/// * a complement, which is everything at most `high` together with
///   everything at least `low`, i.e. the reals outside the open gap
///   between `high` and `low`. Both ends are finite and `high < low`
///   by more than the tolerance. A complement whose tails would meet
///   is the full line and is stored as the range `-inf ..= inf`.
///
/// The representation is private. Values come from the validating
/// constructors or from arithmetic, both of which normalize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
  repr: Repr,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Repr {
  Empty,
  Bounded { low: f64, high: f64 },
  Complement { low: f64, high: f64 },
}

impl Interval {
  /// Wraps a representation without checking it. The caller is
  /// responsible for the normal form.
  pub(super) fn from_repr(repr: Repr) -> Self {
    Self { repr }
  }

  pub fn empty() -> Self {
    Self::from_repr(Repr::Empty)
  }

  /// The whole real line.
  pub fn full() -> Self {
    Self::from_repr(Repr::Bounded { low: f64::NEG_INFINITY, high: f64::INFINITY })
  }

  /// The singleton `x ..= x`.
  ///
  /// `x` must be finite. This is only checked in debug builds.
  pub fn exact(x: f64) -> Self {
    debug_assert!(x.is_finite(), "exact interval at non-finite value {x}");
    Self::from_repr(Repr::Bounded { low: x, high: x })
  }

  /// The closed range `low ..= high`. Either end may be infinite, but
  /// not both at the same infinity.
  #[allow(clippy::neg_cmp_op_on_partial_ord)] // Negated so that NaN is rejected too.
  pub fn from_range(low: f64, high: f64) -> Result<Self, ConstructionError> {
    if !(low <= high) {
      return Err(ConstructionError::InvertedRange { low, high });
    }
    if low == high && low.is_infinite() {
      return Err(ConstructionError::InfiniteSingleton(low));
    }
    Ok(Self::from_repr(Repr::Bounded { low, high }))
  }

  /// The values within `percent` percent of `nominal`. Works for
  /// negative nominal values, where the naive ends come out swapped.
  #[allow(clippy::neg_cmp_op_on_partial_ord)]
  pub fn from_tolerance(nominal: f64, percent: f64) -> Result<Self, ConstructionError> {
    if !(percent > 0.0) {
      return Err(ConstructionError::NonPositivePercent(percent));
    }
    if !nominal.is_finite() {
      return Err(ConstructionError::NonFiniteNominal(nominal));
    }
    let a = nominal * (100.0 - percent) / 100.0;
    let b = nominal * (100.0 + percent) / 100.0;
    Ok(Self::from_repr(Repr::Bounded { low: a.min(b), high: a.max(b) }))
  }

  pub fn is_empty(&self) -> bool {
    matches!(self.repr, Repr::Empty)
  }

  pub fn is_complement(&self) -> bool {
    matches!(self.repr, Repr::Complement { .. })
  }

  pub fn is_full(&self) -> bool {
    self.into_raw().is_some_and(RawInterval::is_full)
  }

  /// The stored lower end. For a complement this is where the upper
  /// tail begins. NaN for the empty set.
  pub fn low(&self) -> f64 {
    match self.repr {
      Repr::Empty => f64::NAN,
      Repr::Bounded { low, .. } | Repr::Complement { low, .. } => low,
    }
  }

  /// The stored upper end. For a complement this is where the lower
  /// tail ends. NaN for the empty set.
  pub fn high(&self) -> f64 {
    match self.repr {
      Repr::Empty => f64::NAN,
      Repr::Bounded { high, .. } | Repr::Complement { high, .. } => high,
    }
  }

  pub(crate) fn into_raw(self) -> Option<RawInterval> {
    match self.repr {
      Repr::Empty => None,
      Repr::Bounded { low, high } => Some(RawInterval::new(low, high, false)),
      Repr::Complement { low, high } => Some(RawInterval::new(low, high, true)),
    }
  }

  pub fn contains(&self, x: f64) -> bool {
    self.contains_with(x, Tolerance::STANDARD)
  }

  pub fn contains_with(&self, x: f64, tolerance: Tolerance) -> bool {
    self.into_raw().is_some_and(|raw| raw.contains(x, tolerance))
  }

  /// The infimum of the set, or NaN if the set is empty.
  pub fn minimum(&self) -> f64 {
    match self.repr {
      Repr::Empty => f64::NAN,
      Repr::Complement { .. } => f64::NEG_INFINITY,
      Repr::Bounded { low, .. } => {
        if is_signed_infinity(low, Sign::Negative) { f64::NEG_INFINITY } else { low }
      }
    }
  }

  /// The supremum of the set, or NaN if the set is empty.
  pub fn maximum(&self) -> f64 {
    match self.repr {
      Repr::Empty => f64::NAN,
      Repr::Complement { .. } => f64::INFINITY,
      Repr::Bounded { high, .. } => {
        if is_signed_infinity(high, Sign::Positive) { f64::INFINITY } else { high }
      }
    }
  }

  /// The center of the set. NaN if the set is empty or unbounded in
  /// both directions; an infinity if unbounded in one direction.
  pub fn midpoint(&self) -> f64 {
    // -inf + inf is already NaN, which is what we want for sets
    // unbounded on both sides.
    (self.maximum() + self.minimum()) / 2.0
  }

  pub fn add_with(self, other: Interval, tolerance: Tolerance) -> Interval {
    let (Some(left), Some(right)) = (self.into_raw(), other.into_raw()) else {
      return Interval::empty();
    };
    if left.complemented && right.complemented {
      // Two sets unbounded in both directions sum to anything.
      return Interval::full();
    }
    // With exactly one complemented operand, the sum can wrap around
    // so that its tails overlap. Normalization collapses that to the
    // full line.
    RawInterval::new(
      left.low + right.low,
      left.high + right.high,
      left.complemented || right.complemented,
    ).normalize(tolerance)
  }

  pub fn sub_with(self, other: Interval, tolerance: Tolerance) -> Interval {
    self.add_with(- other, tolerance)
  }
}

impl Neg for Interval {
  type Output = Interval;

  fn neg(self) -> Interval {
    let repr = match self.repr {
      Repr::Empty => Repr::Empty,
      Repr::Bounded { low, high } => Repr::Bounded { low: - high, high: - low },
      Repr::Complement { low, high } => Repr::Complement { low: - high, high: - low },
    };
    Interval::from_repr(repr)
  }
}

impl Add for Interval {
  type Output = Interval;

  fn add(self, other: Interval) -> Interval {
    self.add_with(other, Tolerance::STANDARD)
  }
}

impl Sub for Interval {
  type Output = Interval;

  fn sub(self, other: Interval) -> Interval {
    self.sub_with(other, Tolerance::STANDARD)
  }
}

impl Zero for Interval {
  fn zero() -> Self {
    Interval::exact(0.0)
  }

  /// True for the degenerate zero point, up to the standard
  /// tolerance.
  fn is_zero(&self) -> bool {
    self.into_raw().is_some_and(|raw| !raw.complemented && raw.is_zero_point(Tolerance::STANDARD))
  }
}

/// Endpoint-wise comparison. Infinite endpoints compare equal only to
/// the same infinity, and the empty set only to itself.
impl AbsDiffEq for Interval {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    EPSILON
  }

  fn abs_diff_eq(&self, other: &Interval, epsilon: f64) -> bool {
    let endpoint_eq = |a: f64, b: f64| a == b || a.abs_diff_eq(&b, epsilon);
    match (self.repr, other.repr) {
      (Repr::Empty, Repr::Empty) => true,
      (Repr::Bounded { low: l1, high: h1 }, Repr::Bounded { low: l2, high: h2 }) |
      (Repr::Complement { low: l1, high: h1 }, Repr::Complement { low: l2, high: h2 }) =>
        endpoint_eq(l1, l2) && endpoint_eq(h1, h2),
      _ => false,
    }
  }
}

/// Renders as `[low; high](flag)`, where the flag is `1` for a
/// complement and `0` otherwise. The empty set renders with NaN ends.
impl Display for Interval {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let flag = if self.is_complement() { 1 } else { 0 };
    write!(f, "[{:.10}; {:.10}]({flag})", self.low(), self.high())
  }
}
