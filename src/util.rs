//! Various utility types shared by the comparator and the arithmetic
//! engine.

/// A nonzero sign, pointing toward one of the two infinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
  Negative,
  Positive,
}

/// The multiplicative inverse of a value, as a set-valued operation
/// where that makes sense.
pub trait Recip {
  type Output;

  fn recip(self) -> Self::Output;
}

impl Sign {
  pub fn other(self) -> Self {
    match self {
      Self::Negative => Self::Positive,
      Self::Positive => Self::Negative,
    }
  }

  /// The infinity pointing in this direction.
  pub fn infinity(self) -> f64 {
    match self {
      Self::Negative => f64::NEG_INFINITY,
      Self::Positive => f64::INFINITY,
    }
  }
}
