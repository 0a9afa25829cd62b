use thiserror::Error;

/// An interval constructor was called with arguments that do not
/// describe a set of reals. These are caller bugs, not undefined
/// arithmetic; the engine itself never produces them.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConstructionError {
  #[error("Tolerance percentage must be positive, got {0}")]
  NonPositivePercent(f64),
  #[error("Nominal value must be finite, got {0}")]
  NonFiniteNominal(f64),
  #[error("Range lower bound {low} exceeds upper bound {high}")]
  InvertedRange { low: f64, high: f64 },
  #[error("Range [{0}; {0}] contains no real number")]
  InfiniteSingleton(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Comparison epsilon must be finite and positive, got {epsilon}")]
pub struct InvalidEpsilonError {
  pub epsilon: f64,
  _priv: (),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ConstructionError(#[from] ConstructionError),
  #[error("{0}")]
  InvalidEpsilonError(#[from] InvalidEpsilonError),
}

impl InvalidEpsilonError {
  pub(crate) fn new(epsilon: f64) -> Self {
    Self { epsilon, _priv: () }
  }
}
