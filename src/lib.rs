//! Interval arithmetic over sets of reals.
//!
//! The set of intervals is closed under division: dividing by an
//! interval that straddles zero yields the complement of an open
//! interval, and dividing by the zero point yields the empty set. All
//! comparisons are made up to a small [`tolerance::Tolerance`].

pub mod error;
pub mod interval;
pub mod tolerance;
pub mod util;

pub use error::{ConstructionError, Error};
pub use interval::Interval;
pub use tolerance::Tolerance;
