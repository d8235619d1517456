//! Gleichmäßiges Resampling von Polylines nach Bogenlänge.

pub mod arc_length;

pub use arc_length::{ArcLengthIndex, ArcLengthTable};
