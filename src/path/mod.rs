//! Pfad-Pipeline: Parser → Normalisierung → Tracer.
//!
//! Aufgeteilt in:
//! - `parser`: Scanner für Pfad-Strings, Aufteilung wiederholter Argumente
//! - `normalize`: relative → absolute Koordinaten, `H`/`V` → `L`
//! - `tracer`: Unterteilung von Geraden, Bézier-Kurven und Bögen

mod error;
pub mod normalize;
pub mod parser;
pub mod tracer;

pub use error::PathError;
pub use normalize::normalize;
pub use parser::parse_path;
pub use tracer::{
    arc_to_points, cubic_bezier, quadratic_bezier, trace, DEFAULT_CURVE_SEGMENTS,
    LINE_SUBDIVISIONS,
};

use crate::core::Polyline;

/// Parst, normalisiert und tastet einen Pfad-String in einem Schritt ab.
pub fn trace_path(text: &str, curve_segments: usize) -> Result<Polyline, PathError> {
    let commands = parse_path(text)?;
    Ok(trace(&normalize(&commands), curve_segments))
}
