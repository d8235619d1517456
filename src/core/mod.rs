//! Core-Domänentypen: Zeichenbefehle, Polylines, Mesh-Vertices.

pub mod command;
/// Mesh-Ergebnisse und Export-Rundung
pub mod mesh;

pub use command::{Command, CommandKind};
pub use mesh::{GridSize, Mesh, MeshVertex, SampledPaths};

/// Dichte Punktfolge, wie sie der Tracer erzeugt.
pub type Polyline = Vec<glam::DVec2>;
