//! Shape Warp Mesh Library.
//! Wandelt zwei SVG-Profilpfade in ein gleichmäßig parametrisiertes Warp-Mesh.
//!
//! Pipeline: Parser → Normalisierung → Tracer → Arc-Length-Index → Mesh-Blender.

pub mod core;
pub mod mesh;
pub mod path;
pub mod sampling;
pub mod shapes;
pub mod shared;

pub use self::core::{Command, CommandKind, GridSize, Mesh, MeshVertex, Polyline, SampledPaths};
pub use mesh::{BlendOptions, MeshBlender};
pub use path::{normalize, parse_path, trace, trace_path, PathError};
pub use sampling::{ArcLengthIndex, ArcLengthTable};
pub use shapes::{
    load_shapes, parse_shapes, preprocess_shapes, process_shape, sample_shapes, write_output,
    PreprocessedDocument, ProcessedMap, ShapeError, ShapeMap, ShapeOutput, ShapeRecord,
};
pub use shared::{ErrorPolicy, PreprocessOptions};
