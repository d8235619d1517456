//! Shape-Ebene: Datensätze, Batch-Verarbeitung, Datei-I/O, Beispiel-Shapes.

pub mod io;
pub mod processor;
pub mod record;
pub mod samples;

pub use io::{load_shapes, minified_path, parse_shapes, write_output};
pub use processor::{
    preprocess_shapes, process_shape, Curve, MeshConfig, PreprocessedDocument, ProcessedMap,
    ProcessedShape, ShapeError, ShapeOutput, OUTPUT_VERSION,
};
pub use record::{ShapeMap, ShapeRecord, SourceDimensions};
pub use samples::sample_shapes;
