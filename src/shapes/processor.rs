//! Batch-Verarbeitung: pro Shape zwei Arc-Length-Indizes, zwei Meshes und
//! die gesampelten Roh-Pfade.
//!
//! Shapes sind voneinander unabhängig und laufen parallel über `rayon`.
//! Das Ergebnis behält die Eingabe-Reihenfolge.

use std::fmt;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::record::{ShapeMap, ShapeRecord};
use crate::core::{Mesh, SampledPaths};
use crate::mesh::MeshBlender;
use crate::path::{trace_path, PathError};
use crate::sampling::ArcLengthIndex;
use crate::shared::{ErrorPolicy, PreprocessOptions};

/// Version des Ausgabeformats
pub const OUTPUT_VERSION: &str = "2.0";

const PREVIEW_MESH_KEY: &str = "previewMesh";
const EXPORT_MESH_KEY: &str = "exportMesh";
const SAMPLED_PATHS_KEY: &str = "sampledPaths";
const MESH_CONFIG_KEY: &str = "meshConfig";

/// Welche der beiden Kurven eines Shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Top,
    Bottom,
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Top => f.write_str("top"),
            Curve::Bottom => f.write_str("bottom"),
        }
    }
}

/// Fehler bei der Verarbeitung eines einzelnen Shapes
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("Shape '{shape}': {curve}-Pfad ist ungültig: {source}")]
    Path {
        shape: String,
        curve: Curve,
        #[source]
        source: PathError,
    },
}

impl ShapeError {
    /// ID des betroffenen Shapes
    pub fn shape(&self) -> &str {
        match self {
            ShapeError::Path { shape, .. } => shape,
        }
    }
}

/// Verwendete Grid-Auflösungen, wird mit exportiert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshConfig {
    pub preview_cols: usize,
    pub preview_rows: usize,
    pub export_cols: usize,
    pub export_rows: usize,
}

impl From<&PreprocessOptions> for MeshConfig {
    fn from(options: &PreprocessOptions) -> Self {
        Self {
            preview_cols: options.preview_cols,
            preview_rows: options.preview_rows,
            export_cols: options.export_cols,
            export_rows: options.export_rows,
        }
    }
}

/// Ein verarbeitetes Shape: Original-Felder plus generierte Daten.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedShape {
    pub record: ShapeRecord,
    pub preview_mesh: Mesh,
    pub export_mesh: Mesh,
    pub sampled_paths: SampledPaths,
    pub mesh_config: MeshConfig,
}

impl Serialize for ProcessedShape {
    /// Original-Felder in Eingabe-Reihenfolge, danach die generierten.
    /// Ein bereits vorhandener generierter Schlüssel wird an seiner Position ersetzt.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let generated = [
            PREVIEW_MESH_KEY,
            EXPORT_MESH_KEY,
            SAMPLED_PATHS_KEY,
            MESH_CONFIG_KEY,
        ];
        let fields = self.record.fields();
        let extra = generated
            .iter()
            .filter(|key| !fields.contains_key(**key))
            .count();

        let mut map = serializer.serialize_map(Some(fields.len() + extra))?;
        for (key, value) in fields {
            if generated.contains(&key.as_str()) {
                self.serialize_generated(&mut map, key)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        for key in generated {
            if !fields.contains_key(key) {
                self.serialize_generated(&mut map, key)?;
            }
        }
        map.end()
    }
}

impl ProcessedShape {
    fn serialize_generated<M: SerializeMap>(
        &self,
        map: &mut M,
        key: &str,
    ) -> Result<(), M::Error> {
        match key {
            PREVIEW_MESH_KEY => map.serialize_entry(key, &self.preview_mesh),
            EXPORT_MESH_KEY => map.serialize_entry(key, &self.export_mesh),
            SAMPLED_PATHS_KEY => map.serialize_entry(key, &self.sampled_paths),
            _ => map.serialize_entry(key, &self.mesh_config),
        }
    }
}

/// Ergebnis pro Shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShapeOutput {
    Processed(Box<ProcessedShape>),
    /// Ohne beide Pfade oder nach übersprungenem Fehler: unverändert
    Unchanged(ShapeRecord),
}

impl ShapeOutput {
    pub fn as_processed(&self) -> Option<&ProcessedShape> {
        match self {
            ShapeOutput::Processed(shape) => Some(shape),
            ShapeOutput::Unchanged(_) => None,
        }
    }
}

/// Verarbeitete Shapes nach ID, in Eingabe-Reihenfolge
pub type ProcessedMap = IndexMap<String, ShapeOutput>;

/// Komplettes Ausgabe-Dokument
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreprocessedDocument {
    pub version: String,
    pub generated: bool,
    pub shapes: ProcessedMap,
}

impl PreprocessedDocument {
    pub fn new(shapes: ProcessedMap) -> Self {
        Self {
            version: OUTPUT_VERSION.to_string(),
            generated: true,
            shapes,
        }
    }
}

/// Parst und tastet einen Pfad ab und baut daraus den Arc-Length-Index.
fn build_index(text: &str, options: &PreprocessOptions) -> Result<ArcLengthIndex, PathError> {
    let polyline = trace_path(text, options.curve_segments)?;
    Ok(ArcLengthIndex::new(&polyline, options.index_samples))
}

/// Verarbeitet ein einzelnes Shape.
///
/// Datensätze ohne `topPath` oder `bottomPath` kommen unverändert zurück.
/// Eine Kurve der Länge 0 ist kein Fehler, ihre Punkte liegen im Ursprung.
pub fn process_shape(
    id: &str,
    record: ShapeRecord,
    options: &PreprocessOptions,
) -> Result<ShapeOutput, ShapeError> {
    let (Some(top_path), Some(bottom_path)) = (record.top_path(), record.bottom_path()) else {
        log::debug!("Shape '{}' ohne topPath/bottomPath, unverändert übernommen", id);
        return Ok(ShapeOutput::Unchanged(record));
    };

    let dims = record.source_dimensions();
    log::debug!("Shape '{}': Quellbild {}×{}", id, dims.width, dims.height);

    let (top, bottom) = rayon::join(
        || build_index(top_path, options),
        || build_index(bottom_path, options),
    );
    let top = top.map_err(|source| ShapeError::Path {
        shape: id.to_string(),
        curve: Curve::Top,
        source,
    })?;
    let bottom = bottom.map_err(|source| ShapeError::Path {
        shape: id.to_string(),
        curve: Curve::Bottom,
        source,
    })?;

    for (curve, index) in [(Curve::Top, &top), (Curve::Bottom, &bottom)] {
        if index.is_empty() {
            log::warn!(
                "Shape '{}': {}-Kurve hat Länge 0, Punkte fallen auf den Ursprung",
                id,
                curve
            );
        }
    }
    log::debug!(
        "Shape '{}': Längen top={:.4}, bottom={:.4}",
        id,
        top.total_length(),
        bottom.total_length()
    );

    let blend = record.blend_options();
    let preview = MeshBlender::new(&top, &bottom, blend, options.preview_grid());
    let export = MeshBlender::new(&top, &bottom, blend, options.export_grid());

    Ok(ShapeOutput::Processed(Box::new(ProcessedShape {
        preview_mesh: preview.generate_mesh(),
        export_mesh: export.generate_mesh(),
        sampled_paths: preview.sample_curves(options.sampled_path_count),
        mesh_config: MeshConfig::from(options),
        record,
    })))
}

/// Verarbeitet alle Shapes parallel.
///
/// Bei [`ErrorPolicy::Skip`] wird ein fehlerhaftes Shape mit Warnung
/// unverändert übernommen, bei [`ErrorPolicy::Abort`] bricht der Lauf mit dem
/// ersten Fehler (in Eingabe-Reihenfolge) ab.
pub fn preprocess_shapes(
    shapes: ShapeMap,
    options: &PreprocessOptions,
) -> Result<ProcessedMap, ShapeError> {
    let entries: Vec<(String, ShapeRecord)> = shapes.into_iter().collect();

    let results: Vec<(String, ShapeRecord, Result<ShapeOutput, ShapeError>)> = entries
        .into_par_iter()
        .map(|(id, record)| {
            log::info!("Verarbeite Shape: {}", id);
            let fallback = match options.error_policy {
                ErrorPolicy::Skip => record.clone(),
                ErrorPolicy::Abort => ShapeRecord::default(),
            };
            let result = process_shape(&id, record, options);
            (id, fallback, result)
        })
        .collect();

    let mut processed = ProcessedMap::with_capacity(results.len());
    for (id, fallback, result) in results {
        let output = match result {
            Ok(output) => output,
            Err(e) => match options.error_policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    log::warn!("{}, Shape wird unverändert übernommen", e);
                    ShapeOutput::Unchanged(fallback)
                }
            },
        };
        processed.insert(id, output);
    }

    Ok(processed)
}
