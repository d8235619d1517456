//! Ergebnis-Typen der Mesh-Berechnung: Vertices, Grid, gesampelte Pfade.
//!
//! Intern wird mit voller `f64`-Präzision gerechnet. Gerundet wird erst beim
//! Serialisieren: Koordinaten und Längen auf 4, `u`/`v` auf 6 Nachkommastellen.

use glam::DVec2;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

/// Nachkommastellen für Koordinaten und Längen im Export
pub const COORD_DECIMALS: i32 = 4;
/// Nachkommastellen für normalisierte Textur-Koordinaten im Export
pub const UV_DECIMALS: i32 = 6;

/// Rundet auf `decimals` Nachkommastellen.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // -0.0 vermeiden, damit der Export stabil bleibt
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Ein Vertex des Warp-Meshes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub x: f64,
    pub y: f64,
    /// Horizontale Textur-Koordinate ∈ [0, 1]
    pub u: f64,
    /// Blend-Gewicht ∈ [0, 1] (0 = obere Kurve, 1 = untere Kurve)
    pub v: f64,
}

impl MeshVertex {
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl Serialize for MeshVertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MeshVertex", 4)?;
        state.serialize_field("x", &round_to(self.x, COORD_DECIMALS))?;
        state.serialize_field("y", &round_to(self.y, COORD_DECIMALS))?;
        state.serialize_field("u", &round_to(self.u, UV_DECIMALS))?;
        state.serialize_field("v", &round_to(self.v, UV_DECIMALS))?;
        state.end()
    }
}

/// Auflösung eines Mesh-Grids (Zellen, nicht Vertices)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

impl GridSize {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }
}

/// Zeilenweise gespeichertes Vertex-Grid: `rows + 1` Zeilen à `cols + 1` Vertices.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Mesh {
    rows: Vec<Vec<MeshVertex>>,
}

impl Mesh {
    pub fn from_rows(rows: Vec<Vec<MeshVertex>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<MeshVertex>] {
        &self.rows
    }

    /// Anzahl der Vertex-Zeilen
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Anzahl der Vertices pro Zeile (0 bei leerem Mesh)
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn vertex(&self, row: usize, col: usize) -> Option<&MeshVertex> {
        self.rows.get(row)?.get(col)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &MeshVertex> {
        self.rows.iter().flatten()
    }
}

/// Gleichmäßig gesampelte Roh-Punkte beider Kurven (ohne Grid)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampledPaths {
    pub top: Vec<DVec2>,
    pub bottom: Vec<DVec2>,
    pub top_length: f64,
    pub bottom_length: f64,
}

/// Serialisiert eine Punktliste als `[{x, y}, ...]` mit Export-Rundung.
struct RoundedPoints<'a>(&'a [DVec2]);

impl Serialize for RoundedPoints<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for point in self.0 {
            seq.serialize_element(&RoundedPoint(*point))?;
        }
        seq.end()
    }
}

struct RoundedPoint(DVec2);

impl Serialize for RoundedPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Point", 2)?;
        state.serialize_field("x", &round_to(self.0.x, COORD_DECIMALS))?;
        state.serialize_field("y", &round_to(self.0.y, COORD_DECIMALS))?;
        state.end()
    }
}

impl Serialize for SampledPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SampledPaths", 4)?;
        state.serialize_field("top", &RoundedPoints(&self.top))?;
        state.serialize_field("bottom", &RoundedPoints(&self.bottom))?;
        state.serialize_field("topLength", &round_to(self.top_length, COORD_DECIMALS))?;
        state.serialize_field(
            "bottomLength",
            &round_to(self.bottom_length, COORD_DECIMALS),
        )?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_keeps_requested_precision() {
        assert_eq!(round_to(1.234_56, COORD_DECIMALS), 1.2346);
        assert_eq!(round_to(0.123_456_789, UV_DECIMALS), 0.123457);
        assert_eq!(round_to(-0.000_01, COORD_DECIMALS), 0.0);
        assert!(round_to(-0.000_01, COORD_DECIMALS).is_sign_positive());
    }

    #[test]
    fn test_vertex_serialization_rounds_only_at_boundary() {
        let vertex = MeshVertex {
            x: 10.123_456,
            y: -3.000_04,
            u: 1.0 / 3.0,
            v: 0.5,
        };
        let json = serde_json::to_value(vertex).expect("Serialisierung erwartet");
        assert_eq!(json["x"], serde_json::json!(10.1235));
        assert_eq!(json["y"], serde_json::json!(-3.0));
        assert_eq!(json["u"], serde_json::json!(0.333333));
        assert_eq!(json["v"], serde_json::json!(0.5));
        // Der Vertex selbst behält volle Präzision
        assert_eq!(vertex.u, 1.0 / 3.0);
    }

    #[test]
    fn test_mesh_serializes_as_nested_rows() {
        let vertex = MeshVertex {
            x: 0.0,
            y: 0.0,
            u: 0.0,
            v: 0.0,
        };
        let mesh = Mesh::from_rows(vec![vec![vertex, vertex], vec![vertex, vertex]]);
        let json = serde_json::to_value(&mesh).expect("Serialisierung erwartet");
        let rows = json.as_array().expect("Array erwartet");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_array().map(Vec::len), Some(2));
        assert_eq!(mesh.row_count(), 2);
        assert_eq!(mesh.col_count(), 2);
    }

    #[test]
    fn test_sampled_paths_use_camel_case_keys() {
        let paths = SampledPaths {
            top: vec![DVec2::new(1.000_04, 2.0)],
            bottom: vec![DVec2::new(3.0, 4.0)],
            top_length: 12.345_67,
            bottom_length: 0.0,
        };
        let json = serde_json::to_value(&paths).expect("Serialisierung erwartet");
        assert_eq!(json["top"][0]["x"], serde_json::json!(1.0));
        assert_eq!(json["topLength"], serde_json::json!(12.3457));
        assert_eq!(json["bottomLength"], serde_json::json!(0.0));
    }
}
