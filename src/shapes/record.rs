//! Shape-Datensatz: beliebige Metadaten plus die beiden Profil-Pfade.
//!
//! Alle Felder werden in Original-Reihenfolge gehalten und unverändert
//! weitergereicht. Nur `topPath`, `bottomPath`, `uploadDimensions` und die
//! Umkehr-Flags werden gelesen.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mesh::BlendOptions;

/// Quellbreite, wenn `uploadDimensions.width` fehlt
pub const DEFAULT_SOURCE_WIDTH: f64 = 1000.0;
/// Quellhöhe, wenn `uploadDimensions.height` fehlt
pub const DEFAULT_SOURCE_HEIGHT: f64 = 500.0;

pub const TOP_PATH_KEY: &str = "topPath";
pub const BOTTOM_PATH_KEY: &str = "bottomPath";
const UPLOAD_DIMENSIONS_KEY: &str = "uploadDimensions";
const TOP_REVERSED_KEY: &str = "topIsReversed";
const BOTTOM_REVERSED_KEY: &str = "bottomIsReversed";

/// Shapes nach ID, in Eingabe-Reihenfolge
pub type ShapeMap = IndexMap<String, ShapeRecord>;

/// Abmessungen des hochgeladenen Quellbildes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceDimensions {
    pub width: f64,
    pub height: f64,
}

/// Ein Shape aus der Eingabe-JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeRecord {
    fields: Map<String, Value>,
}

impl ShapeRecord {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Baut einen minimalen Datensatz aus zwei Pfaden.
    pub fn with_paths(top_path: &str, bottom_path: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(TOP_PATH_KEY.into(), Value::from(top_path));
        fields.insert(BOTTOM_PATH_KEY.into(), Value::from(bottom_path));
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Setzt ein Feld; ein vorhandener Schlüssel behält seine Position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn top_path(&self) -> Option<&str> {
        self.fields.get(TOP_PATH_KEY).and_then(Value::as_str)
    }

    pub fn bottom_path(&self) -> Option<&str> {
        self.fields.get(BOTTOM_PATH_KEY).and_then(Value::as_str)
    }

    /// true = beide Profil-Pfade vorhanden, der Datensatz wird verarbeitet
    pub fn has_curves(&self) -> bool {
        self.top_path().is_some() && self.bottom_path().is_some()
    }

    pub fn top_is_reversed(&self) -> bool {
        self.flag(TOP_REVERSED_KEY)
    }

    pub fn bottom_is_reversed(&self) -> bool {
        self.flag(BOTTOM_REVERSED_KEY)
    }

    pub fn blend_options(&self) -> BlendOptions {
        BlendOptions {
            top_reversed: self.top_is_reversed(),
            bottom_reversed: self.bottom_is_reversed(),
        }
    }

    /// Quellbild-Abmessungen, fehlende Werte fallen auf 1000×500 zurück.
    pub fn source_dimensions(&self) -> SourceDimensions {
        let dims = self.fields.get(UPLOAD_DIMENSIONS_KEY);
        let read = |key: &str, default: f64| {
            dims.and_then(|d| d.get(key))
                .and_then(Value::as_f64)
                .unwrap_or(default)
        };
        SourceDimensions {
            width: read("width", DEFAULT_SOURCE_WIDTH),
            height: read("height", DEFAULT_SOURCE_HEIGHT),
        }
    }

    fn flag(&self, key: &str) -> bool {
        self.fields
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
