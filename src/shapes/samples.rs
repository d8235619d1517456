//! Eingebaute Beispiel-Shapes für Läufe ohne Eingabedatei.

use serde_json::json;

use super::record::{ShapeMap, ShapeRecord};

/// Die zwei Referenz-Becher `250ml_round` und `300ml_round`.
pub fn sample_shapes() -> ShapeMap {
    let samples = [
        (
            "250ml_round",
            json!({
                "type": "round",
                "view": "bottom",
                "name": "250ml Round",
                "width": 837,
                "height": 244,
                "uploadDimensions": { "width": 2908, "height": 448 },
                "path": "M1.37,162.42L73.32,242.27C283.84,56.41,576.84,75.5,764.01,242.27L835.96,162.42C597.61,-50.29,240.85,-53.15,1.37,162.42Z",
                "topPath": "M 835.96,162.42 C 597.61,-50.29 240.85,-53.15 1.37,162.42",
                "bottomPath": "M 73.32,242.27 C 283.84,56.41 576.84,75.5 764.01,242.27",
                "topIsReversed": true,
                "bottomIsReversed": false,
                "modelPath": "./assets/models/250ml_round_t.glb",
                "targetMaterials": ["Texture"]
            }),
        ),
        (
            "300ml_round",
            json!({
                "type": "round",
                "view": "bottom",
                "name": "300ml Round",
                "width": 986.98,
                "height": 332.17,
                "uploadDimensions": { "width": 2906, "height": 448 },
                "path": "M892.85,294.57c-257.8-94.83-540.94-94.83-798.75,0l-5.32,1.98-45.71-122.15,6.01-2.21c286.86-105.52,601.92-105.52,888.78,0l6.04,2.15-45.75,122.2-5.3-1.98Z",
                "topPath": "M49.08,172.19c286.86-105.52,601.92-105.52,888.78,0",
                "bottomPath": "M892.85,294.57c-257.8-94.83-540.94-94.83-798.75,0",
                "topIsReversed": false,
                "bottomIsReversed": true,
                "modelPath": "./assets/models/300ml_round_container.glb",
                "targetMaterials": ["Texture"]
            }),
        ),
    ];

    samples
        .into_iter()
        .filter_map(|(id, value)| match value {
            serde_json::Value::Object(fields) => {
                Some((id.to_string(), ShapeRecord::from_fields(fields)))
            }
            _ => None,
        })
        .collect()
}
