//! Integrationstests für Datei-Ein-/Ausgabe:
//! Fixture laden → verarbeiten → formatiert und minifiziert schreiben.

use serde_json::Value;
use shape_warp_mesh::{
    load_shapes, preprocess_shapes, sample_shapes, write_output, PreprocessOptions,
    PreprocessedDocument,
};
use std::path::Path;

fn fixture_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/shapes.json"))
}

fn has_at_most_decimals(value: f64, decimals: i32) -> bool {
    let factor = 10f64.powi(decimals);
    ((value * factor).round() / factor - value).abs() < 1e-9
}

#[test]
fn test_fixture_wird_geschrieben_und_gerundet() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let shapes = load_shapes(fixture_path()).expect("Fixture lesbar");
    let processed = preprocess_shapes(shapes, &PreprocessOptions::default()).expect("Batch");
    let document = PreprocessedDocument::new(processed);

    let target = dir.path().join("shapes_preprocessed.json");
    let (pretty, minified) = write_output(&document, &target).expect("Schreiben erwartet");
    assert!(pretty.exists());
    assert!(minified.exists());
    assert!(minified.ends_with("shapes_preprocessed.min.json"));

    let json: Value =
        serde_json::from_str(&std::fs::read_to_string(&minified).expect("Lesen erwartet"))
            .expect("JSON gültig");
    assert_eq!(json["version"], "2.0");
    assert_eq!(json["generated"], true);

    let mesh = json["shapes"]["smooth_tub"]["previewMesh"]
        .as_array()
        .expect("Mesh-Array");
    assert_eq!(mesh.len(), 21);
    for vertex in mesh.iter().flat_map(|row| row.as_array().into_iter().flatten()) {
        for (key, decimals) in [("x", 4), ("y", 4), ("u", 6), ("v", 6)] {
            let value = vertex[key].as_f64().expect("Zahl erwartet");
            assert!(has_at_most_decimals(value, decimals), "{key} = {value}");
        }
    }

    // Metadaten ohne Profile bleiben unverändert
    assert_eq!(
        json["shapes"]["lid"],
        serde_json::json!({
            "type": "flat",
            "name": "Deckel ohne Profile",
            "modelPath": "./assets/models/lid.glb"
        })
    );
}

#[test]
fn test_beispiel_shapes_vollstaendiger_lauf() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let processed =
        preprocess_shapes(sample_shapes(), &PreprocessOptions::default()).expect("Batch");
    let (pretty, _) = write_output(
        &PreprocessedDocument::new(processed),
        &dir.path().join("beispiel.json"),
    )
    .expect("Schreiben erwartet");

    let json: Value =
        serde_json::from_str(&std::fs::read_to_string(pretty).expect("Lesen erwartet"))
            .expect("JSON gültig");
    let shape = &json["shapes"]["300ml_round"];
    assert_eq!(shape["name"], "300ml Round");
    assert_eq!(
        shape["meshConfig"],
        serde_json::json!({"previewCols": 50, "previewRows": 20, "exportCols": 120, "exportRows": 50})
    );
    assert_eq!(shape["sampledPaths"]["bottom"].as_array().map(Vec::len), Some(501));
    assert!(shape["sampledPaths"]["topLength"].as_f64().expect("Länge") > 800.0);
}

#[test]
fn test_ungueltige_eingabe_liefert_kontext() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join("kaputt.json");
    std::fs::write(&path, "{ nicht json").expect("Schreiben erwartet");

    let err = load_shapes(&path).expect_err("Fehler erwartet");
    let message = format!("{err:#}");
    assert!(message.contains("kaputt.json"), "{message}");
}
