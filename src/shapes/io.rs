//! Lesen der Shape-Definitionen und Schreiben des Ausgabe-Dokuments.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::processor::PreprocessedDocument;
use super::record::ShapeMap;

/// Lädt eine Shape-Map (`{shapeId: {...}}`) aus einer JSON-Datei.
pub fn load_shapes(path: &Path) -> anyhow::Result<ShapeMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Shape-Datei nicht lesbar: {}", path.display()))?;
    let shapes = parse_shapes(&content)
        .with_context(|| format!("Shape-Datei ungültig: {}", path.display()))?;
    log::info!("{} Shapes geladen aus: {}", shapes.len(), path.display());
    Ok(shapes)
}

/// Parst eine Shape-Map aus einem JSON-String.
pub fn parse_shapes(json: &str) -> anyhow::Result<ShapeMap> {
    serde_json::from_str(json).context("JSON ist keine Shape-Map")
}

/// Pfad der minifizierten Variante: `.json` wird zu `.min.json`,
/// sonst wird `.min.json` angehängt.
pub fn minified_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "json") {
        return path.with_extension("min.json");
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".min.json");
    PathBuf::from(name)
}

/// Schreibt das Dokument formatiert nach `path` und minifiziert daneben.
///
/// Gibt beide Pfade zurück (formatiert, minifiziert).
pub fn write_output(
    document: &PreprocessedDocument,
    path: &Path,
) -> anyhow::Result<(PathBuf, PathBuf)> {
    let pretty = serde_json::to_string_pretty(document).context("Serialisierung fehlgeschlagen")?;
    let minified = serde_json::to_string(document).context("Serialisierung fehlgeschlagen")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Verzeichnis nicht anlegbar: {}", parent.display()))?;
    }

    std::fs::write(path, pretty)
        .with_context(|| format!("Ausgabe nicht schreibbar: {}", path.display()))?;
    log::info!("Geschrieben: {}", path.display());

    let min_path = minified_path(path);
    std::fs::write(&min_path, minified)
        .with_context(|| format!("Ausgabe nicht schreibbar: {}", min_path.display()))?;
    log::info!("Geschrieben: {}", min_path.display());

    Ok((path.to_path_buf(), min_path))
}
