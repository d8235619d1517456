//! Zentrale Konfiguration des Shape-Preprocessors.
//!
//! `PreprocessOptions` enthält alle per TOML oder CLI änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::GridSize;
use serde::{Deserialize, Serialize};

// ── Mesh-Auflösung ─────────────────────────────────────────────────

/// Spalten des Vorschau-Meshes (Zellen).
pub const PREVIEW_COLS: usize = 50;
/// Zeilen des Vorschau-Meshes (Zellen).
pub const PREVIEW_ROWS: usize = 20;
/// Spalten des Export-Meshes (Zellen).
pub const EXPORT_COLS: usize = 120;
/// Zeilen des Export-Meshes (Zellen).
pub const EXPORT_ROWS: usize = 50;

// ── Sampling ────────────────────────────────────────────────────────

/// Anzahl Intervalle der exportierten Roh-Pfade (`sampledPaths`).
pub const SAMPLED_PATH_COUNT: usize = 500;
/// Stützstellen des Arc-Length-Index für die Mesh-Erzeugung.
pub const INDEX_SAMPLES: usize = 2000;
/// Segmente pro Bézier-/Bogen-Abschnitt beim Tracen.
pub const CURVE_SEGMENTS: usize = crate::path::DEFAULT_CURVE_SEGMENTS;

// ── Datei ───────────────────────────────────────────────────────────

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "shape_warp_mesh.toml";

/// Verhalten bei einem fehlerhaften Shape im Batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Warnung loggen, Shape unverändert durchreichen
    #[default]
    Skip,
    /// Gesamten Lauf mit dem Fehler abbrechen
    Abort,
}

/// Alle änderbaren Preprocessor-Optionen.
/// Fehlende Schlüssel in der TOML-Datei erhalten ihren Standardwert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    // ── Meshes ──────────────────────────────────────────────────
    /// Vorschau-Mesh: Spalten
    pub preview_cols: usize,
    /// Vorschau-Mesh: Zeilen
    pub preview_rows: usize,
    /// Export-Mesh: Spalten
    pub export_cols: usize,
    /// Export-Mesh: Zeilen
    pub export_rows: usize,

    // ── Sampling ────────────────────────────────────────────────
    /// Intervalle der exportierten Roh-Pfade
    pub sampled_path_count: usize,
    /// Stützstellen des Arc-Length-Index
    pub index_samples: usize,
    /// Segmente pro Kurvenabschnitt
    pub curve_segments: usize,

    // ── Fehler ──────────────────────────────────────────────────
    pub error_policy: ErrorPolicy,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            preview_cols: PREVIEW_COLS,
            preview_rows: PREVIEW_ROWS,
            export_cols: EXPORT_COLS,
            export_rows: EXPORT_ROWS,
            sampled_path_count: SAMPLED_PATH_COUNT,
            index_samples: INDEX_SAMPLES,
            curve_segments: CURVE_SEGMENTS,
            error_policy: ErrorPolicy::Skip,
        }
    }
}

impl PreprocessOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("shape-warp-mesh"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    pub fn preview_grid(&self) -> GridSize {
        GridSize::new(self.preview_cols, self.preview_rows)
    }

    pub fn export_grid(&self) -> GridSize {
        GridSize::new(self.export_cols, self.export_rows)
    }
}
