//! Shape Warp Mesh Preprocessor.
//!
//! Liest Shape-Definitionen (oder die eingebauten Beispiele), erzeugt pro
//! Shape Vorschau- und Export-Mesh und schreibt das Ergebnis als JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shape_warp_mesh::{
    load_shapes, preprocess_shapes, sample_shapes, write_output, ErrorPolicy, PreprocessOptions,
    PreprocessedDocument,
};

/// Preprocessing von Shapes zu Warp-Meshes
#[derive(Parser, Debug)]
#[command(name = "shape-warp-mesh")]
#[command(about = "Erzeugt Warp-Meshes aus SVG-Profilpfaden", long_about = None)]
#[command(version)]
struct Cli {
    /// Eingabe-JSON mit Shapes (ohne Angabe: Beispiel-Shapes)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Ausgabe-JSON; die minifizierte Variante landet daneben
    #[arg(short, long, default_value = "shapes_preprocessed.json")]
    output: PathBuf,

    /// Spalten des Vorschau-Meshes
    #[arg(long)]
    preview_cols: Option<usize>,

    /// Zeilen des Vorschau-Meshes
    #[arg(long)]
    preview_rows: Option<usize>,

    /// Spalten des Export-Meshes
    #[arg(long)]
    export_cols: Option<usize>,

    /// Zeilen des Export-Meshes
    #[arg(long)]
    export_rows: Option<usize>,

    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(long)]
    config: Option<PathBuf>,

    /// Eingebaute Beispiel-Shapes verarbeiten
    #[arg(long, conflicts_with = "input")]
    samples: bool,

    /// Beim ersten fehlerhaften Shape abbrechen statt es zu überspringen
    #[arg(long)]
    fail_fast: bool,
}

impl Cli {
    /// Optionen aus Datei laden und mit CLI-Werten überschreiben.
    fn options(&self) -> PreprocessOptions {
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(PreprocessOptions::config_path);
        let mut options = PreprocessOptions::load_from_file(&config_path);

        if let Some(cols) = self.preview_cols {
            options.preview_cols = cols;
        }
        if let Some(rows) = self.preview_rows {
            options.preview_rows = rows;
        }
        if let Some(cols) = self.export_cols {
            options.export_cols = cols;
        }
        if let Some(rows) = self.export_rows {
            options.export_rows = rows;
        }
        if self.fail_fast {
            options.error_policy = ErrorPolicy::Abort;
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    log::info!("Shape Warp Mesh v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = cli.options();
    log::debug!("Optionen: {:?}", options);

    let shapes = match &cli.input {
        Some(path) if !cli.samples => load_shapes(path)?,
        _ => {
            log::info!("Keine Eingabedatei angegeben, verwende Beispiel-Shapes");
            sample_shapes()
        }
    };

    let processed =
        preprocess_shapes(shapes, &options).context("Verarbeitung der Shapes abgebrochen")?;
    let document = PreprocessedDocument::new(processed);
    let (pretty, minified) = write_output(&document, &cli.output)?;

    log::info!(
        "{} Shapes verarbeitet: {}, {}",
        document.shapes.len(),
        pretty.display(),
        minified.display()
    );
    Ok(())
}
