//! Geteilte Konfiguration für Bibliothek und Binary.

pub mod options;

pub use options::{ErrorPolicy, PreprocessOptions};
