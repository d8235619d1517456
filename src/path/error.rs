//! Syntaxfehler beim Parsen eines Pfad-Strings.

use thiserror::Error;

/// Fehler des Pfad-Parsers. `position` ist der Byte-Offset im Eingabe-String.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("unerwartetes Zeichen '{character}' an Position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("Zahl an Position {position} steht vor dem ersten Befehl")]
    MissingCommand { position: usize },

    #[error("ungueltige Zahl '{literal}' an Position {position}")]
    InvalidNumber { literal: String, position: usize },

    #[error(
        "Befehl '{letter}' an Position {position} erwartet {arity} Argumente pro Aufruf, erhalten: {count}"
    )]
    BadArity {
        letter: char,
        position: usize,
        arity: usize,
        count: usize,
    },
}
