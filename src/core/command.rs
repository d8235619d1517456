//! Zeichenbefehle eines Pfad-Strings (M, L, H, V, C, S, Q, T, A, Z).

/// Art eines Zeichenbefehls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M`: neuer Subpfad
    MoveTo,
    /// `L`: Gerade
    LineTo,
    /// `H`: horizontale Gerade (nur vor der Normalisierung)
    HorizontalLineTo,
    /// `V`: vertikale Gerade (nur vor der Normalisierung)
    VerticalLineTo,
    /// `C`: kubische Bézier
    CubicCurve,
    /// `S`: kubische Bézier mit gespiegeltem erstem Steuerpunkt
    SmoothCubic,
    /// `Q`: quadratische Bézier
    QuadCurve,
    /// `T`: quadratische Bézier mit gespiegeltem Steuerpunkt
    SmoothQuad,
    /// `A`: elliptischer Bogen
    Arc,
    /// `Z`: Subpfad schließen
    ClosePath,
}

impl CommandKind {
    /// Ordnet einen Befehlsbuchstaben zu. Gibt `(kind, relativ)` zurück.
    pub fn from_letter(letter: char) -> Option<(Self, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalLineTo,
            'V' => Self::VerticalLineTo,
            'C' => Self::CubicCurve,
            'S' => Self::SmoothCubic,
            'Q' => Self::QuadCurve,
            'T' => Self::SmoothQuad,
            'A' => Self::Arc,
            'Z' => Self::ClosePath,
            _ => return None,
        };
        Some((kind, letter.is_ascii_lowercase()))
    }

    /// Absoluter Befehlsbuchstabe (Großschreibung).
    pub fn letter(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CubicCurve => 'C',
            Self::SmoothCubic => 'S',
            Self::QuadCurve => 'Q',
            Self::SmoothQuad => 'T',
            Self::Arc => 'A',
            Self::ClosePath => 'Z',
        }
    }

    /// Feste Anzahl Zahlen pro Aufruf.
    pub fn arity(self) -> usize {
        match self {
            Self::HorizontalLineTo | Self::VerticalLineTo => 1,
            Self::MoveTo | Self::LineTo | Self::SmoothQuad => 2,
            Self::SmoothCubic | Self::QuadCurve => 4,
            Self::CubicCurve => 6,
            Self::Arc => 7,
            Self::ClosePath => 0,
        }
    }
}

/// Ein einzelner Zeichenbefehl mit seinen Argumenten
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Befehlsart
    pub kind: CommandKind,
    /// true = Koordinaten relativ zum aktuellen Punkt
    pub relative: bool,
    /// Argumente in Eingabereihenfolge (Länge = `kind.arity()`)
    pub args: Vec<f64>,
}

impl Command {
    /// Erstellt einen absoluten Befehl
    pub fn absolute(kind: CommandKind, args: Vec<f64>) -> Self {
        Self {
            kind,
            relative: false,
            args,
        }
    }

    /// Erstellt einen relativen Befehl
    pub fn relative(kind: CommandKind, args: Vec<f64>) -> Self {
        Self {
            kind,
            relative: true,
            args,
        }
    }
}
