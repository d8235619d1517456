//! Arc-Length-Parametrisierung einer Polyline.
//!
//! [`ArcLengthTable`] hält die kumulierte Sehnenlänge der rohen Tracer-Punkte,
//! [`ArcLengthIndex`] die daraus gleichmäßig neu gesampelten Punkte und
//! beantwortet "Punkt bei Anteil f der Gesamtlänge" per Binärsuche.
//!
//! Eine Kurve der Länge 0 ist kein Fehler: der Index ist dann leer und jede
//! Abfrage liefert den Ursprung.

use glam::DVec2;

/// Kumulierte Länge entlang einer Polyline. Erster Eintrag ist 0, monoton steigend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArcLengthTable {
    points: Vec<DVec2>,
    lengths: Vec<f64>,
}

impl ArcLengthTable {
    /// Summiert die euklidischen Segmentlängen auf.
    pub fn from_polyline(polyline: &[DVec2]) -> Self {
        let mut lengths = Vec::with_capacity(polyline.len());
        let mut cumulative = 0.0;
        if !polyline.is_empty() {
            lengths.push(0.0);
        }
        for w in polyline.windows(2) {
            cumulative += w[0].distance(w[1]);
            lengths.push(cumulative);
        }
        Self {
            points: polyline.to_vec(),
            lengths,
        }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gesamtlänge (0 bei weniger als zwei Punkten).
    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Punkt bei kumulierter Länge `target`, linear zwischen den Stützstellen.
    ///
    /// Erwartet mindestens einen Punkt.
    fn point_at_length(&self, target: f64) -> DVec2 {
        interpolate_at_length(&self.points, &self.lengths, target)
    }
}

/// Gleichmäßig nach Bogenlänge gesampelte Kurve.
///
/// Enthält `num_samples + 1` Stützstellen bei `i / num_samples · total_length`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArcLengthIndex {
    points: Vec<DVec2>,
    lengths: Vec<f64>,
    total_length: f64,
}

impl ArcLengthIndex {
    /// Baut den Index aus einer Tracer-Polyline. `num_samples == 0` gilt als 1.
    pub fn new(polyline: &[DVec2], num_samples: usize) -> Self {
        let table = ArcLengthTable::from_polyline(polyline);
        let total_length = table.total_length();

        if table.len() < 2 || total_length <= 0.0 {
            return Self {
                points: Vec::new(),
                lengths: Vec::new(),
                total_length,
            };
        }

        let num_samples = num_samples.max(1);
        let mut points = Vec::with_capacity(num_samples + 1);
        let mut lengths = Vec::with_capacity(num_samples + 1);
        for i in 0..=num_samples {
            let target = (i as f64 / num_samples as f64) * total_length;
            points.push(table.point_at_length(target));
            lengths.push(target);
        }

        Self {
            points,
            lengths,
            total_length,
        }
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// true = Kurve ohne Länge, alle Abfragen liefern den Ursprung
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Die gleichmäßig verteilten Stützstellen.
    pub fn samples(&self) -> &[DVec2] {
        &self.points
    }

    /// Punkt bei Anteil `fraction` der Gesamtlänge (auf [0, 1] geklemmt).
    pub fn point_at(&self, fraction: f64) -> DVec2 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return DVec2::ZERO;
        };

        let fraction = fraction.clamp(0.0, 1.0);
        if fraction == 0.0 {
            return *first;
        }
        if fraction == 1.0 {
            return *last;
        }

        interpolate_at_length(&self.points, &self.lengths, fraction * self.total_length)
    }

    /// `count + 1` Punkte bei `i / count` (`count == 0` gilt als 1).
    pub fn sample_uniform(&self, count: usize) -> Vec<DVec2> {
        let count = count.max(1);
        (0..=count)
            .map(|i| self.point_at(i as f64 / count as f64))
            .collect()
    }
}

/// Binärsuche nach dem größten Index mit `lengths[i] <= target`, dann lineare
/// Interpolation zum Folgepunkt. Ein Intervall der Länge 0 liefert den unteren Punkt.
fn interpolate_at_length(points: &[DVec2], lengths: &[f64], target: f64) -> DVec2 {
    let last = points.len() - 1;
    if target <= 0.0 {
        return points[0];
    }
    if target >= lengths[last] {
        return points[last];
    }

    let lo = lengths.partition_point(|&len| len <= target).saturating_sub(1);
    let hi = (lo + 1).min(last);

    let span = lengths[hi] - lengths[lo];
    if span <= 0.0 {
        return points[lo];
    }
    let t = (target - lengths[lo]) / span;
    points[lo].lerp(points[hi], t)
}
