//! Mesh-Blender: verschmilzt zwei nach Bogenlänge parametrisierte Kurven
//! zu einem Vertex-Grid.
//!
//! Reiner bilinearer Blend zwischen zwei unabhängig parametrisierten
//! 1D-Kurven, kein geometrisches Morphing. Beide Kurven müssen nach
//! Anwendung der Umkehr-Flags grob gleichgerichtet sein.

use crate::core::{GridSize, Mesh, MeshVertex, SampledPaths};
use crate::sampling::ArcLengthIndex;

/// Laufrichtung der beiden Kurven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlendOptions {
    /// Obere Kurve rückwärts ablaufen (`t = 1 - u`)
    pub top_reversed: bool,
    /// Untere Kurve rückwärts ablaufen (`t = 1 - u`)
    pub bottom_reversed: bool,
}

/// Blendet zwischen oberer und unterer Kurve.
#[derive(Debug, Clone, Copy)]
pub struct MeshBlender<'a> {
    top: &'a ArcLengthIndex,
    bottom: &'a ArcLengthIndex,
    options: BlendOptions,
    grid: GridSize,
}

impl<'a> MeshBlender<'a> {
    pub fn new(
        top: &'a ArcLengthIndex,
        bottom: &'a ArcLengthIndex,
        options: BlendOptions,
        grid: GridSize,
    ) -> Self {
        Self {
            top,
            bottom,
            options,
            grid,
        }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Erzeugt `rows + 1` Zeilen à `cols + 1` Vertices.
    ///
    /// Zeile 0 liegt auf der oberen Kurve (`v = 0`), die letzte auf der unteren (`v = 1`).
    pub fn generate_mesh(&self) -> Mesh {
        let GridSize { cols, rows } = self.grid;
        let mut mesh_rows = Vec::with_capacity(rows + 1);

        for row in 0..=rows {
            let v = grid_fraction(row, rows);
            let mut vertices = Vec::with_capacity(cols + 1);

            for col in 0..=cols {
                let u = grid_fraction(col, cols);
                let t_top = directed(u, self.options.top_reversed);
                let t_bottom = directed(u, self.options.bottom_reversed);

                let p = self.top.point_at(t_top);
                let q = self.bottom.point_at(t_bottom);
                let position = p.lerp(q, v);

                vertices.push(MeshVertex {
                    x: position.x,
                    y: position.y,
                    u,
                    v,
                });
            }
            mesh_rows.push(vertices);
        }

        Mesh::from_rows(mesh_rows)
    }

    /// Roh-Punkte beider Kurven bei `i / num_samples`, ohne Umkehr-Flags.
    pub fn sample_curves(&self, num_samples: usize) -> SampledPaths {
        SampledPaths {
            top: self.top.sample_uniform(num_samples),
            bottom: self.bottom.sample_uniform(num_samples),
            top_length: self.top.total_length(),
            bottom_length: self.bottom.total_length(),
        }
    }
}

/// `index / count`; bei `count == 0` gibt es nur die Position 0.
fn grid_fraction(index: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        index as f64 / count as f64
    }
}

fn directed(u: f64, reversed: bool) -> f64 {
    let t = if reversed { 1.0 - u } else { u };
    t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests;
