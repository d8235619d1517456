use super::*;
use crate::path::{trace_path, DEFAULT_CURVE_SEGMENTS};
use approx::assert_abs_diff_eq;
use glam::DVec2;

fn index(text: &str) -> ArcLengthIndex {
    let polyline = trace_path(text, DEFAULT_CURVE_SEGMENTS).expect("Pfad sollte gültig sein");
    ArcLengthIndex::new(&polyline, 2000)
}

fn vertex(x: f64, y: f64, u: f64, v: f64) -> MeshVertex {
    MeshVertex { x, y, u, v }
}

#[test]
fn test_two_parallel_lines_unit_grid() {
    let top = index("M0,0 L100,0");
    let bottom = index("M0,50 L100,50");
    let mesh = MeshBlender::new(&top, &bottom, BlendOptions::default(), GridSize::new(1, 1))
        .generate_mesh();

    assert_eq!(
        mesh.rows(),
        &[
            vec![vertex(0.0, 0.0, 0.0, 0.0), vertex(100.0, 0.0, 1.0, 0.0)],
            vec![vertex(0.0, 50.0, 0.0, 1.0), vertex(100.0, 50.0, 1.0, 1.0)],
        ]
    );
}

#[test]
fn test_reversed_top_with_single_row() {
    let top = index("M0,0 L100,0");
    let bottom = index("M0,50 L100,50");
    let options = BlendOptions {
        top_reversed: true,
        bottom_reversed: false,
    };
    let mesh = MeshBlender::new(&top, &bottom, options, GridSize::new(1, 0)).generate_mesh();

    assert_eq!(
        mesh.rows(),
        &[vec![
            vertex(100.0, 0.0, 0.0, 0.0),
            vertex(0.0, 0.0, 1.0, 0.0)
        ]]
    );
}

#[test]
fn test_mesh_dimensions_follow_grid() {
    let top = index("M 835.96,162.42 C 597.61,-50.29 240.85,-53.15 1.37,162.42");
    let bottom = index("M 73.32,242.27 C 283.84,56.41 576.84,75.5 764.01,242.27");

    for (cols, rows) in [(1, 1), (50, 20), (120, 50), (7, 0), (0, 3)] {
        let mesh = MeshBlender::new(
            &top,
            &bottom,
            BlendOptions::default(),
            GridSize::new(cols, rows),
        )
        .generate_mesh();
        assert_eq!(mesh.row_count(), rows + 1, "Grid {cols}x{rows}");
        assert!(
            mesh.rows().iter().all(|r| r.len() == cols + 1),
            "Grid {cols}x{rows}"
        );
    }
}

#[test]
fn test_uv_span_unit_square() {
    let top = index("M0,0 L10,0");
    let bottom = index("M0,10 L10,10");
    let mesh = MeshBlender::new(&top, &bottom, BlendOptions::default(), GridSize::new(4, 5))
        .generate_mesh();

    for (r, row) in mesh.rows().iter().enumerate() {
        for (c, vtx) in row.iter().enumerate() {
            assert_abs_diff_eq!(vtx.u, c as f64 / 4.0, epsilon = 1e-12);
            assert_abs_diff_eq!(vtx.v, r as f64 / 5.0, epsilon = 1e-12);
            assert!((0.0..=1.0).contains(&vtx.u));
            assert!((0.0..=1.0).contains(&vtx.v));
        }
    }
}

#[test]
fn test_middle_row_is_average_of_curves() {
    let top = index("M0,0 Q50,-40 100,0");
    let bottom = index("M0,100 Q50,60 100,100");
    let mesh = MeshBlender::new(&top, &bottom, BlendOptions::default(), GridSize::new(10, 2))
        .generate_mesh();

    for (col, vtx) in mesh.rows()[1].iter().enumerate() {
        let u = col as f64 / 10.0;
        let expected = (top.point_at(u) + bottom.point_at(u)) / 2.0;
        assert_abs_diff_eq!(vtx.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(vtx.y, expected.y, epsilon = 1e-9);
    }
}

#[test]
fn test_reversal_flags_align_opposite_curves() {
    // Untere Kurve läuft von rechts nach links
    let top = index("M0,0 L100,0");
    let bottom = index("M100,50 L0,50");
    let options = BlendOptions {
        top_reversed: false,
        bottom_reversed: true,
    };
    let mesh = MeshBlender::new(&top, &bottom, options, GridSize::new(4, 1)).generate_mesh();

    for vtx in &mesh.rows()[1] {
        assert_abs_diff_eq!(vtx.x, 100.0 * vtx.u, epsilon = 1e-9);
        assert_abs_diff_eq!(vtx.y, 50.0, epsilon = 1e-9);
    }
}

#[test]
fn test_degenerate_curve_collapses_to_origin() {
    let top = index("M0,0 L100,0");
    let bottom = index("M30,30");
    assert!(bottom.is_empty());

    let mesh = MeshBlender::new(&top, &bottom, BlendOptions::default(), GridSize::new(2, 1))
        .generate_mesh();
    assert!(mesh.rows()[1].iter().all(|v| v.position() == DVec2::ZERO));
    assert_abs_diff_eq!(mesh.rows()[0][1].x, 50.0, epsilon = 1e-9);
}

#[test]
fn test_sample_curves_ignores_reversal() {
    let top = index("M0,0 L100,0");
    let bottom = index("M0,50 L200,50");
    let options = BlendOptions {
        top_reversed: true,
        bottom_reversed: true,
    };
    let paths = MeshBlender::new(&top, &bottom, options, GridSize::new(1, 1)).sample_curves(4);

    assert_eq!(paths.top.len(), 5);
    assert_eq!(paths.bottom.len(), 5);
    assert_eq!(paths.top[0], DVec2::new(0.0, 0.0));
    assert_eq!(paths.bottom[4], DVec2::new(200.0, 50.0));
    assert_abs_diff_eq!(paths.top[1].x, 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(paths.top_length, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(paths.bottom_length, 200.0, epsilon = 1e-9);
}
