//! Tracer: normalisierte Befehle → dichte Polyline.
//!
//! Geraden werden in feste Schritte unterteilt, damit sie vor dem
//! Arc-Length-Resampling eine ähnliche Punktdichte wie Kurven haben.

use crate::core::{Command, CommandKind, Polyline};
use glam::DVec2;
use std::f64::consts::PI;

/// Standard-Unterteilung für Kurven und Bögen.
pub const DEFAULT_CURVE_SEGMENTS: usize = 50;
/// Feste Unterteilung für Geraden.
pub const LINE_SUBDIVISIONS: usize = 10;

/// Zustand eines einzelnen Trace-Laufs. Lebt nur innerhalb von [`trace`].
#[derive(Debug, Clone, Copy)]
struct TraceState {
    current: DVec2,
    /// Referenz für die Spiegelung bei `S`/`T`
    last_control: DVec2,
    subpath_start: DVec2,
}

impl TraceState {
    fn new() -> Self {
        Self {
            current: DVec2::ZERO,
            last_control: DVec2::ZERO,
            subpath_start: DVec2::ZERO,
        }
    }

    /// `2·current − last_control`
    fn reflected_control(&self) -> DVec2 {
        2.0 * self.current - self.last_control
    }
}

/// Tastet eine normalisierte Befehlsfolge ab.
///
/// Erwartet absolute Koordinaten (siehe [`super::normalize`]).
/// Befehle mit zu wenigen Argumenten werden übersprungen.
pub fn trace(commands: &[Command], curve_segments: usize) -> Polyline {
    let segments = curve_segments.max(1);
    let mut state = TraceState::new();
    let mut points = Vec::new();

    for cmd in commands {
        let a = cmd.args.as_slice();
        match cmd.kind {
            CommandKind::MoveTo => {
                let Some(p) = pair(a, 0) else { continue };
                points.push(p);
                state.current = p;
                state.subpath_start = p;
                state.last_control = p;
            }
            CommandKind::LineTo | CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => {
                // H/V sind nach der Normalisierung nicht mehr vorhanden
                let Some(end) = pair(a, 0) else { continue };
                push_line(&mut points, state.current, end);
                state.current = end;
                state.last_control = end;
            }
            CommandKind::CubicCurve => {
                let (Some(p1), Some(p2), Some(p3)) = (pair(a, 0), pair(a, 2), pair(a, 4)) else {
                    continue;
                };
                let p0 = state.current;
                points.extend(
                    (1..=segments).map(|i| cubic_bezier(p0, p1, p2, p3, step(i, segments))),
                );
                state.current = p3;
                state.last_control = p2;
            }
            CommandKind::SmoothCubic => {
                let (Some(p2), Some(p3)) = (pair(a, 0), pair(a, 2)) else {
                    continue;
                };
                let p0 = state.current;
                let p1 = state.reflected_control();
                points.extend(
                    (1..=segments).map(|i| cubic_bezier(p0, p1, p2, p3, step(i, segments))),
                );
                state.current = p3;
                state.last_control = p2;
            }
            CommandKind::QuadCurve => {
                let (Some(p1), Some(p2)) = (pair(a, 0), pair(a, 2)) else {
                    continue;
                };
                let p0 = state.current;
                points.extend(
                    (1..=segments).map(|i| quadratic_bezier(p0, p1, p2, step(i, segments))),
                );
                state.current = p2;
                state.last_control = p1;
            }
            CommandKind::SmoothQuad => {
                let Some(p2) = pair(a, 0) else { continue };
                let p0 = state.current;
                let p1 = state.reflected_control();
                points.extend(
                    (1..=segments).map(|i| quadratic_bezier(p0, p1, p2, step(i, segments))),
                );
                state.current = p2;
                state.last_control = p1;
            }
            CommandKind::Arc => {
                let Some(end) = pair(a, 5) else { continue };
                let arc = arc_to_points(
                    state.current,
                    a[0],
                    a[1],
                    a[2],
                    a[3] != 0.0,
                    a[4] != 0.0,
                    end,
                    segments,
                );
                points.extend(arc.into_iter().skip(1));
                state.current = end;
                state.last_control = end;
            }
            CommandKind::ClosePath => {
                points.push(state.subpath_start);
                state.current = state.subpath_start;
                state.last_control = state.subpath_start;
            }
        }
    }

    points
}

fn pair(args: &[f64], index: usize) -> Option<DVec2> {
    Some(DVec2::new(*args.get(index)?, *args.get(index + 1)?))
}

fn step(i: usize, count: usize) -> f64 {
    i as f64 / count as f64
}

fn push_line(points: &mut Polyline, start: DVec2, end: DVec2) {
    points.extend(
        (1..=LINE_SUBDIVISIONS).map(|i| start.lerp(end, step(i, LINE_SUBDIVISIONS))),
    );
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Tastet einen elliptischen Bogen von `start` nach `end` ab (Endpunkt → Zentrum).
///
/// Liefert `segments + 1` Punkte inklusive `start`. Ist ein Radius 0 oder
/// fallen Start und Ende zusammen, entsteht genau `[start, end]`. Zu kleine
/// Radien werden gleichmäßig vergrößert, bis der Endpunkt erreichbar ist.
/// `x_rotation_deg` in Grad.
#[allow(clippy::too_many_arguments)]
pub fn arc_to_points(
    start: DVec2,
    rx: f64,
    ry: f64,
    x_rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
    end: DVec2,
    segments: usize,
) -> Polyline {
    if rx == 0.0 || ry == 0.0 || start == end {
        return vec![start, end];
    }
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    let segments = segments.max(1);

    let (sin_phi, cos_phi) = x_rotation_deg.to_radians().sin_cos();

    // In das lokale Koordinatensystem der Ellipse drehen
    let half = (start - end) / 2.0;
    let x1p = cos_phi * half.x + sin_phi * half.y;
    let y1p = -sin_phi * half.x + cos_phi * half.y;

    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    let rx_sq = rx * rx;
    let ry_sq = ry * ry;
    let x1p_sq = x1p * x1p;
    let y1p_sq = y1p * y1p;

    let denom = rx_sq * y1p_sq + ry_sq * x1p_sq;
    let mut coef = if denom == 0.0 {
        0.0
    } else {
        ((rx_sq * ry_sq - rx_sq * y1p_sq - ry_sq * x1p_sq) / denom)
            .max(0.0)
            .sqrt()
    };
    if large_arc == sweep {
        coef = -coef;
    }

    let cxp = coef * rx * y1p / ry;
    let cyp = -coef * ry * x1p / rx;
    let mid = (start + end) / 2.0;
    let center = DVec2::new(
        cos_phi * cxp - sin_phi * cyp + mid.x,
        sin_phi * cxp + cos_phi * cyp + mid.y,
    );

    let v1 = DVec2::new((x1p - cxp) / rx, (y1p - cyp) / ry);
    let v2 = DVec2::new((-x1p - cxp) / rx, (-y1p - cyp) / ry);
    let theta_start = vector_angle(DVec2::X, v1);
    let mut theta_delta = vector_angle(v1, v2);

    if !sweep && theta_delta > 0.0 {
        theta_delta -= 2.0 * PI;
    } else if sweep && theta_delta < 0.0 {
        theta_delta += 2.0 * PI;
    }

    let mut points = Vec::with_capacity(segments + 1);
    points.push(start);
    for i in 1..=segments {
        let theta = theta_start + theta_delta * step(i, segments);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let xp = rx * cos_theta;
        let yp = ry * sin_theta;
        points.push(DVec2::new(
            cos_phi * xp - sin_phi * yp + center.x,
            sin_phi * xp + cos_phi * yp + center.y,
        ));
    }
    points
}

/// Vorzeichenbehafteter Winkel von `u` nach `v` (Radiant).
fn vector_angle(u: DVec2, v: DVec2) -> f64 {
    let norm = u.length() * v.length();
    let cos = if norm == 0.0 { 0.0 } else { u.dot(v) / norm };
    let angle = cos.clamp(-1.0, 1.0).acos();
    if u.perp_dot(v) < 0.0 {
        -angle
    } else {
        angle
    }
}
