//! Normalisierung: relative Koordinaten → absolut, `H`/`V` → `L`.

use crate::core::{Command, CommandKind};
use glam::DVec2;

/// Wandelt alle Befehle in absolute Primitive um.
///
/// Nach dem Aufruf ist `relative == false` für jeden Befehl, und
/// `HorizontalLineTo`/`VerticalLineTo` sind zu `LineTo` aufgelöst.
pub fn normalize(commands: &[Command]) -> Vec<Command> {
    let mut current = DVec2::ZERO;
    let mut subpath_start = DVec2::ZERO;
    let mut result = Vec::with_capacity(commands.len());

    for cmd in commands {
        let offset = if cmd.relative { current } else { DVec2::ZERO };
        let mut args = cmd.args.clone();

        let kind = match cmd.kind {
            CommandKind::MoveTo => {
                translate_pairs(&mut args, offset);
                current = last_pair(&args).unwrap_or(current);
                subpath_start = current;
                CommandKind::MoveTo
            }
            CommandKind::HorizontalLineTo => {
                let x = args.first().copied().unwrap_or(0.0) + offset.x;
                args = vec![x, current.y];
                current = DVec2::new(x, current.y);
                CommandKind::LineTo
            }
            CommandKind::VerticalLineTo => {
                let y = args.first().copied().unwrap_or(0.0) + offset.y;
                args = vec![current.x, y];
                current = DVec2::new(current.x, y);
                CommandKind::LineTo
            }
            kind @ (CommandKind::LineTo
            | CommandKind::CubicCurve
            | CommandKind::SmoothCubic
            | CommandKind::QuadCurve
            | CommandKind::SmoothQuad) => {
                translate_pairs(&mut args, offset);
                current = last_pair(&args).unwrap_or(current);
                kind
            }
            CommandKind::Arc => {
                // Nur der Endpunkt ist eine Koordinate; Radien, Rotation und Flags nicht
                if args.len() >= 7 {
                    args[5] += offset.x;
                    args[6] += offset.y;
                    current = DVec2::new(args[5], args[6]);
                }
                CommandKind::Arc
            }
            CommandKind::ClosePath => {
                current = subpath_start;
                CommandKind::ClosePath
            }
        };

        result.push(Command::absolute(kind, args));
    }

    result
}

fn translate_pairs(args: &mut [f64], offset: DVec2) {
    for pair in args.chunks_exact_mut(2) {
        pair[0] += offset.x;
        pair[1] += offset.y;
    }
}

fn last_pair(args: &[f64]) -> Option<DVec2> {
    match args {
        [.., x, y] => Some(DVec2::new(*x, *y)),
        _ => None,
    }
}
