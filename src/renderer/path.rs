//! Path commands for filling a render-space outline
//!
//! Straight vertices become line segments. An arc vertex rounds the corner
//! toward the next vertex with a radius equal to that edge's length.

use glam::Vec2;

use crate::geom::Vertex;

/// One drawing-surface path operation, in render space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    ArcTo { corner: Vec2, end: Vec2, radius: f32 },
    Close,
}

/// Closed fill path for a render-space outline
pub fn fill_path(vertices: &[Vertex]) -> Vec<PathCommand> {
    let Some(first) = vertices.first() else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(vertices.len() + 2);
    commands.push(PathCommand::MoveTo(first.point.xy()));

    for (i, vertex) in vertices.iter().enumerate() {
        if vertex.is_arc() {
            let next = vertices[(i + 1) % vertices.len()];
            commands.push(PathCommand::ArcTo {
                corner: vertex.point.xy(),
                end: next.point.xy(),
                radius: vertex.distance_to(next),
            });
        } else {
            commands.push(PathCommand::LineTo(vertex.point.xy()));
        }
    }

    commands.push(PathCommand::Close);
    commands
}
