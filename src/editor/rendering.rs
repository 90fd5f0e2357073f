//! Painting the scene with the egui painter

use crate::scene::{Scene, ShapeKind};
use crate::theme;
use egui::{Align2, FontId, Painter, StrokeKind, Vec2};

/// Paints every visible shape in insertion order, shifted by `offset`
/// (the canvas' top-left corner on screen)
pub fn paint_scene(painter: &Painter, scene: &Scene, offset: Vec2) {
    let dimensions = theme::dimensions();

    for shape in scene.iter().filter(|shape| shape.visible) {
        match &shape.kind {
            ShapeKind::Rect {
                rect,
                fill,
                stroke,
                label,
            } => {
                let rect = rect.translate(offset);
                painter.rect_filled(rect, 0.0, *fill);
                if !stroke.is_empty() {
                    painter.rect_stroke(rect, dimensions.frame_corner_radius, *stroke, StrokeKind::Middle);
                }
                if let Some(label) = label {
                    painter.text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        label,
                        FontId::proportional(dimensions.button_font_size),
                        theme::colors().button_label,
                    );
                }
            }
            ShapeKind::Circle {
                center,
                radius,
                fill,
            } => {
                painter.circle_filled(*center + offset, *radius, *fill);
            }
            ShapeKind::Line { from, to, stroke } => {
                painter.line_segment([*from + offset, *to + offset], *stroke);
            }
        }
    }
}
