//! Input handling and event management

use super::canvas::Canvas;
use egui::{Pos2, Vec2};

/// Pointer state sampled from egui once per frame, in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    /// Latest known pointer position, kept after the pointer leaves
    pub pos: Option<Pos2>,
    /// Whether the pointer is over the canvas this frame
    pub inside: bool,
    pub pressed: bool,
    pub released: bool,
    pub delta: Vec2,
}

impl PointerInput {
    /// Reads this frame's pointer state relative to the canvas response
    pub fn sample(ui: &egui::Ui, response: &egui::Response) -> Self {
        let origin = response.rect.min.to_vec2();
        ui.input(|i| {
            let hover = i.pointer.hover_pos();
            Self {
                pos: i.pointer.latest_pos().map(|pos| pos - origin),
                inside: hover.is_some_and(|pos| response.rect.contains(pos)),
                pressed: i.pointer.primary_pressed(),
                released: i.pointer.primary_released(),
                delta: i.pointer.delta(),
            }
        })
    }

    /// Feeds the sampled events into the canvas: press, then movement, then
    /// release, so a click completed within one frame is still seen in order.
    pub fn apply(&self, canvas: &mut Canvas) {
        let Some(pos) = self.pos else {
            return;
        };

        if self.pressed && self.inside {
            canvas.pointer_pressed(pos);
        }
        if self.delta != Vec2::ZERO {
            canvas.pointer_moved(pos);
        }
        if self.released {
            canvas.pointer_released(pos);
        }
        if !self.inside {
            canvas.pointer_left();
        }
    }
}
