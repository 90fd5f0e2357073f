//! Node editor implementation

pub mod canvas;
pub mod input;
pub mod interaction;
pub mod rendering;

pub use canvas::Canvas;
pub use input::PointerInput;
pub use interaction::InteractionController;

use crate::constants;
use crate::theme;
use egui::Vec2;

/// Main application state for the node editor
pub struct NodeEditor {
    canvas: Canvas,
}

impl NodeEditor {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(Vec2::from(constants::canvas::DEFAULT_SIZE)),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl Default for NodeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for NodeEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Connection lines are re-anchored every frame
        ctx.request_repaint();

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::colors().background))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
                self.canvas.resize(response.rect.size());

                // Events first, then the frame's refresh
                PointerInput::sample(ui, &response).apply(&mut self.canvas);
                self.canvas.tick();

                let painter = ui.painter_at(response.rect);
                rendering::paint_scene(&painter, self.canvas.scene(), response.rect.min.to_vec2());
            });
    }
}
