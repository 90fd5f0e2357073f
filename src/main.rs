//! nodewire - wire node terminals together on a canvas

use log::{info, warn};
use nodewire::constants;
use nodewire::theme::{self, Theme};
use nodewire::NodeEditor;

/// Application entry point
fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Theme::discover() {
        Ok(Some((_, loaded))) => {
            theme::install(loaded);
        }
        Ok(None) => {}
        Err(e) => warn!("{}; falling back to the built-in theme", e),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(constants::canvas::DEFAULT_SIZE)
            .with_title("nodewire"),
        ..Default::default()
    };

    info!("Starting nodewire");
    eframe::run_native(
        "nodewire",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(NodeEditor::new()))
        }),
    )
}
