use egui::{Context, RichText, Window};

use crate::app::MilestonesApp;
use crate::ui::theme;

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut MilestonesApp, ctx: &Context) {
    let mut should_close = false;
    let layout = theme::layout();
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([layout.about_dialog_width, layout.about_dialog_height])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Milestones").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::text_secondary()),
                );
                ui.add_space(10.0);
                ui.label("A life-milestone timeline");
                ui.label("built with Rust and egui.");
                ui.add_space(14.0);
                if ui
                    .add_sized([100.0, 28.0], egui::Button::new("Close"))
                    .clicked()
                {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
