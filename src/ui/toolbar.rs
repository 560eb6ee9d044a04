use egui::{menu, RichText, Ui};

use crate::app::MilestonesApp;
use crate::model::span::format_date;
use crate::ui::theme;

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut MilestonesApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            let has_timeline = app.birth_date.is_some();
            if ui
                .add_enabled(
                    has_timeline,
                    egui::Button::new("  Export CSV...      Ctrl+E"),
                )
                .clicked()
            {
                app.export_csv();
                ui.close_menu();
            }
            if ui
                .add_enabled(has_timeline, egui::Button::new("  Export JSON..."))
                .clicked()
            {
                app.export_json();
                ui.close_menu();
            }
            ui.separator();
            if ui
                .add_enabled(has_timeline, egui::Button::new("  Clear Birth Date"))
                .clicked()
            {
                app.clear_birth_date();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            ui.label(RichText::new("Theme").small().weak());
            let themes = app.theme_manager.list();
            let active_idx = app.theme_manager.active_index();
            for (idx, name) in &themes {
                let selected = *idx == active_idx;
                if ui.radio(selected, name).clicked() {
                    app.theme_manager.set_active(*idx);
                    ui.close_menu();
                }
            }
            ui.separator();
            if ui.button("  Reload Themes").clicked() {
                app.theme_manager.reload_user_themes();
                ui.close_menu();
            }
            if ui.button("  Open Themes Folder").clicked() {
                let dir = app.theme_manager.themes_dir().clone();
                let _ = open::that(&dir);
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned current selection
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = match app.birth_date {
                Some(date) => format!("Born {}", format_date(date)),
                None => "No date selected".to_string(),
            };
            ui.label(RichText::new(label).size(11.0).weak());
        });
    });
}
