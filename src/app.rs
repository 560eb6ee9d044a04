use chrono::NaiveDate;
use egui::RichText;

use crate::model::MilestoneIndex;
use crate::ui;
use crate::ui::loading::{ProgressConfig, ProgressIndicator};
use crate::ui::theme_manager::ThemeManager;

/// Main application state.
pub struct MilestonesApp {
    /// Selected birth date; `None` shows the pick-a-date hint instead of the grid.
    pub birth_date: Option<NaiveDate>,
    /// Date currently shown in the picker widget.
    pub picker_date: NaiveDate,
    /// Milestones grouped by month offset, rebuilt on every date change.
    pub index: MilestoneIndex,

    // Dialog state
    pub show_about: bool,

    // Status message
    pub status_message: String,

    // Theme engine
    pub theme_manager: ThemeManager,

    // Loading sweep after recomputes
    pub progress: ProgressIndicator,
}

impl MilestonesApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self {
            birth_date: None,
            picker_date: chrono::Local::now().date_naive(),
            index: MilestoneIndex::default(),
            show_about: false,
            status_message: "Select a birth date to begin".to_string(),
            theme_manager: ThemeManager::new(),
            progress: ProgressIndicator::new(ProgressConfig::default()),
        }
    }

    // --- Date operations ---

    /// Apply a newly picked date: clamp to today, rebuild the index.
    pub fn set_birth_date(&mut self, date: NaiveDate, now: f64) {
        let today = chrono::Local::now().date_naive();
        let date = date.min(today);
        self.picker_date = date;
        self.birth_date = Some(date);
        self.index = MilestoneIndex::compute(date);
        self.progress.start(now);
        self.status_message = format!(
            "Timeline updated — {} milestones across {} months",
            self.index.total_labels(),
            self.index.month_count()
        );
        log::info!(
            "computed timeline for {}: {} milestones in {} months",
            date,
            self.index.total_labels(),
            self.index.month_count()
        );
    }

    pub fn clear_birth_date(&mut self) {
        self.birth_date = None;
        self.index = MilestoneIndex::default();
        self.status_message = "Select a birth date to begin".to_string();
    }

    // --- Export operations ---

    pub fn export_csv(&mut self) {
        let Some(start) = self.birth_date else {
            self.status_message = "Nothing to export — no birth date selected".to_string();
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("milestones.csv")
            .save_file()
        {
            match crate::io::export_csv(&self.index, start, &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} milestones to CSV", count);
                    log::info!("exported {} milestone rows to {:?}", count, path);
                }
                Err(e) => {
                    self.status_message = format!("CSV export failed: {}", e);
                    log::error!("csv export failed: {}", e);
                }
            }
        }
    }

    pub fn export_json(&mut self) {
        let Some(start) = self.birth_date else {
            self.status_message = "Nothing to export — no birth date selected".to_string();
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON Files", &["json"])
            .set_file_name("milestones.json")
            .save_file()
        {
            match crate::io::export_json(&self.index, start, &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} months to JSON", count);
                    log::info!("exported {} timeline months to {:?}", count, path);
                }
                Err(e) => {
                    self.status_message = format!("JSON export failed: {}", e);
                    log::error!("json export failed: {}", e);
                }
            }
        }
    }
}

impl eframe::App for MilestonesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::set_active(self.theme_manager.active());
        ui::theme::apply_theme(ctx);

        // Handle keyboard shortcuts outside closures to avoid borrow issues
        let should_export = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::E));
        if should_export {
            self.export_csv();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::status_bar_height())
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::status_bar_bg())
                    .inner_margin(egui::Margin::symmetric(
                        ui::theme::layout().panel_inner_margin,
                        0.0,
                    )),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::text_secondary()),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.birth_date.is_some() {
                            ui.label(
                                RichText::new(format!("Months: {}", self.index.month_count()))
                                    .size(10.5)
                                    .color(ui::theme::text_dim()),
                            );
                            ui.label(
                                RichText::new(" · ")
                                    .size(10.5)
                                    .color(ui::theme::text_dim()),
                            );
                            ui.label(
                                RichText::new(format!(
                                    "Milestones: {}",
                                    self.index.total_labels()
                                ))
                                .size(10.5)
                                .color(ui::theme::text_dim()),
                            );
                        }
                    });
                });
            });

        // Central panel: picker header + month grid
        let content_frame = egui::Frame::default()
            .fill(ui::theme::bg_app())
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default()
            .frame(content_frame)
            .show(ctx, |ui| {
                self.progress.show(ui);

                let action = ui::picker::show_date_picker(
                    &mut self.picker_date,
                    self.birth_date.is_some(),
                    ui,
                );
                match action {
                    ui::picker::PickerAction::DateChanged(date) => {
                        let now = ui.input(|i| i.time);
                        self.set_birth_date(date, now);
                    }
                    ui::picker::PickerAction::Cleared => {
                        self.clear_birth_date();
                    }
                    ui::picker::PickerAction::None => {}
                }

                match self.birth_date {
                    Some(start) => ui::grid::show_milestone_grid(&self.index, start, ui),
                    None => ui::picker::show_empty_hint(ui),
                }
            });

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
