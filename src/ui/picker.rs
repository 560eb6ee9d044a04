use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::ui::theme;

/// What the date-selection header asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    None,
    /// A new date was picked (not yet clamped to today).
    DateChanged(NaiveDate),
    Cleared,
}

/// Render the page header: title, subtitle, and the birth-date picker.
pub fn show_date_picker(
    picker_date: &mut NaiveDate,
    has_selection: bool,
    ui: &mut Ui,
) -> PickerAction {
    let mut action = PickerAction::None;

    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.label(
            RichText::new("Milestones")
                .font(theme::font_title())
                .color(theme::text_primary()),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new("Enter your birth date to see a timeline of interesting life events.")
                .font(theme::font_subtitle())
                .color(theme::text_secondary()),
        );
        ui.add_space(14.0);

        let response = ui.add(
            egui_extras::DatePickerButton::new(picker_date).id_salt("birth_date_picker"),
        );
        if response.changed() {
            action = PickerAction::DateChanged(*picker_date);
        }

        if has_selection {
            ui.add_space(6.0);
            let clear_label = format!("{} Clear", egui_phosphor::regular::X);
            if ui
                .button(RichText::new(clear_label).color(theme::text_secondary()))
                .clicked()
            {
                action = PickerAction::Cleared;
            }
        }
        ui.add_space(10.0);
    });

    action
}

/// Shown in place of the grid while no birth date is selected.
pub fn show_empty_hint(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(
            RichText::new("Pick a date above — your 100-year month grid appears here.")
                .font(theme::font_subtitle())
                .color(theme::text_dim()),
        );
    });
}
