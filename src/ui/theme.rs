//! Access to the active theme.
//!
//! The app pushes the active [`ThemeDefinition`] here once per frame;
//! the rest of the UI reads it through the module-level getters below.

use std::sync::RwLock;

use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::ui::theme_def::{ThemeDefinition, ThemeGrid, ThemeLayout};

static ACTIVE: RwLock<Option<ThemeDefinition>> = RwLock::new(None);

/// Install the active theme for this frame.
pub fn set_active(def: &ThemeDefinition) {
    if let Ok(mut guard) = ACTIVE.write() {
        *guard = Some(def.clone());
    }
}

fn with_active<T>(f: impl FnOnce(&ThemeDefinition) -> T) -> T {
    match ACTIVE.read() {
        Ok(guard) => match guard.as_ref() {
            Some(def) => f(def),
            None => f(&ThemeDefinition::default()),
        },
        Err(_) => f(&ThemeDefinition::default()),
    }
}

// ── Colors ───────────────────────────────────────────────────────────────────

pub fn bg_app() -> Color32 {
    with_active(|t| t.colors.bg_app)
}

pub fn text_primary() -> Color32 {
    with_active(|t| t.colors.text_primary)
}

pub fn text_secondary() -> Color32 {
    with_active(|t| t.colors.text_secondary)
}

pub fn text_dim() -> Color32 {
    with_active(|t| t.colors.text_dim)
}

pub fn cell_empty() -> Color32 {
    with_active(|t| t.colors.cell_empty)
}

pub fn cell_empty_hover() -> Color32 {
    with_active(|t| t.colors.cell_empty_hover)
}

pub fn cell_milestone() -> Color32 {
    with_active(|t| t.colors.cell_milestone)
}

pub fn cell_milestone_hover() -> Color32 {
    with_active(|t| t.colors.cell_milestone_hover)
}

pub fn decade_label() -> Color32 {
    with_active(|t| t.colors.decade_label)
}

pub fn progress_bar() -> Color32 {
    with_active(|t| t.colors.progress_bar)
}

pub fn status_bar_bg() -> Color32 {
    with_active(|t| t.colors.status_bar_bg)
}

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_title() -> FontId {
    FontId::proportional(with_active(|t| t.typography.font_title_size))
}

pub fn font_subtitle() -> FontId {
    FontId::proportional(with_active(|t| t.typography.font_subtitle_size))
}

pub fn font_menu() -> FontId {
    FontId::proportional(with_active(|t| t.typography.font_menu_size))
}

pub fn font_status() -> FontId {
    FontId::proportional(with_active(|t| t.typography.font_status_size))
}

pub fn font_decade() -> FontId {
    FontId::proportional(with_active(|t| t.typography.font_decade_size))
}

// ── Geometry ─────────────────────────────────────────────────────────────────

pub fn grid() -> ThemeGrid {
    with_active(|t| t.grid)
}

pub fn layout() -> ThemeLayout {
    with_active(|t| t.layout)
}

pub fn status_bar_height() -> f32 {
    with_active(|t| t.layout.status_bar_height)
}

// ── Apply to egui ────────────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    with_active(|def| {
        let mut visuals = if def.meta.variant == "light" {
            Visuals::light()
        } else {
            Visuals::dark()
        };

        visuals.override_text_color = Some(def.colors.text_primary);
        visuals.panel_fill = def.colors.bg_panel;
        visuals.window_fill = def.colors.bg_panel;
        visuals.extreme_bg_color = def.colors.extreme_bg;
        visuals.faint_bg_color = def.colors.faint_bg;

        let rounding = Rounding::same(def.spacing.widget_rounding);

        visuals.widgets.noninteractive.bg_fill = def.colors.bg_panel;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, def.colors.border_subtle);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, def.colors.text_secondary);
        visuals.widgets.noninteractive.rounding = rounding;

        visuals.widgets.inactive.bg_fill = def.colors.widget_bg_inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, def.colors.border_subtle);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, def.colors.text_primary);
        visuals.widgets.inactive.rounding = rounding;

        visuals.widgets.hovered.bg_fill = def.colors.widget_bg_hovered;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, def.colors.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, def.colors.text_primary);
        visuals.widgets.hovered.rounding = rounding;

        visuals.widgets.active.bg_fill = def.colors.widget_bg_active;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, def.colors.accent);
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, def.colors.text_primary);
        visuals.widgets.active.rounding = rounding;

        visuals.widgets.open.bg_fill = def.colors.widget_bg_open;
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, def.colors.accent);
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, def.colors.text_primary);
        visuals.widgets.open.rounding = rounding;

        visuals.selection.bg_fill = def.colors.bg_selected;
        visuals.selection.stroke = Stroke::new(1.0, def.colors.accent);

        visuals.window_rounding = Rounding::same(def.spacing.window_rounding);
        visuals.window_stroke = Stroke::new(1.0, def.colors.border_subtle);
        visuals.striped = false;

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing =
            egui::vec2(def.spacing.item_spacing_x, def.spacing.item_spacing_y);
        style.spacing.button_padding =
            egui::vec2(def.spacing.button_padding_x, def.spacing.button_padding_y);
        ctx.set_style(style);
    });
}
