//! Theme definition data model.
//!
//! Every visual knob in the app lives in [`ThemeDefinition`]. Themes are
//! serialised as JSON with `#RRGGBB` / `#RRGGBBAA` colour strings so that
//! end-users can hand-edit them. All fields carry `#[serde(default)]`, so
//! a partial JSON file is valid: missing keys fall back to the built-in
//! defaults.

use egui::Color32;
use serde::{Deserialize, Serialize};

// ─── Hex-colour serde helper ────────────────────────────────────────────────

pub mod hex_color {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn write_hex(color: &Color32) -> String {
        let [r, g, b, a] = color.to_array();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
        let digits = s.trim().trim_start_matches('#');
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| e.to_string())
        };
        match digits.len() {
            6 => Ok(Color32::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Color32::from_rgba_unmultiplied(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => Err(format!(
                "Invalid hex color '{}': expected 6 or 8 hex digits",
                s
            )),
        }
    }

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&write_hex(color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Top-level definition ───────────────────────────────────────────────────

/// Complete theme definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDefinition {
    pub meta: ThemeMeta,
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub spacing: ThemeSpacing,
    pub grid: ThemeGrid,
    pub layout: ThemeLayout,
}

// ─── Meta ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeMeta {
    pub name: String,
    pub author: String,
    pub description: String,
    /// "dark" or "light" — controls whether egui starts from
    /// `Visuals::dark()` or `Visuals::light()`.
    pub variant: String,
}

impl Default for ThemeMeta {
    fn default() -> Self {
        Self {
            name: "Paper Light".into(),
            author: "Built-in".into(),
            description: "The default clean light theme.".into(),
            variant: "light".into(),
        }
    }
}

// ─── Colors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    // Backgrounds
    #[serde(with = "hex_color")]
    pub bg_app: Color32,
    #[serde(with = "hex_color")]
    pub bg_panel: Color32,
    #[serde(with = "hex_color")]
    pub bg_selected: Color32,

    // Borders
    #[serde(with = "hex_color")]
    pub border_subtle: Color32,

    // Text
    #[serde(with = "hex_color")]
    pub text_primary: Color32,
    #[serde(with = "hex_color")]
    pub text_secondary: Color32,
    #[serde(with = "hex_color")]
    pub text_dim: Color32,

    // Semantic
    #[serde(with = "hex_color")]
    pub accent: Color32,
    #[serde(with = "hex_color")]
    pub progress_bar: Color32,

    // Month grid
    #[serde(with = "hex_color")]
    pub cell_empty: Color32,
    #[serde(with = "hex_color")]
    pub cell_empty_hover: Color32,
    #[serde(with = "hex_color")]
    pub cell_milestone: Color32,
    #[serde(with = "hex_color")]
    pub cell_milestone_hover: Color32,
    #[serde(with = "hex_color")]
    pub decade_label: Color32,

    // Widget colors (egui Visuals overrides)
    #[serde(with = "hex_color")]
    pub widget_bg_inactive: Color32,
    #[serde(with = "hex_color")]
    pub widget_bg_hovered: Color32,
    #[serde(with = "hex_color")]
    pub widget_bg_active: Color32,
    #[serde(with = "hex_color")]
    pub widget_bg_open: Color32,
    #[serde(with = "hex_color")]
    pub faint_bg: Color32,
    #[serde(with = "hex_color")]
    pub extreme_bg: Color32,

    // Status bar
    #[serde(with = "hex_color")]
    pub status_bar_bg: Color32,
}

impl Default for ThemeColors {
    fn default() -> Self {
        // Matches the classic white-page, blue-cell milestone look.
        Self {
            bg_app: Color32::from_rgb(255, 255, 255),
            bg_panel: Color32::from_rgb(250, 250, 252),
            bg_selected: Color32::from_rgba_unmultiplied(59, 130, 246, 36),

            border_subtle: Color32::from_rgb(209, 213, 219),

            text_primary: Color32::from_rgb(17, 24, 39),
            text_secondary: Color32::from_rgb(107, 114, 128),
            text_dim: Color32::from_rgb(156, 163, 175),

            accent: Color32::from_rgb(59, 130, 246),
            progress_bar: Color32::from_rgb(59, 130, 246),

            cell_empty: Color32::from_rgb(243, 244, 246),
            cell_empty_hover: Color32::from_rgb(229, 231, 235),
            cell_milestone: Color32::from_rgb(59, 130, 246),
            cell_milestone_hover: Color32::from_rgb(37, 99, 235),
            decade_label: Color32::from_rgb(107, 114, 128),

            widget_bg_inactive: Color32::from_rgb(243, 244, 246),
            widget_bg_hovered: Color32::from_rgb(229, 231, 235),
            widget_bg_active: Color32::from_rgb(209, 213, 219),
            widget_bg_open: Color32::from_rgb(229, 231, 235),
            faint_bg: Color32::from_rgb(249, 250, 251),
            extreme_bg: Color32::from_rgb(255, 255, 255),

            status_bar_bg: Color32::from_rgb(243, 244, 246),
        }
    }
}

// ─── Typography ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTypography {
    pub font_title_size: f32,
    pub font_subtitle_size: f32,
    pub font_menu_size: f32,
    pub font_status_size: f32,
    pub font_decade_size: f32,
}

impl Default for ThemeTypography {
    fn default() -> Self {
        Self {
            font_title_size: 42.0,
            font_subtitle_size: 15.0,
            font_menu_size: 12.0,
            font_status_size: 11.0,
            font_decade_size: 12.0,
        }
    }
}

// ─── Spacing ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSpacing {
    pub item_spacing_x: f32,
    pub item_spacing_y: f32,
    pub button_padding_x: f32,
    pub button_padding_y: f32,
    /// Rounding radius applied to most widgets
    pub widget_rounding: f32,
    /// Rounding for floating windows
    pub window_rounding: f32,
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self {
            item_spacing_x: 8.0,
            item_spacing_y: 4.0,
            button_padding_x: 8.0,
            button_padding_y: 4.0,
            widget_rounding: 6.0,
            window_rounding: 8.0,
        }
    }
}

// ─── Month grid geometry ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeGrid {
    /// Side length of one month cell.
    pub cell_size: f32,
    pub cell_gap_x: f32,
    pub cell_gap_y: f32,
    pub cell_rounding: f32,
    /// Vertical gap between decade blocks.
    pub block_gap: f32,
    /// Width reserved for the "N years" label column.
    pub label_column_width: f32,
}

impl Default for ThemeGrid {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            cell_gap_x: 3.0,
            cell_gap_y: 1.5,
            cell_rounding: 2.0,
            block_gap: 10.0,
            label_column_width: 72.0,
        }
    }
}

// ─── Layout ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLayout {
    pub panel_inner_margin: f32,
    pub status_bar_height: f32,
    pub about_dialog_width: f32,
    pub about_dialog_height: f32,
    /// Thickness of the loading sweep drawn along the top edge.
    pub progress_bar_height: f32,
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self {
            panel_inner_margin: 10.0,
            status_bar_height: 24.0,
            about_dialog_width: 320.0,
            about_dialog_height: 180.0,
            progress_bar_height: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_hex_colors_round_trip() {
        let opaque = Color32::from_rgb(59, 130, 246);
        let hex = hex_color::write_hex(&opaque);
        assert_eq!(hex, "#3B82F6");
        assert_eq!(hex_color::parse_hex_color(&hex).expect("parses"), opaque);
    }

    #[test]
    fn eight_digit_hex_parses_as_unmultiplied_rgba() {
        assert_eq!(
            hex_color::parse_hex_color("#3B82F624").expect("parses"),
            Color32::from_rgba_unmultiplied(0x3B, 0x82, 0xF6, 0x24)
        );
    }

    #[test]
    fn parse_rejects_malformed_hex() {
        assert!(hex_color::parse_hex_color("#12345").is_err());
        assert!(hex_color::parse_hex_color("not-a-color").is_err());
    }

    #[test]
    fn partial_theme_json_falls_back_to_defaults() {
        let def: ThemeDefinition =
            serde_json::from_str(r##"{"meta":{"name":"Custom"},"colors":{"accent":"#FF0000"}}"##)
                .expect("partial file is valid");
        assert_eq!(def.meta.name, "Custom");
        assert_eq!(def.meta.variant, "light");
        assert_eq!(def.colors.accent, Color32::from_rgb(255, 0, 0));
        // Untouched keys keep the built-in defaults.
        assert_eq!(def.colors.cell_milestone, Color32::from_rgb(59, 130, 246));
        assert_eq!(def.grid.cell_size, ThemeGrid::default().cell_size);
    }
}
