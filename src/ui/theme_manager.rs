//! Theme manager — loads, switches, and enumerates themes.

use std::path::PathBuf;

use crate::ui::theme_def::{ThemeDefinition, ThemeMeta};

/// Persisted user settings (lives in the OS config directory).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub active_theme: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            active_theme: "Paper Light".into(),
        }
    }
}

/// Manages all available themes and the active selection.
pub struct ThemeManager {
    /// All loaded themes, keyed by `meta.name`.
    themes: Vec<ThemeDefinition>,
    /// Index into `themes` for the currently active theme.
    active_index: usize,
    /// Path to the user themes directory.
    themes_dir: PathBuf,
    /// Path to the settings file.
    settings_path: PathBuf,
}

impl ThemeManager {
    /// Discover the config dir, load built-in + user themes, and apply
    /// the persisted preference.
    pub fn new() -> Self {
        let (themes_dir, settings_path) = Self::config_paths();
        let _ = std::fs::create_dir_all(&themes_dir);

        let settings = Self::load_settings(&settings_path);

        let mut themes = builtin_themes();
        Self::merge_user_themes(&mut themes, &themes_dir);

        // Write a reference theme on first run so users have an example to copy.
        let reference_path = themes_dir.join("_reference_default.json");
        if !reference_path.exists() {
            if let Ok(json) = serde_json::to_string_pretty(&ThemeDefinition::default()) {
                let _ = std::fs::write(&reference_path, json);
            }
        }

        let active_index = themes
            .iter()
            .position(|t| t.meta.name == settings.active_theme)
            .unwrap_or(0);

        Self {
            themes,
            active_index,
            themes_dir,
            settings_path,
        }
    }

    // ── Getters ─────────────────────────────────────────────────

    /// The currently active theme.
    pub fn active(&self) -> &ThemeDefinition {
        &self.themes[self.active_index]
    }

    /// List of (index, name) for all themes.
    pub fn list(&self) -> Vec<(usize, String)> {
        self.themes
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.meta.name.clone()))
            .collect()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn themes_dir(&self) -> &PathBuf {
        &self.themes_dir
    }

    // ── Switching ───────────────────────────────────────────────

    /// Switch to a theme by index.
    pub fn set_active(&mut self, index: usize) {
        if index < self.themes.len() {
            self.active_index = index;
            self.save_settings();
        }
    }

    /// Reload user themes from disk (e.g. after the user edits a JSON file).
    pub fn reload_user_themes(&mut self) {
        let active_name = self.themes[self.active_index].meta.name.clone();

        self.themes = builtin_themes();
        Self::merge_user_themes(&mut self.themes, &self.themes_dir);

        self.active_index = self
            .themes
            .iter()
            .position(|t| t.meta.name == active_name)
            .unwrap_or(0);
    }

    fn merge_user_themes(themes: &mut Vec<ThemeDefinition>, dir: &PathBuf) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Ok(contents) = std::fs::read_to_string(&path) else {
                continue;
            };
            match serde_json::from_str::<ThemeDefinition>(&contents) {
                Ok(def) => {
                    // First name wins: built-ins shadow user files.
                    if !themes.iter().any(|t| t.meta.name == def.meta.name) {
                        themes.push(def);
                    }
                }
                Err(e) => {
                    log::warn!("failed to parse theme {:?}: {}", path, e);
                }
            }
        }
    }

    // ── Persistence helpers ─────────────────────────────────────

    fn config_paths() -> (PathBuf, PathBuf) {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "MilestonesApp") {
            let config = proj_dirs.config_dir().to_path_buf();
            (config.join("themes"), config.join("settings.json"))
        } else {
            let dir = PathBuf::from(".");
            (dir.join("themes"), dir.join("settings.json"))
        }
    }

    fn load_settings(path: &PathBuf) -> AppSettings {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    fn save_settings(&self) {
        let settings = AppSettings {
            active_theme: self.themes[self.active_index].meta.name.clone(),
        };
        if let Ok(json) = serde_json::to_string_pretty(&settings) {
            if let Some(parent) = self.settings_path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = std::fs::write(&self.settings_path, json);
        }
    }
}

// ─── Built-in preset themes ────────────────────────────────────────────────

fn builtin_themes() -> Vec<ThemeDefinition> {
    vec![paper_light(), slate_dark(), midnight_theme()]
}

/// The default light theme (matches the original white/blue grid look).
fn paper_light() -> ThemeDefinition {
    ThemeDefinition::default()
}

/// A muted dark slate theme.
fn slate_dark() -> ThemeDefinition {
    use egui::Color32;
    let mut t = ThemeDefinition::default();
    t.meta = ThemeMeta {
        name: "Slate Dark".into(),
        author: "Built-in".into(),
        description: "Muted dark slate tones.".into(),
        variant: "dark".into(),
    };
    t.colors.bg_app = Color32::from_rgb(24, 24, 32);
    t.colors.bg_panel = Color32::from_rgb(30, 30, 40);
    t.colors.bg_selected = Color32::from_rgba_unmultiplied(80, 140, 220, 45);
    t.colors.border_subtle = Color32::from_rgb(50, 52, 64);
    t.colors.text_primary = Color32::from_rgb(230, 232, 240);
    t.colors.text_secondary = Color32::from_rgb(155, 160, 178);
    t.colors.text_dim = Color32::from_rgb(100, 105, 120);
    t.colors.accent = Color32::from_rgb(80, 140, 220);
    t.colors.progress_bar = Color32::from_rgb(80, 140, 220);
    t.colors.cell_empty = Color32::from_rgb(38, 40, 52);
    t.colors.cell_empty_hover = Color32::from_rgb(48, 51, 64);
    t.colors.cell_milestone = Color32::from_rgb(80, 140, 220);
    t.colors.cell_milestone_hover = Color32::from_rgb(110, 165, 245);
    t.colors.decade_label = Color32::from_rgb(155, 160, 178);
    t.colors.widget_bg_inactive = Color32::from_rgb(42, 44, 56);
    t.colors.widget_bg_hovered = Color32::from_rgb(52, 54, 68);
    t.colors.widget_bg_active = Color32::from_rgb(60, 62, 76);
    t.colors.widget_bg_open = Color32::from_rgb(50, 52, 66);
    t.colors.faint_bg = Color32::from_rgb(30, 30, 40);
    t.colors.extreme_bg = Color32::from_rgb(19, 21, 29);
    t.colors.status_bar_bg = Color32::from_rgb(26, 26, 36);
    t
}

/// A deep midnight blue theme.
fn midnight_theme() -> ThemeDefinition {
    use egui::Color32;
    let mut t = slate_dark();
    t.meta = ThemeMeta {
        name: "Midnight".into(),
        author: "Built-in".into(),
        description: "Deep midnight blue tones.".into(),
        variant: "dark".into(),
    };
    t.colors.bg_app = Color32::from_rgb(12, 14, 24);
    t.colors.bg_panel = Color32::from_rgb(16, 20, 34);
    t.colors.border_subtle = Color32::from_rgb(34, 40, 62);
    t.colors.accent = Color32::from_rgb(60, 120, 220);
    t.colors.progress_bar = Color32::from_rgb(60, 120, 220);
    t.colors.cell_empty = Color32::from_rgb(26, 31, 50);
    t.colors.cell_empty_hover = Color32::from_rgb(34, 41, 64);
    t.colors.cell_milestone = Color32::from_rgb(60, 120, 220);
    t.colors.cell_milestone_hover = Color32::from_rgb(90, 150, 245);
    t.colors.widget_bg_inactive = Color32::from_rgb(24, 30, 48);
    t.colors.widget_bg_hovered = Color32::from_rgb(34, 42, 66);
    t.colors.widget_bg_active = Color32::from_rgb(42, 50, 76);
    t.colors.widget_bg_open = Color32::from_rgb(30, 38, 60);
    t.colors.faint_bg = Color32::from_rgb(16, 18, 30);
    t.colors.extreme_bg = Color32::from_rgb(10, 12, 20);
    t.colors.status_bar_bg = Color32::from_rgb(14, 16, 28);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_theme_names_are_unique() {
        let themes = builtin_themes();
        for (i, a) in themes.iter().enumerate() {
            for b in &themes[i + 1..] {
                assert_ne!(a.meta.name, b.meta.name);
            }
        }
    }

    #[test]
    fn default_settings_select_the_first_builtin() {
        let themes = builtin_themes();
        assert_eq!(themes[0].meta.name, AppSettings::default().active_theme);
    }
}
