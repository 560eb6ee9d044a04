//! Loading sweep shown along the top edge after a recompute.

use egui::{Rect, Ui, Vec2};

use crate::ui::theme;

/// Explicit configuration for the progress sweep.
///
/// Owned by the app state and handed to the indicator — never a
/// process-wide singleton.
#[derive(Debug, Clone, Copy)]
pub struct ProgressConfig {
    /// Fraction the bar starts at, so instant recomputes still read as motion.
    pub minimum: f32,
    /// Seconds for a full sweep.
    pub speed: f32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            minimum: 0.3,
            speed: 0.5,
        }
    }
}

/// Animates a thin accent bar across the top of the content area.
#[derive(Debug, Clone, Copy)]
pub struct ProgressIndicator {
    config: ProgressConfig,
    started_at: Option<f64>,
}

impl ProgressIndicator {
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            config,
            started_at: None,
        }
    }

    /// Begin a sweep at the given UI clock time (seconds).
    pub fn start(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Draw the sweep if one is running; keeps repainting until it ends.
    pub fn show(&mut self, ui: &mut Ui) {
        let Some(started) = self.started_at else {
            return;
        };
        let now = ui.input(|i| i.time);
        let elapsed = (now - started) as f32;
        if elapsed >= self.config.speed {
            self.started_at = None;
            return;
        }

        let t = (elapsed / self.config.speed).clamp(0.0, 1.0);
        let fraction = self.config.minimum + (1.0 - self.config.minimum) * t;
        let panel = ui.max_rect();
        let bar = Rect::from_min_size(
            panel.min,
            Vec2::new(panel.width() * fraction, theme::layout().progress_bar_height),
        );
        ui.painter().rect_filled(bar, 0.0, theme::progress_bar());
        ui.ctx().request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_is_idle_until_started() {
        let mut indicator = ProgressIndicator::new(ProgressConfig::default());
        assert!(!indicator.is_active());
        indicator.start(1.0);
        assert!(indicator.is_active());
    }

    #[test]
    fn default_config_starts_partway_in() {
        let config = ProgressConfig::default();
        assert!(config.minimum > 0.0 && config.minimum < 1.0);
        assert!(config.speed > 0.0);
    }
}
