use chrono::NaiveDate;
use egui::{Pos2, Rect, Rounding, Sense, Ui, Vec2};

use crate::model::span::format_date;
use crate::model::{cell_date, MilestoneIndex};
use crate::ui::theme;
use crate::ui::theme_def::ThemeGrid;

const MONTHS_PER_YEAR: u32 = 12;
const YEARS_PER_BLOCK: u32 = 10;
const DECADE_BLOCKS: u32 = 10;

/// Render the 100-year milestone grid: ten decade blocks, each a
/// 10-row × 12-column field of month cells.
pub fn show_milestone_grid(index: &MilestoneIndex, start: NaiveDate, ui: &mut Ui) {
    let grid = theme::grid();
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                for block in 0..DECADE_BLOCKS {
                    show_decade_block(index, start, block, &grid, ui);
                    ui.add_space(grid.block_gap);
                }
                ui.add_space(24.0);
            });
        });
}

/// One decade: a right-aligned "N years" label plus 120 month cells.
fn show_decade_block(
    index: &MilestoneIndex,
    start: NaiveDate,
    block: u32,
    grid: &ThemeGrid,
    ui: &mut Ui,
) {
    let cell_step_x = grid.cell_size + grid.cell_gap_x;
    let cell_step_y = grid.cell_size + grid.cell_gap_y;
    let width = grid.label_column_width + MONTHS_PER_YEAR as f32 * cell_step_x;
    let height = YEARS_PER_BLOCK as f32 * cell_step_y;

    let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let origin = response.rect.min;

    painter.text(
        Pos2::new(
            origin.x + grid.label_column_width - 10.0,
            origin.y + grid.cell_size * 0.5,
        ),
        egui::Align2::RIGHT_CENTER,
        format!("{} years", block * YEARS_PER_BLOCK),
        theme::font_decade(),
        theme::decade_label(),
    );

    let hover_pos = response.hover_pos();
    let mut hovered_cell: Option<u32> = None;

    for year in 0..YEARS_PER_BLOCK {
        for month in 0..MONTHS_PER_YEAR {
            let offset = (block * YEARS_PER_BLOCK + year) * MONTHS_PER_YEAR + month;
            let cell_rect = Rect::from_min_size(
                Pos2::new(
                    origin.x + grid.label_column_width + month as f32 * cell_step_x,
                    origin.y + year as f32 * cell_step_y,
                ),
                Vec2::splat(grid.cell_size),
            );

            let hovered = hover_pos.is_some_and(|p| cell_rect.contains(p));
            let fill = match (index.has_milestone(offset), hovered) {
                (true, true) => theme::cell_milestone_hover(),
                (true, false) => theme::cell_milestone(),
                (false, true) => theme::cell_empty_hover(),
                (false, false) => theme::cell_empty(),
            };
            painter.rect_filled(cell_rect, Rounding::same(grid.cell_rounding), fill);

            if hovered {
                hovered_cell = Some(offset);
            }
        }
    }

    if let Some(offset) = hovered_cell {
        egui::show_tooltip_at_pointer(
            ui.ctx(),
            ui.layer_id(),
            egui::Id::new(("month-cell-tip", block)),
            |ui| {
                ui.strong(format_date(cell_date(start, offset)));
                for label in index.labels_for(offset) {
                    ui.label(format!("• {}", label));
                }
            },
        );
    }
}
