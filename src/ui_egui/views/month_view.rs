use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::{block_color, text_on, SchedulePalette, ViewAction};
use crate::services::composer::{MonthCell, MonthGrid};

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const HEADER_HEIGHT: f32 = 28.0;
const MIN_CELL_HEIGHT: f32 = 120.0;
const BADGE_HEIGHT: f32 = 18.0;
const LINE_HEIGHT: f32 = 14.0;

pub struct MonthView;

impl MonthView {
    /// Draw the 6x7 grid. Clicking a day asks to open it in the Day view.
    pub fn show(ui: &mut egui::Ui, grid: &MonthGrid) -> Option<ViewAction> {
        let palette = SchedulePalette::from_ui(ui);
        let col_width = ui.available_width() / 7.0;
        let mut action = None;

        let (header_rect, _) =
            ui.allocate_exact_size(Vec2::new(col_width * 7.0, HEADER_HEIGHT), Sense::hover());
        ui.painter().rect_filled(header_rect, 0.0, palette.muted_bg);
        for (index, name) in WEEKDAY_NAMES.iter().enumerate() {
            let center = Pos2::new(
                header_rect.left() + col_width * (index as f32 + 0.5),
                header_rect.center().y,
            );
            ui.painter().text(
                center,
                Align2::CENTER_CENTER,
                name,
                FontId::proportional(13.0),
                palette.text,
            );
        }

        let cell_height = ((ui.available_height() / 6.0).floor()).max(MIN_CELL_HEIGHT);
        egui::ScrollArea::vertical()
            .id_source("month_view_grid")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for week in grid.cells.chunks(7) {
                    let (row_rect, _) = ui.allocate_exact_size(
                        Vec2::new(col_width * 7.0, cell_height),
                        Sense::hover(),
                    );
                    for (index, cell) in week.iter().enumerate() {
                        let rect = Rect::from_min_size(
                            Pos2::new(row_rect.left() + col_width * index as f32, row_rect.top()),
                            Vec2::new(col_width, cell_height),
                        );
                        if Self::show_cell(ui, rect, cell, &palette) {
                            action = Some(ViewAction::OpenDay(cell.date));
                        }
                    }
                }
            });

        action
    }

    fn show_cell(
        ui: &mut egui::Ui,
        rect: Rect,
        cell: &MonthCell,
        palette: &SchedulePalette,
    ) -> bool {
        let response = ui.interact(rect, ui.id().with(("month_cell", cell.date)), Sense::click());
        let painter = ui.painter_at(rect);

        let background = if cell.is_today {
            palette.today_bg
        } else if cell.is_current_month {
            palette.cell_bg
        } else {
            palette.muted_bg
        };
        painter.rect_filled(rect, 0.0, background);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, palette.border));
        if response.hovered() {
            painter.rect_stroke(rect.shrink(1.0), 2.0, Stroke::new(1.5, palette.accent));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let number_color = if cell.is_today {
            palette.accent
        } else if cell.is_current_month {
            palette.text
        } else {
            palette.muted_text
        };
        let mut y = rect.top() + 6.0;
        painter.text(
            Pos2::new(rect.left() + 8.0, y),
            Align2::LEFT_TOP,
            cell.day_number.to_string(),
            FontId::proportional(13.0),
            number_color,
        );
        y += 20.0;

        for badge in &cell.badges {
            let badge_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 4.0, y),
                Vec2::new(rect.width() - 8.0, BADGE_HEIGHT - 2.0),
            );
            let fill = block_color(&badge.color);
            let text_color = text_on(fill);
            painter.rect_filled(badge_rect, 3.0, fill);
            painter.text(
                badge_rect.left_center() + Vec2::new(4.0, 0.0),
                Align2::LEFT_CENTER,
                &badge.appointment_type,
                FontId::proportional(11.0),
                text_color,
            );
            painter.text(
                badge_rect.right_center() - Vec2::new(4.0, 0.0),
                Align2::RIGHT_CENTER,
                badge.count.to_string(),
                FontId::proportional(11.0),
                text_color,
            );
            y += BADGE_HEIGHT;
        }

        if cell.hidden_types > 0 {
            painter.text(
                Pos2::new(rect.left() + 6.0, y),
                Align2::LEFT_TOP,
                format!("+{} more...", cell.hidden_types),
                FontId::proportional(10.0),
                palette.muted_text,
            );
            y += LINE_HEIGHT;
        }

        for summary in &cell.summaries {
            painter.text(
                Pos2::new(rect.left() + 6.0, y),
                Align2::LEFT_TOP,
                summary,
                FontId::proportional(10.0),
                palette.muted_text,
            );
            y += LINE_HEIGHT;
        }

        if cell.has_more {
            painter.text(
                Pos2::new(rect.left() + 6.0, y),
                Align2::LEFT_TOP,
                "More...",
                FontId::proportional(10.0),
                palette.accent,
            );
        }

        response.clicked()
    }
}
