use chrono::NaiveDate;
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use crate::models::appointment::Appointment;
use crate::services::composer::AppointmentBlock;
use crate::services::interaction::DragController;
use crate::services::layout::{is_major_hour, EndRounding, TimeMarker};

pub mod day_view;
pub mod month_view;
mod palette;
pub mod week_view;

pub(crate) use palette::{block_color, text_on, SchedulePalette};

/// Width of the facility name column in Day and Week views.
pub const FACILITY_COLUMN_WIDTH: f32 = 180.0;
pub const AXIS_HEIGHT: f32 = 22.0;
const BLOCK_RADIUS: f32 = 6.0;

/// Something the user asked for from inside a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    OpenDay(NaiveDate),
}

/// Screen rectangle of a block inside its cell.
///
/// Percent offsets map onto the cell width; the pixel floor keeps short
/// appointments grabbable, shifting the block left rather than past the edge.
pub fn block_rect(
    cell: Rect,
    left_pct: f64,
    width_pct: f64,
    top: f32,
    height: f32,
    min_px: f32,
) -> Rect {
    let cell_width = cell.width();
    let width = (width_pct as f32 / 100.0 * cell_width)
        .max(min_px)
        .min(cell_width);
    let left = (left_pct as f32 / 100.0 * cell_width).min(cell_width - width).max(0.0);
    Rect::from_min_size(
        Pos2::new(cell.left() + left, cell.top() + top),
        Vec2::new(width, height),
    )
}

pub(crate) fn rounding_for(ends: EndRounding) -> Rounding {
    let left = if ends.left { BLOCK_RADIUS } else { 0.0 };
    let right = if ends.right { BLOCK_RADIUS } else { 0.0 };
    Rounding {
        nw: left,
        sw: left,
        ne: right,
        se: right,
    }
}

/// Paint one appointment block and start a drag from it when allowed.
pub(crate) fn show_block(
    ui: &mut egui::Ui,
    rect: Rect,
    block: &AppointmentBlock,
    appointments: &[Appointment],
    drag: &mut DragController,
    faded: bool,
) {
    let id = ui.id().with(("appointment", &block.appointment_id, rect.left() as i32));
    let sense = if drag.appointment_targets_enabled() {
        Sense::click_and_drag()
    } else {
        Sense::hover()
    };
    let response = ui.interact(rect, id, sense);

    let mut fill = block_color(&block.color);
    if faded {
        fill = fill.gamma_multiply(0.45);
    }
    let rounding = rounding_for(block.placement.rounding);
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, rounding, fill);
    if response.hovered() {
        painter.rect_stroke(rect, rounding, Stroke::new(1.5, Color32::from_black_alpha(90)));
    }

    let text_color = text_on(fill);
    painter.text(
        rect.left_top() + Vec2::new(6.0, 4.0),
        Align2::LEFT_TOP,
        &block.title,
        FontId::proportional(12.0),
        text_color,
    );
    if let Some(label) = block.time_label() {
        painter.text(
            rect.left_top() + Vec2::new(6.0, 20.0),
            Align2::LEFT_TOP,
            label,
            FontId::proportional(10.0),
            text_color,
        );
    }

    let response = response.on_hover_text(format!(
        "{}\n{}{}",
        block.title,
        block.provider,
        block
            .time_label()
            .map(|label| format!("\n{}", label))
            .unwrap_or_default()
    ));

    if response.drag_started() {
        if let Some(appointment) = appointments.iter().find(|a| a.id == block.appointment_id) {
            drag.begin_appointment_drag(appointment);
        }
    }
}

/// A line at every hour across `rect`; `mark_major` draws every sixth hour
/// heavier.
pub(crate) fn paint_hour_lines(
    painter: &egui::Painter,
    rect: Rect,
    palette: &SchedulePalette,
    mark_major: bool,
) {
    for hour in 0..=24u32 {
        let x = rect.left() + rect.width() * hour as f32 / 24.0;
        let major = mark_major && is_major_hour(hour);
        let color = if major { palette.major_line } else { palette.hour_line };
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, color),
        );
    }
}

pub(crate) fn paint_axis(
    painter: &egui::Painter,
    rect: Rect,
    markers: &[TimeMarker],
    palette: &SchedulePalette,
) {
    for marker in markers {
        let Some(label) = &marker.label else {
            continue;
        };
        let x = rect.left() + rect.width() * marker.left as f32 / 100.0;
        painter.text(
            Pos2::new(x + 2.0, rect.center().y),
            Align2::LEFT_CENTER,
            label,
            FontId::proportional(10.0),
            palette.muted_text,
        );
    }
}

pub(crate) fn paint_slot_highlight(
    painter: &egui::Painter,
    cell: Rect,
    left_pct: f64,
    width_pct: f64,
    palette: &SchedulePalette,
) {
    let x = cell.left() + cell.width() * left_pct as f32 / 100.0;
    let width = cell.width() * width_pct as f32 / 100.0;
    let highlight = Rect::from_min_size(Pos2::new(x, cell.top()), Vec2::new(width, cell.height()));
    painter.rect_filled(highlight, 0.0, palette.slot_highlight);
    painter.rect_stroke(highlight, 0.0, Stroke::new(1.0, palette.accent));
}
