use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::{
    block_rect, paint_axis, paint_hour_lines, paint_slot_highlight, show_block, SchedulePalette,
    AXIS_HEIGHT, FACILITY_COLUMN_WIDTH,
};
use crate::models::appointment::Appointment;
use crate::models::settings::LaneGeometry;
use crate::services::composer::{DayGrid, FacilityRow};
use crate::services::interaction::{DragController, DropCell};
use crate::ui_egui::drag::DragRouter;

pub struct DayView;

impl DayView {
    pub fn show(
        ui: &mut egui::Ui,
        grid: &DayGrid,
        appointments: &[Appointment],
        geometry: &LaneGeometry,
        drag: &mut DragController,
        router: &mut DragRouter,
    ) {
        let palette = SchedulePalette::from_ui(ui);

        ui.heading(&grid.title);
        ui.add_space(6.0);

        let width = ui.available_width();
        let (axis_rect, _) = ui.allocate_exact_size(Vec2::new(width, AXIS_HEIGHT), Sense::hover());
        let timeline_axis = Rect::from_min_max(
            Pos2::new(axis_rect.left() + FACILITY_COLUMN_WIDTH, axis_rect.top()),
            axis_rect.right_bottom(),
        );
        ui.painter().rect_filled(axis_rect, 0.0, palette.muted_bg);
        paint_axis(ui.painter(), timeline_axis, &grid.markers, &palette);

        egui::ScrollArea::vertical()
            .id_source("day_view_rows")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for row in &grid.rows {
                    Self::show_row(ui, grid, row, appointments, geometry, &palette, drag, router);
                }
            });
    }

    #[allow(clippy::too_many_arguments)]
    fn show_row(
        ui: &mut egui::Ui,
        grid: &DayGrid,
        row: &FacilityRow,
        appointments: &[Appointment],
        geometry: &LaneGeometry,
        palette: &SchedulePalette,
        drag: &mut DragController,
        router: &mut DragRouter,
    ) {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, row.height), Sense::hover());
        let name_rect =
            Rect::from_min_size(rect.min, Vec2::new(FACILITY_COLUMN_WIDTH, rect.height()));
        let timeline = Rect::from_min_max(
            Pos2::new(name_rect.right(), rect.top()),
            rect.right_bottom(),
        );

        let painter = ui.painter();
        painter.rect_filled(name_rect, 0.0, palette.muted_bg);
        painter.text(
            name_rect.left_center() + Vec2::new(8.0, 0.0),
            Align2::LEFT_CENTER,
            &row.facility,
            FontId::proportional(13.0),
            palette.text,
        );
        painter.rect_filled(timeline, 0.0, palette.cell_bg);
        paint_hour_lines(painter, timeline, palette, false);
        if let Some(highlight) = row.highlight {
            paint_slot_highlight(painter, timeline, highlight.left, highlight.width, palette);
        }
        painter.line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            Stroke::new(1.0, palette.border),
        );

        if drag.appointment_targets_enabled() {
            router.register_cell(
                DropCell::new(row.facility.clone(), grid.date),
                timeline.intersect(ui.clip_rect()),
            );
        }

        let dragged = drag.appointment_drag().map(|d| d.appointment_id.clone());
        for block in &row.blocks {
            let block_rect = block_rect(
                timeline,
                block.placement.left,
                block.placement.width,
                block.top,
                block.height,
                geometry.min_block_px,
            );
            let faded = dragged.as_deref() == Some(block.appointment_id.as_str());
            show_block(ui, block_rect, block, appointments, drag, faded);
        }
    }
}
