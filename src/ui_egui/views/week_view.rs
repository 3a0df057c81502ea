use chrono::NaiveDate;
use egui::{Align2, Color32, FontId, Id, LayerId, Order, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::parse_color;
use super::{
    block_color, block_rect, paint_axis, paint_hour_lines, paint_slot_highlight, rounding_for,
    show_block, text_on, SchedulePalette, AXIS_HEIGHT, FACILITY_COLUMN_WIDTH,
};
use crate::models::appointment::Appointment;
use crate::models::settings::LaneGeometry;
use crate::services::composer::{DragPreview, GroupDropZone, GroupSection, WeekGrid, WeekRow};
use crate::services::interaction::{DragController, DropCell};
use crate::ui_egui::drag::DragRouter;

const MIN_DAY_COLUMN_WIDTH: f32 = 140.0;
const DAY_HEADER_HEIGHT: f32 = 26.0;
const GROUP_HEADER_HEIGHT: f32 = 32.0;
const DROP_ZONE_HEIGHT: f32 = 6.0;

pub struct WeekView;

impl WeekView {
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        ui: &mut egui::Ui,
        grid: &WeekGrid,
        appointments: &[Appointment],
        geometry: &LaneGeometry,
        today: NaiveDate,
        drag: &mut DragController,
        router: &mut DragRouter,
    ) {
        let palette = SchedulePalette::from_ui(ui);
        let column_width =
            ((ui.available_width() - FACILITY_COLUMN_WIDTH) / 7.0).max(MIN_DAY_COLUMN_WIDTH);
        let total_width = FACILITY_COLUMN_WIDTH + column_width * 7.0;

        egui::ScrollArea::both()
            .id_source("week_view_grid")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                Self::show_day_header(ui, grid, today, column_width, total_width, &palette);

                for section in &grid.sections {
                    if let Some(zone) = &section.zone_above {
                        Self::show_drop_zone(ui, zone, total_width, &palette);
                    }
                    Self::show_group_header(ui, section, total_width, &palette, drag, router);
                    for row in &section.rows {
                        Self::show_row(
                            ui,
                            row,
                            section.dimmed,
                            appointments,
                            geometry,
                            today,
                            column_width,
                            &palette,
                            drag,
                            router,
                        );
                    }
                    if let Some(zone) = &section.zone_below {
                        Self::show_drop_zone(ui, zone, total_width, &palette);
                    }
                }
            });

        if let Some(preview) = &grid.preview {
            Self::paint_preview(ui.ctx(), preview, column_width, geometry);
        }
    }

    fn show_day_header(
        ui: &mut egui::Ui,
        grid: &WeekGrid,
        today: NaiveDate,
        column_width: f32,
        total_width: f32,
        palette: &SchedulePalette,
    ) {
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(total_width, DAY_HEADER_HEIGHT + AXIS_HEIGHT),
            Sense::hover(),
        );
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, palette.header_bg);
        painter.text(
            Pos2::new(rect.left() + 8.0, rect.top() + DAY_HEADER_HEIGHT / 2.0),
            Align2::LEFT_CENTER,
            "Facility",
            FontId::proportional(13.0),
            palette.header_text,
        );

        for (index, (date, label)) in grid.days.iter().zip(grid.day_labels.iter()).enumerate() {
            let left = rect.left() + FACILITY_COLUMN_WIDTH + column_width * index as f32;
            let label_rect = Rect::from_min_size(
                Pos2::new(left, rect.top()),
                Vec2::new(column_width, DAY_HEADER_HEIGHT),
            );
            let axis_rect = Rect::from_min_size(
                Pos2::new(left, label_rect.bottom()),
                Vec2::new(column_width, AXIS_HEIGHT),
            );

            if *date == today {
                painter.rect_filled(label_rect, 0.0, palette.accent);
            }
            painter.text(
                label_rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(12.0),
                palette.header_text,
            );
            painter.rect_filled(axis_rect, 0.0, palette.muted_bg);
            paint_axis(painter, axis_rect, &grid.markers, palette);
            painter.line_segment(
                [label_rect.left_top(), axis_rect.left_bottom()],
                Stroke::new(1.0, palette.border),
            );
        }
    }

    fn show_drop_zone(
        ui: &mut egui::Ui,
        zone: &GroupDropZone,
        total_width: f32,
        palette: &SchedulePalette,
    ) {
        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(total_width, DROP_ZONE_HEIGHT), Sense::hover());
        let fill = if zone.active {
            palette.drop_zone_active
        } else {
            palette.drop_zone
        };
        ui.painter().rect_filled(rect.shrink2(Vec2::new(4.0, 1.0)), 2.0, fill);
    }

    fn show_group_header(
        ui: &mut egui::Ui,
        section: &GroupSection,
        total_width: f32,
        palette: &SchedulePalette,
        drag: &mut DragController,
        router: &mut DragRouter,
    ) {
        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(total_width, GROUP_HEADER_HEIGHT),
            Sense::click_and_drag(),
        );

        let mut fill = section
            .color
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(palette.muted_bg);
        if section.dimmed {
            fill = fill.gamma_multiply(0.5);
        }
        let text_color = text_on(fill);

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, fill);
        painter.line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            Stroke::new(1.0, palette.border),
        );
        painter.text(
            rect.left_center() + Vec2::new(8.0, 0.0),
            Align2::LEFT_CENTER,
            format!("☰  {}", section.header),
            FontId::proportional(14.0),
            text_color,
        );
        painter.text(
            rect.right_center() - Vec2::new(8.0, 0.0),
            Align2::RIGHT_CENTER,
            format!("{} facilities", section.facility_count),
            FontId::proportional(11.0),
            text_color,
        );

        router.register_group_header(&section.group_id, rect.intersect(ui.clip_rect()));

        if response.hovered() && drag.is_idle() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
        if response.drag_started() {
            drag.begin_group_drag(&section.group_id);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn show_row(
        ui: &mut egui::Ui,
        row: &WeekRow,
        dimmed: bool,
        appointments: &[Appointment],
        geometry: &LaneGeometry,
        today: NaiveDate,
        column_width: f32,
        palette: &SchedulePalette,
        drag: &mut DragController,
        router: &mut DragRouter,
    ) {
        let total_width = FACILITY_COLUMN_WIDTH + column_width * 7.0;
        let (rect, _) = ui.allocate_exact_size(Vec2::new(total_width, row.height), Sense::hover());
        let name_rect =
            Rect::from_min_size(rect.min, Vec2::new(FACILITY_COLUMN_WIDTH, rect.height()));

        {
            let painter = ui.painter();
            painter.rect_filled(name_rect, 0.0, palette.muted_bg);
            painter.text(
                name_rect.left_top() + Vec2::new(8.0, 8.0),
                Align2::LEFT_TOP,
                &row.facility,
                FontId::proportional(13.0),
                palette.text,
            );
        }

        let dragged = drag.appointment_drag().map(|d| d.appointment_id.clone());
        for (index, cell) in row.cells.iter().enumerate() {
            let cell_rect = Rect::from_min_size(
                Pos2::new(name_rect.right() + column_width * index as f32, rect.top()),
                Vec2::new(column_width, rect.height()),
            );

            let background = if cell.is_drag_source {
                palette.drag_source
            } else if cell.date == today {
                palette.today_bg
            } else {
                palette.cell_bg
            };

            {
                let painter = ui.painter();
                painter.rect_filled(cell_rect, 0.0, background);
                paint_hour_lines(painter, cell_rect, palette, true);
                if let Some(highlight) = cell.highlight {
                    paint_slot_highlight(
                        painter,
                        cell_rect,
                        highlight.left,
                        highlight.width,
                        palette,
                    );
                }
                painter.rect_stroke(cell_rect, 0.0, Stroke::new(1.0, palette.border));
            }

            if cell.interactive {
                router.register_cell(
                    DropCell::new(cell.facility.clone(), cell.date),
                    cell_rect.intersect(ui.clip_rect()),
                );
            }

            for block in &cell.blocks {
                let rect = block_rect(
                    cell_rect,
                    block.placement.left,
                    block.placement.width,
                    block.top,
                    block.height,
                    geometry.min_block_px,
                );
                let faded = dimmed || dragged.as_deref() == Some(block.appointment_id.as_str());
                show_block(ui, rect, block, appointments, drag, faded);
            }
        }

        if dimmed {
            ui.painter()
                .rect_filled(rect, 0.0, Color32::from_white_alpha(60));
        }
    }

    /// Ghost of the dragged appointment, one day-column wide per spanned day,
    /// following the pointer above everything else.
    fn paint_preview(
        ctx: &egui::Context,
        preview: &DragPreview,
        column_width: f32,
        geometry: &LaneGeometry,
    ) {
        let Some((x, y)) = preview.pointer else {
            return;
        };

        let layer = LayerId::new(Order::Tooltip, Id::new("appointment_drag_preview"));
        let painter = ctx.layer_painter(layer);
        let fill = block_color(&preview.color).gamma_multiply(0.85);
        let text_color = text_on(fill);
        let origin = Pos2::new(x + 8.0, y - geometry.block_height / 2.0);

        for (index, segment) in preview.segments.iter().enumerate() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(column_width * index as f32, 0.0),
                Vec2::new(column_width - 2.0, geometry.block_height),
            );
            painter.rect_filled(rect, rounding_for(segment.rounding), fill);
            painter.text(
                rect.left_top() + Vec2::new(6.0, 4.0),
                Align2::LEFT_TOP,
                &preview.title,
                FontId::proportional(12.0),
                text_color,
            );
            if let Some(label) = segment.label.text() {
                painter.text(
                    rect.left_top() + Vec2::new(6.0, 20.0),
                    Align2::LEFT_TOP,
                    label,
                    FontId::proportional(10.0),
                    text_color,
                );
            }
        }
    }
}
