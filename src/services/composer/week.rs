use chrono::NaiveDate;

use super::{appointments_in_scope, lay_out_scope, slot_highlight, AppointmentBlock, SlotHighlight};
use crate::models::appointment::Appointment;
use crate::models::facility_group::FacilityGroup;
use crate::models::settings::LaneGeometry;
use crate::services::interaction::{DragController, InsertionSide};
use crate::services::layout::{
    classify_day, segment_label, week_markers, EndRounding, SegmentLabel, TimeMarker,
};
use crate::utils::date::{format_week_day, week_dates};

/// One facility on one day of the week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekCell {
    pub facility: String,
    pub date: NaiveDate,
    pub lane_count: usize,
    pub height: f32,
    pub blocks: Vec<AppointmentBlock>,
    /// Holds a segment of the appointment being dragged.
    pub is_drag_source: bool,
    pub highlight: Option<SlotHighlight>,
    /// False while a group is being dragged; cells ignore appointment drags then.
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    pub facility: String,
    /// Tallest cell in the row.
    pub height: f32,
    pub cells: Vec<WeekCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDropZone {
    pub group_id: String,
    pub side: InsertionSide,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSection {
    pub group_id: String,
    pub header: String,
    pub facility_count: usize,
    pub color: Option<String>,
    /// The section currently being dragged.
    pub dimmed: bool,
    pub zone_above: Option<GroupDropZone>,
    pub zone_below: Option<GroupDropZone>,
    pub rows: Vec<WeekRow>,
}

/// Ghost of one day of the dragged appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSegment {
    pub date: NaiveDate,
    pub label: SegmentLabel,
    pub rounding: EndRounding,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview {
    pub appointment_id: String,
    pub title: String,
    pub color: String,
    pub pointer: Option<(f32, f32)>,
    pub segments: Vec<PreviewSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekGrid {
    pub days: [NaiveDate; 7],
    pub day_labels: Vec<String>,
    pub markers: Vec<TimeMarker>,
    pub sections: Vec<GroupSection>,
    pub preview: Option<DragPreview>,
}

/// Lay out the Monday-start week containing `date`, one section per group.
pub fn compose_week(
    appointments: &[Appointment],
    groups: &[FacilityGroup],
    date: NaiveDate,
    geometry: &LaneGeometry,
    drag: &DragController,
) -> WeekGrid {
    let days = week_dates(date);
    let dragged_group = drag.group_drag().map(|g| g.group_id.as_str());
    let interactive = drag.appointment_targets_enabled();

    let sections = groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let rows = group
                .facilities
                .iter()
                .map(|facility| {
                    compose_row(appointments, facility, &days, geometry, drag, interactive)
                })
                .collect();

            let is_last = index + 1 == groups.len();
            let (zone_above, zone_below) = match dragged_group {
                Some(dragged) if dragged != group.id => (
                    Some(drop_zone(drag, &group.id, InsertionSide::Above)),
                    is_last.then(|| drop_zone(drag, &group.id, InsertionSide::Below)),
                ),
                _ => (None, None),
            };

            GroupSection {
                group_id: group.id.clone(),
                header: group.header_label(),
                facility_count: group.facilities.len(),
                color: group.color.clone(),
                dimmed: dragged_group == Some(group.id.as_str()),
                zone_above,
                zone_below,
                rows,
            }
        })
        .collect();

    WeekGrid {
        days,
        day_labels: days.iter().map(|d| format_week_day(*d)).collect(),
        markers: week_markers(),
        sections,
        preview: drag_preview(appointments, drag),
    }
}

fn compose_row(
    appointments: &[Appointment],
    facility: &str,
    days: &[NaiveDate; 7],
    geometry: &LaneGeometry,
    drag: &DragController,
    interactive: bool,
) -> WeekRow {
    let source = drag.appointment_drag();
    let cells: Vec<WeekCell> = days
        .iter()
        .map(|&date| {
            let scoped = appointments_in_scope(appointments, facility, date);
            let scope = lay_out_scope(&scoped, date, geometry);
            WeekCell {
                facility: facility.to_string(),
                date,
                lane_count: scope.lane_count,
                height: scope.height,
                blocks: scope.blocks,
                is_drag_source: source.is_some_and(|d| d.is_source_cell(facility, date)),
                highlight: slot_highlight(drag, facility, date),
                interactive,
            }
        })
        .collect();

    let height = cells
        .iter()
        .map(|cell| cell.height)
        .fold(geometry.min_height, f32::max);

    WeekRow {
        facility: facility.to_string(),
        height,
        cells,
    }
}

fn drop_zone(drag: &DragController, group_id: &str, side: InsertionSide) -> GroupDropZone {
    GroupDropZone {
        group_id: group_id.to_string(),
        side,
        active: drag.group_insertion(group_id) == Some(side),
    }
}

fn drag_preview(appointments: &[Appointment], drag: &DragController) -> Option<DragPreview> {
    let state = drag.appointment_drag()?;
    let appointment = appointments.iter().find(|a| a.id == state.appointment_id)?;

    let last = state.span_dates.len().saturating_sub(1);
    let segments = state
        .span_dates
        .iter()
        .enumerate()
        .map(|(index, &date)| PreviewSegment {
            date,
            label: segment_label(appointment, classify_day(appointment, date)),
            rounding: EndRounding::for_segment(index == 0, index == last),
        })
        .collect();

    Some(DragPreview {
        appointment_id: appointment.id.clone(),
        title: appointment.title.clone(),
        color: appointment.color.clone(),
        pointer: state.pointer,
        segments,
    })
}
