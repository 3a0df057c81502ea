//! View composition.
//!
//! Turns the appointment collection into plain grid descriptions for the Day,
//! Week and Month views. Every facility+day scope is packed and clipped on its
//! own; lane indices are meaningless outside the scope that produced them.
//! Nothing here touches egui, so the grids can be asserted on directly.

pub mod day;
pub mod month;
pub mod week;

pub use day::{compose_day, DayGrid, FacilityRow};
pub use month::{compose_month, MonthCell, MonthGrid, TypeBadge};
pub use week::{
    compose_week, DragPreview, GroupDropZone, GroupSection, PreviewSegment, WeekCell, WeekGrid,
    WeekRow,
};

use chrono::NaiveDate;

use crate::models::appointment::Appointment;
use crate::models::settings::LaneGeometry;
use crate::services::interaction::DragController;
use crate::services::layout::{clip_to_day, pack_lanes, slot_extent, SpanPlacement};
use crate::utils::date::touches_day;

/// One appointment segment placed inside a facility+day scope.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentBlock {
    pub appointment_id: String,
    pub title: String,
    pub provider: String,
    pub color: String,
    pub lane: usize,
    /// Offset from the top of the row, in points.
    pub top: f32,
    pub height: f32,
    pub placement: SpanPlacement,
}

impl AppointmentBlock {
    /// Time label under the title, if the segment has one.
    pub fn time_label(&self) -> Option<String> {
        self.placement.label.text()
    }
}

/// Packed content of one facility on one day.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct LaidOutScope {
    pub lane_count: usize,
    pub height: f32,
    pub blocks: Vec<AppointmentBlock>,
}

/// Appointments of `facility` that touch `date`, in input order.
///
/// The day test is inclusive at both ends, so an appointment ending exactly at
/// midnight still shows a minimum-width segment on the following day.
pub fn appointments_in_scope<'a>(
    appointments: &'a [Appointment],
    facility: &str,
    date: NaiveDate,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|apt| apt.facility == facility)
        .filter(|apt| touches_day(apt.start, apt.end.max(apt.start), date))
        .collect()
}

pub(crate) fn lay_out_scope(
    scoped: &[&Appointment],
    date: NaiveDate,
    geometry: &LaneGeometry,
) -> LaidOutScope {
    let intervals: Vec<_> = scoped.iter().map(|apt| apt.interval()).collect();
    let lanes = pack_lanes(&intervals);

    let blocks = scoped
        .iter()
        .zip(lanes.lane_of.iter())
        .map(|(apt, &lane)| AppointmentBlock {
            appointment_id: apt.id.clone(),
            title: apt.title.clone(),
            provider: apt.provider.clone(),
            color: apt.color.clone(),
            lane,
            top: geometry.block_top(lane),
            height: geometry.block_height,
            placement: clip_to_day(apt, date),
        })
        .collect();

    LaidOutScope {
        lane_count: lanes.lane_count(),
        height: geometry.row_height(lanes.lane_count()),
        blocks,
    }
}

/// Slot highlight for the hovered drop cell, as percent of the day axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotHighlight {
    pub slot: u32,
    pub left: f64,
    pub width: f64,
}

pub(crate) fn slot_highlight(
    drag: &DragController,
    facility: &str,
    date: NaiveDate,
) -> Option<SlotHighlight> {
    drag.hovered_slot(facility, date).map(|slot| {
        let (left, width) = slot_extent(slot);
        SlotHighlight { slot, left, width }
    })
}
