use chrono::NaiveDate;

use super::{appointments_in_scope, lay_out_scope, slot_highlight, AppointmentBlock, SlotHighlight};
use crate::models::appointment::Appointment;
use crate::models::settings::LaneGeometry;
use crate::services::interaction::DragController;
use crate::services::layout::{day_markers, TimeMarker};
use crate::utils::date::format_long_date;

/// One facility across the 24-hour axis.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityRow {
    pub facility: String,
    pub lane_count: usize,
    pub height: f32,
    pub blocks: Vec<AppointmentBlock>,
    pub highlight: Option<SlotHighlight>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayGrid {
    pub date: NaiveDate,
    pub title: String,
    pub markers: Vec<TimeMarker>,
    pub rows: Vec<FacilityRow>,
}

/// Lay out `date` with time running left to right and one row per facility,
/// in the order given.
pub fn compose_day(
    appointments: &[Appointment],
    facilities: &[String],
    date: NaiveDate,
    geometry: &LaneGeometry,
    drag: &DragController,
) -> DayGrid {
    let rows = facilities
        .iter()
        .map(|facility| {
            let scoped = appointments_in_scope(appointments, facility, date);
            let scope = lay_out_scope(&scoped, date, geometry);
            FacilityRow {
                facility: facility.clone(),
                lane_count: scope.lane_count,
                height: scope.height,
                blocks: scope.blocks,
                highlight: slot_highlight(drag, facility, date),
            }
        })
        .collect();

    DayGrid {
        date,
        title: format_long_date(date),
        markers: day_markers(),
        rows,
    }
}
