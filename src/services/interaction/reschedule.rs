use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::{
    AppointmentDrag, DragController, DropCell, InteractionState, RescheduleCommand, SlotHover,
};
use crate::models::appointment::Appointment;

pub const HOURS_PER_DAY_SLOTS: u32 = 24;

/// Map a pointer offset within a cell to an hour slot in `[0, 23]`.
///
/// `slot = floor(clamp(x / width, 0, 1) * 24)`, with the right edge folded
/// into the last slot. A degenerate cell maps everything to slot 0.
pub fn slot_from_pointer(pointer_x: f32, cell_width: f32) -> u32 {
    if cell_width.is_nan() || cell_width <= 0.0 || !pointer_x.is_finite() {
        return 0;
    }
    let ratio = (pointer_x / cell_width).clamp(0.0, 1.0);
    let slot = (ratio * HOURS_PER_DAY_SLOTS as f32).floor() as u32;
    slot.min(HOURS_PER_DAY_SLOTS - 1)
}

/// New `(start, end)` for a drop at `slot` on `day`, keeping the original duration.
pub fn rescheduled_interval(
    original_start: NaiveDateTime,
    original_end: NaiveDateTime,
    day: NaiveDate,
    slot: u32,
) -> (NaiveDateTime, NaiveDateTime) {
    let hour = slot.min(HOURS_PER_DAY_SLOTS - 1);
    let start_time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default();
    let new_start = day.and_time(start_time);
    (new_start, new_start + (original_end - original_start))
}

impl DragController {
    /// Start dragging an appointment. Refused while a group drag is active.
    pub fn begin_appointment_drag(&mut self, appointment: &Appointment) -> bool {
        if let InteractionState::Group(group) = &self.state {
            log::debug!(
                "Ignoring drag of appointment '{}' while group '{}' is moving",
                appointment.id,
                group.group_id
            );
            return false;
        }

        log::debug!("Begin drag of appointment '{}'", appointment.id);
        self.state = InteractionState::Appointment(AppointmentDrag {
            appointment_id: appointment.id.clone(),
            original_start: appointment.start,
            original_end: appointment.end,
            original_facility: appointment.facility.clone(),
            duration: appointment.duration(),
            span_dates: appointment.span_dates(),
            pointer: None,
            hover: None,
        });
        true
    }

    /// Pointer moved over `cell`. Replaces any previous highlight and returns
    /// the hovered slot, or `None` when no appointment drag is active.
    pub fn hover_cell(&mut self, cell: DropCell, pointer_x: f32, cell_width: f32) -> Option<u32> {
        let InteractionState::Appointment(drag) = &mut self.state else {
            return None;
        };

        let slot = slot_from_pointer(pointer_x, cell_width);
        drag.hover = Some(SlotHover { cell, slot });
        Some(slot)
    }

    /// Pointer left `cell`. Only clears the highlight if it belongs to that cell.
    pub fn leave_cell(&mut self, cell: &DropCell) {
        if let InteractionState::Appointment(drag) = &mut self.state {
            if drag.hover.as_ref().is_some_and(|hover| &hover.cell == cell) {
                drag.hover = None;
            }
        }
    }

    /// Highlighted slot for `cell`, if it is the hovered one.
    pub fn hovered_slot(&self, facility: &str, date: NaiveDate) -> Option<u32> {
        self.appointment_drag()
            .and_then(|drag| drag.hover.as_ref())
            .filter(|hover| hover.cell.facility == facility && hover.cell.date == date)
            .map(|hover| hover.slot)
    }

    /// Release over `cell`. Emits a reschedule command and returns to idle.
    ///
    /// Drops are ignored (and the group drag left intact) while a group is
    /// being moved. The target facility is not validated.
    pub fn drop_on_cell(
        &mut self,
        cell: DropCell,
        pointer_x: f32,
        cell_width: f32,
    ) -> Option<RescheduleCommand> {
        let InteractionState::Appointment(drag) = &self.state else {
            return None;
        };

        let slot = slot_from_pointer(pointer_x, cell_width);
        let (new_start, new_end) =
            rescheduled_interval(drag.original_start, drag.original_end, cell.date, slot);

        let command = RescheduleCommand {
            appointment_id: drag.appointment_id.clone(),
            new_start,
            new_end,
            new_facility: cell.facility,
        };

        log::debug!(
            "Dropped appointment '{}' on '{}' at {}",
            command.appointment_id,
            command.new_facility,
            command.new_start
        );
        self.state = InteractionState::Idle;
        Some(command)
    }
}
