//! Drag-and-drop interaction state.
//!
//! A single [`DragController`] owns the one active drag session. Appointment
//! drags and facility-group drags are mutually exclusive: while one is active,
//! the other's transitions are ignored. Every transition is a plain method so
//! the state machine can be driven from tests without pointer events.

mod reorder;
mod reschedule;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::facility_group::FacilityGroup;

pub use reorder::{insertion_side, reorder_groups};
pub use reschedule::{rescheduled_interval, slot_from_pointer, HOURS_PER_DAY_SLOTS};

/// A facility row on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropCell {
    pub facility: String,
    pub date: NaiveDate,
}

impl DropCell {
    pub fn new(facility: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            facility: facility.into(),
            date,
        }
    }
}

/// Currently highlighted cell and hour slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotHover {
    pub cell: DropCell,
    pub slot: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDrag {
    pub appointment_id: String,
    pub original_start: NaiveDateTime,
    pub original_end: NaiveDateTime,
    pub original_facility: String,
    pub duration: Duration,
    /// Days covered by the appointment, for the multi-day drag preview.
    pub span_dates: Vec<NaiveDate>,
    pub pointer: Option<(f32, f32)>,
    pub hover: Option<SlotHover>,
}

impl AppointmentDrag {
    /// True for cells that currently hold a segment of the dragged appointment.
    pub fn is_source_cell(&self, facility: &str, date: NaiveDate) -> bool {
        self.original_facility == facility && self.span_dates.contains(&date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionSide {
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHover {
    pub group_id: String,
    pub side: InsertionSide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDrag {
    pub group_id: String,
    pub hover: Option<GroupHover>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Appointment(AppointmentDrag),
    Group(GroupDrag),
}

/// Emitted when an appointment is dropped on a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescheduleCommand {
    pub appointment_id: String,
    pub new_start: NaiveDateTime,
    pub new_end: NaiveDateTime,
    pub new_facility: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Reschedule(RescheduleCommand),
    Reorder(Vec<FacilityGroup>),
}

/// Receiver for the two mutations a drag can propose.
#[cfg_attr(test, mockall::automock)]
pub trait ScheduleSink {
    fn reschedule(&mut self, command: &RescheduleCommand);

    /// Receives the complete group list in its new order.
    fn reorder_groups(&mut self, groups: Vec<FacilityGroup>);
}

pub fn forward_outcome(outcome: DropOutcome, sink: &mut dyn ScheduleSink) {
    match outcome {
        DropOutcome::Reschedule(command) => sink.reschedule(&command),
        DropOutcome::Reorder(groups) => sink.reorder_groups(groups),
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: InteractionState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == InteractionState::Idle
    }

    pub fn appointment_drag(&self) -> Option<&AppointmentDrag> {
        match &self.state {
            InteractionState::Appointment(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn group_drag(&self) -> Option<&GroupDrag> {
        match &self.state {
            InteractionState::Group(drag) => Some(drag),
            _ => None,
        }
    }

    /// Appointment drag affordances are off while a group is being moved.
    pub fn appointment_targets_enabled(&self) -> bool {
        self.group_drag().is_none()
    }

    /// Record the live pointer position for the drag preview.
    pub fn update_pointer(&mut self, x: f32, y: f32) {
        if let InteractionState::Appointment(drag) = &mut self.state {
            drag.pointer = Some((x, y));
        }
    }

    /// Drag ended without a drop, or was dropped outside every target.
    /// Clears all transient state; nothing is emitted.
    pub fn end_drag(&mut self) {
        if !self.is_idle() {
            log::debug!("Drag ended without a drop; clearing interaction state");
        }
        self.state = InteractionState::Idle;
    }
}
