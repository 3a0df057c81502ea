// Domain errors
// Validation failures for appointments, facility groups and settings

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Appointment id cannot be empty")]
    EmptyId,

    #[error("Appointment '{id}' has an empty title")]
    EmptyTitle { id: String },

    #[error("Appointment '{id}' must end after it starts ({start} >= {end})")]
    InvalidTimeRange {
        id: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Facility '{facility}' is listed in more than one group position")]
    DuplicateFacility { facility: String },

    #[error("Facility group '{0}' not found")]
    UnknownGroup(String),

    #[error("Appointment '{0}' not found")]
    UnknownAppointment(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}
