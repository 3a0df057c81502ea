// Appointment module
// Provider appointment booked at a facility for a half-open time range

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Length given to an interval whose end is not after its start.
pub const MALFORMED_SPAN_MINUTES: i64 = 5;

/// Half-open `[start, end)` interval tagged with the appointment it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Intervals that only touch at a boundary do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn is_malformed(&self) -> bool {
        self.end <= self.start
    }

    /// Returns a well-formed copy. A malformed interval becomes a short block
    /// anchored at its start so it can still be placed and clicked.
    pub fn normalized(&self) -> Interval {
        if !self.is_malformed() {
            return self.clone();
        }

        log::warn!(
            "Appointment '{}' ends at or before its start ({} >= {}); treating as {} minutes",
            self.id,
            self.start,
            self.end,
            MALFORMED_SPAN_MINUTES
        );
        Interval {
            id: self.id.clone(),
            start: self.start,
            end: self.start + Duration::minutes(MALFORMED_SPAN_MINUTES),
        }
    }
}

/// Scheduled appointment for a provider at a facility.
///
/// Appointments are owned by the caller; the scheduler only ever proposes a new
/// start, end and facility for one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub facility: String,
    #[serde(rename = "type", default)]
    pub appointment_type: String,
    #[serde(rename = "startTime")]
    pub start: NaiveDateTime,
    #[serde(rename = "endTime")]
    pub end: NaiveDateTime,
    /// Opaque display tag, carried through untouched.
    #[serde(default)]
    pub color: String,
}

impl Appointment {
    /// Create a builder for constructing appointments
    pub fn builder() -> AppointmentBuilder {
        AppointmentBuilder::new()
    }

    /// Validate the appointment
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.id.trim().is_empty() {
            return Err(ScheduleError::EmptyId);
        }

        if self.title.trim().is_empty() {
            return Err(ScheduleError::EmptyTitle {
                id: self.id.clone(),
            });
        }

        if self.end <= self.start {
            return Err(ScheduleError::InvalidTimeRange {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
            });
        }

        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.id.clone(), self.start, self.end)
    }

    /// Every calendar day touched by the appointment, start date first.
    pub fn span_dates(&self) -> Vec<NaiveDate> {
        let first = self.start.date();
        let last = self.end.date().max(first);
        first.iter_days().take_while(|day| *day <= last).collect()
    }

    pub fn is_multi_day(&self) -> bool {
        self.end.date() > self.start.date()
    }

    /// Copy of this appointment moved to a new time range and facility.
    pub fn with_schedule(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        facility: impl Into<String>,
    ) -> Appointment {
        Appointment {
            start,
            end,
            facility: facility.into(),
            ..self.clone()
        }
    }
}

/// Builder for creating appointments with optional fields
#[derive(Default)]
pub struct AppointmentBuilder {
    id: Option<String>,
    title: Option<String>,
    provider: String,
    facility: String,
    appointment_type: String,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    color: String,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn facility(mut self, facility: impl Into<String>) -> Self {
        self.facility = facility.into();
        self
    }

    pub fn appointment_type(mut self, appointment_type: impl Into<String>) -> Self {
        self.appointment_type = appointment_type.into();
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Build the appointment, validating id, title and time range
    pub fn build(self) -> Result<Appointment, ScheduleError> {
        let appointment = self.build_unchecked();
        appointment.validate()?;
        Ok(appointment)
    }

    /// Build without validation. Layout code must cope with whatever callers
    /// hand it, so tests use this to produce malformed input.
    pub fn build_unchecked(self) -> Appointment {
        let start = self.start.unwrap_or_default();
        Appointment {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            provider: self.provider,
            facility: self.facility,
            appointment_type: self.appointment_type,
            start,
            end: self.end.unwrap_or(start),
            color: self.color,
        }
    }
}
