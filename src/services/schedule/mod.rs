// Schedule module
// Immutable appointment/group snapshots and the sink that swaps them on drops

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::ScheduleError;
use crate::models::appointment::Appointment;
use crate::models::facility_group::{
    ordered_facilities, synthesize_groups, validate_partition, FacilityGroup,
    DEFAULT_ON_CALL_SUFFIX,
};
use crate::services::interaction::{RescheduleCommand, ScheduleSink};

/// Everything a render reads. Mutations build a new snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schedule {
    pub facilities: Vec<String>,
    /// Explicit partition of `facilities`; synthesized from names when absent.
    pub groups: Option<Vec<FacilityGroup>>,
    pub appointments: Vec<Appointment>,
}

impl Schedule {
    pub fn new(
        facilities: Vec<String>,
        groups: Option<Vec<FacilityGroup>>,
        appointments: Vec<Appointment>,
    ) -> Self {
        Self {
            facilities,
            groups,
            appointments,
        }
    }

    /// Explicit groups, or groups synthesized by base facility name. An empty
    /// explicit list counts as absent.
    pub fn active_groups(&self, on_call_suffix: &str) -> Vec<FacilityGroup> {
        match &self.groups {
            Some(groups) if !groups.is_empty() => groups.clone(),
            _ => synthesize_groups(&self.facilities, on_call_suffix),
        }
    }

    /// Facility rows in group display order.
    pub fn facility_rows(&self, on_call_suffix: &str) -> Vec<String> {
        ordered_facilities(&self.active_groups(on_call_suffix))
    }

    pub fn find(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|apt| apt.id == id)
    }

    /// Check appointment data and the group partition. Returns every problem
    /// found; rendering copes with all of them.
    pub fn validate(&self) -> Vec<ScheduleError> {
        let mut problems: Vec<ScheduleError> = self
            .appointments
            .iter()
            .filter_map(|apt| apt.validate().err())
            .collect();

        if let Some(groups) = self.groups.as_ref().filter(|g| !g.is_empty()) {
            if let Err(e) = validate_partition(groups, &self.facilities) {
                problems.push(e);
            }
        }
        problems
    }

    /// New snapshot with one appointment moved.
    pub fn with_reschedule(&self, command: &RescheduleCommand) -> Result<Schedule, ScheduleError> {
        if self.find(&command.appointment_id).is_none() {
            return Err(ScheduleError::UnknownAppointment(
                command.appointment_id.clone(),
            ));
        }

        let appointments = self
            .appointments
            .iter()
            .map(|apt| {
                if apt.id == command.appointment_id {
                    apt.with_schedule(command.new_start, command.new_end, &command.new_facility)
                } else {
                    apt.clone()
                }
            })
            .collect();

        Ok(Schedule {
            appointments,
            ..self.clone()
        })
    }

    /// New snapshot with `groups` as the explicit order. The groups must be
    /// the currently active ones.
    pub fn with_group_order(
        &self,
        groups: Vec<FacilityGroup>,
        on_call_suffix: &str,
    ) -> Result<Schedule, ScheduleError> {
        let known: HashSet<String> = self
            .active_groups(on_call_suffix)
            .into_iter()
            .map(|g| g.id)
            .collect();

        if let Some(unknown) = groups.iter().find(|g| !known.contains(&g.id)) {
            return Err(ScheduleError::UnknownGroup(unknown.id.clone()));
        }

        let incoming: HashSet<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        if let Some(missing) = known.iter().find(|id| !incoming.contains(id.as_str())) {
            return Err(ScheduleError::UnknownGroup(missing.clone()));
        }

        Ok(Schedule {
            groups: Some(groups),
            ..self.clone()
        })
    }
}

/// Owner of the current snapshot. Renders clone the `Arc`; drops replace it.
pub struct ScheduleService {
    current: Arc<Schedule>,
    on_call_suffix: String,
}

impl ScheduleService {
    pub fn new(schedule: Schedule) -> Self {
        Self::with_suffix(schedule, DEFAULT_ON_CALL_SUFFIX)
    }

    pub fn with_suffix(schedule: Schedule, on_call_suffix: impl Into<String>) -> Self {
        for problem in schedule.validate() {
            log::warn!("Schedule data: {}", problem);
        }
        Self {
            current: Arc::new(schedule),
            on_call_suffix: on_call_suffix.into(),
        }
    }

    pub fn snapshot(&self) -> Arc<Schedule> {
        Arc::clone(&self.current)
    }

    pub fn active_groups(&self) -> Vec<FacilityGroup> {
        self.current.active_groups(&self.on_call_suffix)
    }

    pub fn facility_rows(&self) -> Vec<String> {
        self.current.facility_rows(&self.on_call_suffix)
    }
}

impl ScheduleSink for ScheduleService {
    fn reschedule(&mut self, command: &RescheduleCommand) {
        match self.current.with_reschedule(command) {
            Ok(next) => {
                log::info!(
                    "Rescheduled appointment '{}' to {} - {} at '{}'",
                    command.appointment_id,
                    command.new_start,
                    command.new_end,
                    command.new_facility
                );
                self.current = Arc::new(next);
            }
            Err(e) => log::warn!("Ignoring reschedule: {}", e),
        }
    }

    fn reorder_groups(&mut self, groups: Vec<FacilityGroup>) {
        match self.current.with_group_order(groups, &self.on_call_suffix) {
            Ok(next) => {
                if let Some(groups) = &next.groups {
                    let order: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
                    log::info!("New facility group order: {:?}", order);
                }
                self.current = Arc::new(next);
            }
            Err(e) => log::warn!("Ignoring group reorder: {}", e),
        }
    }
}
