// Seed data module
// Facilities, optional groups and appointments loaded from JSON at startup

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::appointment::Appointment;
use crate::models::facility_group::FacilityGroup;
use crate::services::schedule::Schedule;

const SAMPLE_SCHEDULE: &str = include_str!("../../../assets/sample_schedule.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub facilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_groups: Option<Vec<FacilityGroup>>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl SeedData {
    /// The demo week of June 23, 2025 bundled with the binary.
    pub fn sample() -> Result<Self> {
        serde_json::from_str(SAMPLE_SCHEDULE).context("failed to parse built-in sample schedule")
    }

    pub fn into_schedule(self) -> Schedule {
        Schedule::new(self.facilities, self.facility_groups, self.appointments)
    }
}

pub fn load_seed(path: &Path) -> Result<SeedData> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed data from {}", path.display()))?;
    let seed = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize seed data from {}", path.display()))?;
    Ok(seed)
}

/// Schedule from `path` when given, otherwise the built-in sample. A file that
/// fails to load is logged and replaced by the sample.
pub fn load_schedule(path: Option<&Path>) -> Result<Schedule> {
    if let Some(path) = path {
        match load_seed(path) {
            Ok(seed) => {
                log::info!(
                    "Loaded {} appointments across {} facilities from {}",
                    seed.appointments.len(),
                    seed.facilities.len(),
                    path.display()
                );
                return Ok(seed.into_schedule());
            }
            Err(e) => log::warn!("{:#}; falling back to the sample schedule", e),
        }
    }

    Ok(SeedData::sample()?.into_schedule())
}
