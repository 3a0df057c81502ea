// Test fixtures - reusable schedule data
// The demo week of June 23, 2025 plus small builders for ad-hoc cases
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use facility_scheduler::models::appointment::Appointment;
use facility_scheduler::models::facility_group::FacilityGroup;
use facility_scheduler::services::schedule::Schedule;
use facility_scheduler::services::seed::SeedData;

pub mod dates {
    use super::*;

    /// Day of June 2025
    pub fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    /// June 2025 at `hour:minute`
    pub fn june_at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        june(day).and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Monday of the demo week
    pub fn demo_monday() -> NaiveDate {
        june(23)
    }
}

pub mod appointments {
    use super::*;

    pub fn at_facility(
        id: &str,
        facility: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Appointment {
        Appointment::builder()
            .id(id)
            .title(format!("Appointment {}", id))
            .provider("Dr. Test")
            .facility(facility)
            .appointment_type("MA")
            .start(start)
            .end(end)
            .color("#4ade80")
            .build_unchecked()
    }

    /// "Atish" on paras hospital - OnCall, Tue 14:00 to Wed 10:00
    pub fn overnight_on_call() -> Appointment {
        at_facility(
            "3",
            "paras hospital - OnCall",
            dates::june_at(24, 14, 0),
            dates::june_at(25, 10, 0),
        )
    }
}

pub mod groups {
    use super::*;

    pub fn named(id: &str) -> FacilityGroup {
        FacilityGroup::new(id, id.to_uppercase(), vec![format!("{} facility", id)])
    }

    pub fn ids(groups: &[FacilityGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.id.as_str()).collect()
    }
}

/// The bundled sample: seven facilities, three groups, six appointments.
pub fn sample_schedule() -> Schedule {
    SeedData::sample()
        .expect("bundled sample should parse")
        .into_schedule()
}
