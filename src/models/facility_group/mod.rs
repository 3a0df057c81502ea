// Facility group module
// Named clusters of facility rows that are displayed and reordered together

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ScheduleError;

/// Suffix that marks the on-call variant of a base facility.
pub const DEFAULT_ON_CALL_SUFFIX: &str = " - OnCall";

/// Hue step between synthesized groups, in degrees.
const GROUP_HUE_STEP: f64 = 137.5;
const GROUP_SATURATION: u32 = 70;
const GROUP_LIGHTNESS: u32 = 95;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityGroup {
    pub id: String,
    pub name: String,
    pub facilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl FacilityGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>, facilities: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            facilities,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn contains(&self, facility: &str) -> bool {
        self.facilities.iter().any(|f| f == facility)
    }

    pub fn header_label(&self) -> String {
        format!("{} Group", self.name)
    }
}

/// Display tag for the group at `index`: `hsl(hue, 70%, 95%)`.
pub fn group_hue_tag(index: usize) -> String {
    let hue = (index as f64 * GROUP_HUE_STEP) % 360.0;
    format!("hsl({}, {}%, {}%)", hue, GROUP_SATURATION, GROUP_LIGHTNESS)
}

/// Strip the on-call suffix, if present.
pub fn base_facility_name<'a>(facility: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return facility;
    }
    facility.strip_suffix(suffix).unwrap_or(facility)
}

/// Group facilities that share a base name. Groups are ordered by the first
/// facility seen for each base name; members keep list order.
pub fn synthesize_groups(facilities: &[String], suffix: &str) -> Vec<FacilityGroup> {
    let mut buckets: Vec<(String, Vec<String>)> = Vec::new();

    for facility in facilities {
        let base = base_facility_name(facility, suffix);
        match buckets.iter_mut().find(|(name, _)| name == base) {
            Some((_, members)) => members.push(facility.clone()),
            None => buckets.push((base.to_string(), vec![facility.clone()])),
        }
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(index, (name, members))| {
            FacilityGroup::new(format!("group-{}", index), name, members)
                .with_color(group_hue_tag(index))
        })
        .collect()
}

/// Facility names in display order: group by group, members in group order.
pub fn ordered_facilities(groups: &[FacilityGroup]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|group| group.facilities.iter().cloned())
        .collect()
}

/// Check that explicit groups do not list a facility twice.
///
/// Facilities missing from every group are logged; they simply have no row in
/// the grouped views.
pub fn validate_partition(
    groups: &[FacilityGroup],
    facilities: &[String],
) -> Result<(), ScheduleError> {
    let mut seen = HashSet::new();
    for facility in groups.iter().flat_map(|g| g.facilities.iter()) {
        if !seen.insert(facility.as_str()) {
            return Err(ScheduleError::DuplicateFacility {
                facility: facility.clone(),
            });
        }
    }

    for facility in facilities {
        if !seen.contains(facility.as_str()) {
            log::warn!("Facility '{}' is not a member of any group", facility);
        }
    }

    Ok(())
}
