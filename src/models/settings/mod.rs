// Settings module
// Layout geometry and startup preferences, stored as TOML

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::facility_group::DEFAULT_ON_CALL_SUFFIX;
use super::ui::ViewType;
use crate::error::ScheduleError;

/// Vertical geometry of one lane-packed row (Day) or cell (Week).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneGeometry {
    /// Height reserved per lane when sizing the row.
    pub lane_height: f32,
    /// Rows never shrink below this, even when empty.
    pub min_height: f32,
    /// Vertical distance between the tops of consecutive lanes.
    pub block_pitch: f32,
    pub block_padding: f32,
    pub block_height: f32,
    /// Pixel floor on block width so short appointments stay clickable.
    pub min_block_px: f32,
}

impl LaneGeometry {
    pub fn day() -> Self {
        Self {
            lane_height: 55.0,
            min_height: 120.0,
            block_pitch: 50.0,
            block_padding: 10.0,
            block_height: 40.0,
            min_block_px: 80.0,
        }
    }

    pub fn week() -> Self {
        Self {
            lane_height: 60.0,
            min_height: 180.0,
            block_pitch: 55.0,
            block_padding: 10.0,
            block_height: 45.0,
            min_block_px: 60.0,
        }
    }

    /// `max(min_height, lane_count * lane_height)`
    pub fn row_height(&self, lane_count: usize) -> f32 {
        self.min_height.max(lane_count as f32 * self.lane_height)
    }

    pub fn block_top(&self, lane: usize) -> f32 {
        lane as f32 * self.block_pitch + self.block_padding
    }

    fn validate(&self, name: &str) -> Result<(), ScheduleError> {
        if self.lane_height <= 0.0 || self.block_height <= 0.0 || self.block_pitch <= 0.0 {
            return Err(ScheduleError::InvalidSettings(format!(
                "{} lane, pitch and block heights must be positive",
                name
            )));
        }
        if self.min_height < 0.0 || self.min_block_px < 0.0 {
            return Err(ScheduleError::InvalidSettings(format!(
                "{} minimum sizes cannot be negative",
                name
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_view: ViewType,
    /// Date shown at startup; today when unset.
    pub initial_date: Option<NaiveDate>,
    pub on_call_suffix: String,
    /// JSON file with facilities, groups and appointments; built-in sample when unset.
    pub seed_path: Option<String>,
    pub day_layout: LaneGeometry,
    pub week_layout: LaneGeometry,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_view: ViewType::Week,
            initial_date: NaiveDate::from_ymd_opt(2025, 6, 23),
            on_call_suffix: DEFAULT_ON_CALL_SUFFIX.to_string(),
            seed_path: None,
            day_layout: LaneGeometry::day(),
            week_layout: LaneGeometry::week(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        self.day_layout.validate("day_layout")?;
        self.week_layout.validate("week_layout")?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
