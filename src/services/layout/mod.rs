// Layout engine module
// Lane packing and day clipping shared by every grid view

pub mod clipper;
pub mod packer;

pub use clipper::{
    classify_day, clip_to_day, segment_label, slot_extent, DayPosition, EndRounding,
    SegmentLabel, SpanPlacement, MIN_WIDTH_PERCENT,
};
pub use packer::{pack_lanes, LaneAssignment};

use crate::utils::date::hour_marker_label;

/// Hour tick on the horizontal time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeMarker {
    pub hour: u32,
    /// Percent of the axis.
    pub left: f64,
    pub label: Option<String>,
}

fn markers(step: u32) -> Vec<TimeMarker> {
    (0..=24)
        .step_by(step as usize)
        .map(|hour| TimeMarker {
            hour,
            left: hour as f64 / 24.0 * 100.0,
            label: hour_marker_label(hour),
        })
        .collect()
}

/// Day view axis: every two hours, `00:00` through the unlabeled `24`.
pub fn day_markers() -> Vec<TimeMarker> {
    markers(2)
}

/// Week view axis: `0, 6, 12, 18, 24`.
pub fn week_markers() -> Vec<TimeMarker> {
    markers(6)
}

/// Week view draws a heavier grid line every sixth hour.
pub fn is_major_hour(hour: u32) -> bool {
    hour % 6 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_markers() {
        let markers = day_markers();
        assert_eq!(markers.len(), 13);
        assert_eq!(markers[1].label.as_deref(), Some("02:00"));
        assert_eq!(markers[12].hour, 24);
        assert_eq!(markers[12].label, None);
        assert!((markers[12].left - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_week_markers() {
        let hours: Vec<u32> = week_markers().iter().map(|m| m.hour).collect();
        assert_eq!(hours, vec![0, 6, 12, 18, 24]);
        assert!(is_major_hour(18));
        assert!(!is_major_hour(13));
    }

    #[test]
    fn test_week_markers_sit_on_major_lines() {
        assert!(week_markers().iter().all(|m| is_major_hour(m.hour)));
        let majors = (0..=24).filter(|h| is_major_hour(*h)).count();
        assert_eq!(majors, week_markers().len());
    }
}
