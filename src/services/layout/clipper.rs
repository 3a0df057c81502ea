//! Horizontal placement of an appointment on a single day's 24-hour axis.
//!
//! Multi-day appointments are cut into per-day segments. The first segment runs
//! to the right edge, the last starts at the left edge and every day in between
//! is a full-width bar. Middle segments assume equal-width day columns, which
//! holds for the fixed seven-column week grid.

use chrono::NaiveDate;

use crate::models::appointment::Appointment;
use crate::utils::date::{end_of_day, format_time, fractional_hour, start_of_day};

/// Smallest block width, as a percentage of the day axis.
pub const MIN_WIDTH_PERCENT: f64 = 2.0;

const HOURS_PER_DAY: f64 = 24.0;

/// Where a day sits within the appointment's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPosition {
    /// Starts and ends on this day.
    Single,
    First,
    Last,
    /// Passes through the whole day.
    Middle,
    /// The appointment does not touch this day.
    Outside,
}

impl DayPosition {
    pub fn is_first_day(self) -> bool {
        matches!(self, DayPosition::Single | DayPosition::First)
    }

    pub fn is_last_day(self) -> bool {
        matches!(self, DayPosition::Single | DayPosition::Last)
    }

    pub fn is_middle_day(self) -> bool {
        self == DayPosition::Middle
    }
}

/// Which horizontal ends of a segment are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndRounding {
    pub left: bool,
    pub right: bool,
}

impl EndRounding {
    pub const BOTH: EndRounding = EndRounding {
        left: true,
        right: true,
    };

    /// Only the ends that coincide with the start or end of the span are rounded.
    pub fn for_segment(is_first_day: bool, is_last_day: bool) -> Self {
        Self {
            left: is_first_day,
            right: is_last_day,
        }
    }
}

/// Time label shown under the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentLabel {
    /// `09:00 - 10:30`
    Range(String, String),
    /// `14:00 →`
    StartsHere(String),
    /// `→ 10:00`
    EndsHere(String),
    /// Middle days show the title only.
    TitleOnly,
}

impl SegmentLabel {
    pub fn text(&self) -> Option<String> {
        match self {
            SegmentLabel::Range(start, end) => Some(format!("{} - {}", start, end)),
            SegmentLabel::StartsHere(start) => Some(format!("{} →", start)),
            SegmentLabel::EndsHere(end) => Some(format!("→ {}", end)),
            SegmentLabel::TitleOnly => None,
        }
    }
}

/// Placement of one appointment segment on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanPlacement {
    /// Left edge, percent of the day axis.
    pub left: f64,
    /// Width, percent of the day axis.
    pub width: f64,
    pub position: DayPosition,
    pub is_multi_day: bool,
    pub rounding: EndRounding,
    pub label: SegmentLabel,
}

/// Classify `date` against the appointment's full span.
pub fn classify_day(appointment: &Appointment, date: NaiveDate) -> DayPosition {
    let day_start = start_of_day(date);
    let day_end = end_of_day(date);

    // a malformed interval collapses onto its start instant
    let end = appointment.end.max(appointment.start);

    if appointment.start > day_end || end < day_start {
        return DayPosition::Outside;
    }

    let starts_here = appointment.start >= day_start;
    let ends_here = end <= day_end;

    match (starts_here, ends_here) {
        (true, true) => DayPosition::Single,
        (true, false) => DayPosition::First,
        (false, true) => DayPosition::Last,
        (false, false) => DayPosition::Middle,
    }
}

/// Label policy for a segment, decided from the span rather than the position
/// so that a single-day appointment always shows its full range.
pub fn segment_label(appointment: &Appointment, position: DayPosition) -> SegmentLabel {
    let start = format_time(appointment.start);
    let end = format_time(appointment.end);

    if !appointment.is_multi_day() {
        return SegmentLabel::Range(start, end);
    }

    match position {
        DayPosition::First => SegmentLabel::StartsHere(start),
        DayPosition::Last => SegmentLabel::EndsHere(end),
        DayPosition::Single => SegmentLabel::Range(start, end),
        DayPosition::Middle | DayPosition::Outside => SegmentLabel::TitleOnly,
    }
}

/// Compute the clipped horizontal extent of `appointment` on `date`.
///
/// `left` is clamped to `[0, 100]`, `width` is floored at
/// [`MIN_WIDTH_PERCENT`], and `left` is pulled back when the floor would push
/// the block past the right edge.
pub fn clip_to_day(appointment: &Appointment, date: NaiveDate) -> SpanPlacement {
    let position = classify_day(appointment, date);
    let day_start = start_of_day(date);
    let day_end = end_of_day(date);

    let effective_start = appointment.start.max(day_start);
    let effective_end = appointment.end.min(day_end);

    let start_hour = fractional_hour(effective_start);
    let end_hour = fractional_hour(effective_end);

    let (left, width) = match position {
        DayPosition::Single => {
            let left = start_hour / HOURS_PER_DAY * 100.0;
            (left, (end_hour - start_hour) / HOURS_PER_DAY * 100.0)
        }
        DayPosition::First => {
            let left = start_hour / HOURS_PER_DAY * 100.0;
            (left, 100.0 - left)
        }
        DayPosition::Last => (0.0, end_hour / HOURS_PER_DAY * 100.0),
        DayPosition::Middle => (0.0, 100.0),
        DayPosition::Outside => (0.0, 0.0),
    };

    let width = width.max(MIN_WIDTH_PERCENT).min(100.0);
    let left = left.clamp(0.0, 100.0 - width);

    SpanPlacement {
        left,
        width,
        position,
        is_multi_day: appointment.is_multi_day(),
        rounding: if appointment.is_multi_day() {
            EndRounding::for_segment(position.is_first_day(), position.is_last_day())
        } else {
            EndRounding::BOTH
        },
        label: segment_label(appointment, position),
    }
}

/// Percent offset and width of an hour slot highlight.
pub fn slot_extent(slot: u32) -> (f64, f64) {
    let left = slot as f64 / HOURS_PER_DAY * 100.0;
    (left, 100.0 / HOURS_PER_DAY)
}
