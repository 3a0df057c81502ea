// Property-based tests for lane packing, day clipping and rescheduling
// Random intervals within one week exercise the layout invariants

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use facility_scheduler::models::appointment::{Appointment, Interval};
use facility_scheduler::services::interaction::{rescheduled_interval, slot_from_pointer};
use facility_scheduler::services::layout::{clip_to_day, pack_lanes, DayPosition};

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 23)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// (start offset, length) in minutes within a week; length may be zero or negative.
fn interval_spec() -> impl Strategy<Value = (i64, i64)> {
    (0i64..7 * 24 * 60, -120i64..3 * 24 * 60)
}

fn to_intervals(specs: &[(i64, i64)]) -> Vec<Interval> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(offset, length))| {
            let start = base() + Duration::minutes(offset);
            Interval::new(i.to_string(), start, start + Duration::minutes(length))
        })
        .collect()
}

fn to_appointment(offset: i64, length: i64) -> Appointment {
    let start = base() + Duration::minutes(offset);
    Appointment::builder()
        .id("p")
        .title("Property")
        .facility("paras hospital")
        .start(start)
        .end(start + Duration::minutes(length))
        .build_unchecked()
}

proptest! {
    /// Property: no two intervals in the same lane overlap
    #[test]
    fn prop_lanes_never_overlap(specs in prop::collection::vec(interval_spec(), 0..40)) {
        let intervals = to_intervals(&specs);
        let assignment = pack_lanes(&intervals);

        prop_assert_eq!(assignment.lane_of.len(), intervals.len());
        for members in &assignment.lanes {
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    let left = intervals[a].normalized();
                    let right = intervals[b].normalized();
                    prop_assert!(!left.overlaps(&right), "lane members {} and {} overlap", a, b);
                }
            }
        }
    }

    /// Property: packing is deterministic and every lane is non-empty
    #[test]
    fn prop_packing_is_deterministic(specs in prop::collection::vec(interval_spec(), 0..30)) {
        let intervals = to_intervals(&specs);
        let first = pack_lanes(&intervals);
        let second = pack_lanes(&intervals);

        prop_assert_eq!(&first.lane_of, &second.lane_of);
        prop_assert!(first.lanes.iter().all(|members| !members.is_empty()));
        prop_assert!(first.lane_count() <= intervals.len());
    }

    /// Property: identical starts keep input order in the lane numbering
    #[test]
    fn prop_ties_keep_input_order(count in 1usize..10, length in 30i64..600) {
        let specs: Vec<(i64, i64)> = (0..count).map(|_| (9 * 60, length)).collect();
        let assignment = pack_lanes(&to_intervals(&specs));
        let expected: Vec<usize> = (0..count).collect();
        prop_assert_eq!(assignment.lane_of, expected);
    }

    /// Property: a clipped segment always stays inside the day axis
    #[test]
    fn prop_clip_stays_in_bounds(
        (offset, length) in interval_spec(),
        day_offset in 0i64..7,
    ) {
        let apt = to_appointment(offset, length);
        let date = base().date() + Duration::days(day_offset);
        let placement = clip_to_day(&apt, date);

        prop_assert!(placement.left >= 0.0);
        prop_assert!(placement.left <= 100.0);
        prop_assert!(placement.width >= 2.0 - 1e-9);
        prop_assert!(placement.left + placement.width <= 100.0 + 1e-6);
    }

    /// Property: middle days of a span are painted full width
    #[test]
    fn prop_middle_days_fill_the_cell(offset in 0i64..24 * 60, extra_days in 2i64..5) {
        let apt = to_appointment(offset, extra_days * 24 * 60);
        let middle = base().date() + Duration::days(1);
        let placement = clip_to_day(&apt, middle);

        prop_assert_eq!(placement.position, DayPosition::Middle);
        prop_assert_eq!(placement.left, 0.0);
        prop_assert_eq!(placement.width, 100.0);
    }

    /// Property: any pointer position maps to a slot in [0, 23]
    #[test]
    fn prop_slot_in_range(x in -1000.0f32..5000.0, width in 0.0f32..2000.0) {
        prop_assert!(slot_from_pointer(x, width) <= 23);
    }

    /// Property: rescheduling preserves duration and starts on the hour
    #[test]
    fn prop_reschedule_preserves_duration(
        (offset, length) in (0i64..7 * 24 * 60, 1i64..5 * 24 * 60),
        day_offset in 0i64..30,
        slot in 0u32..24,
    ) {
        let start = base() + Duration::minutes(offset);
        let end = start + Duration::minutes(length);
        let day = base().date() + Duration::days(day_offset);

        let (new_start, new_end) = rescheduled_interval(start, end, day, slot);
        prop_assert_eq!(new_end - new_start, end - start);
        prop_assert_eq!(new_start, day.and_hms_opt(slot, 0, 0).unwrap());
    }
}
