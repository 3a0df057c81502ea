//! Greedy first-fit lane packing.
//!
//! Intervals are visited in start order and dropped into the lowest lane that
//! has no overlapping member. This does not always reach the minimum lane count
//! an optimal interval-graph colouring would, but it is O(n * lanes) and stable,
//! which is what a per-cell render needs.

use std::collections::HashMap;

use crate::models::appointment::Interval;

/// Result of packing one scope (one facility on one day).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneAssignment {
    /// Lane of each input interval, indexed like the input slice.
    pub lane_of: Vec<usize>,
    /// Input positions placed in each lane, in placement order.
    pub lanes: Vec<Vec<usize>>,
    by_id: HashMap<String, usize>,
}

impl LaneAssignment {
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Lane for an appointment id. Ids are assumed unique within a scope.
    pub fn lane_for(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }
}

/// Assign every interval a lane so that no two members of a lane overlap.
///
/// Ties on start time keep input order. Malformed intervals are normalized
/// before the overlap test so they still occupy a slot.
pub fn pack_lanes(intervals: &[Interval]) -> LaneAssignment {
    let normalized: Vec<Interval> = intervals.iter().map(Interval::normalized).collect();

    let mut order: Vec<usize> = (0..normalized.len()).collect();
    // sort_by_key is stable, so equal starts keep input order
    order.sort_by_key(|&index| normalized[index].start);

    let mut lanes: Vec<Vec<usize>> = Vec::new();
    let mut lane_of = vec![0; normalized.len()];

    for index in order {
        let candidate = &normalized[index];
        let free_lane = lanes.iter().position(|members| {
            members
                .iter()
                .all(|&placed| !candidate.overlaps(&normalized[placed]))
        });

        let lane = match free_lane {
            Some(lane) => {
                lanes[lane].push(index);
                lane
            }
            None => {
                lanes.push(vec![index]);
                lanes.len() - 1
            }
        };
        lane_of[index] = lane;
    }

    let by_id = normalized
        .iter()
        .zip(lane_of.iter())
        .map(|(interval, lane)| (interval.id.clone(), *lane))
        .collect();

    LaneAssignment {
        lane_of,
        lanes,
        by_id,
    }
}
