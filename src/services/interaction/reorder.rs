use super::{DragController, GroupDrag, GroupHover, InsertionSide, InteractionState};
use crate::models::facility_group::FacilityGroup;

/// Upper half of a header inserts above it, lower half below.
pub fn insertion_side(pointer_y: f32, header_height: f32) -> InsertionSide {
    if pointer_y < header_height / 2.0 {
        InsertionSide::Above
    } else {
        InsertionSide::Below
    }
}

/// Move `dragged_id` next to `target_id`.
///
/// The dragged group is removed first and the target's index is looked up in
/// the shortened list, so `Above` lands it directly before the target and
/// `Below` directly after. Returns `None` when either id is unknown or the
/// group is dropped on itself.
pub fn reorder_groups(
    groups: &[FacilityGroup],
    dragged_id: &str,
    target_id: &str,
    side: InsertionSide,
) -> Option<Vec<FacilityGroup>> {
    if dragged_id == target_id {
        return None;
    }

    let dragged_index = groups.iter().position(|g| g.id == dragged_id)?;
    let mut reordered = groups.to_vec();
    let dragged = reordered.remove(dragged_index);

    let target_index = reordered.iter().position(|g| g.id == target_id)?;
    let insert_at = match side {
        InsertionSide::Above => target_index,
        InsertionSide::Below => target_index + 1,
    };
    reordered.insert(insert_at, dragged);
    Some(reordered)
}

impl DragController {
    /// Start dragging a group header. Refused while an appointment is moving.
    pub fn begin_group_drag(&mut self, group_id: &str) -> bool {
        if let InteractionState::Appointment(drag) = &self.state {
            log::debug!(
                "Ignoring drag of group '{}' while appointment '{}' is moving",
                group_id,
                drag.appointment_id
            );
            return false;
        }

        log::debug!("Begin drag of group '{}'", group_id);
        self.state = InteractionState::Group(GroupDrag {
            group_id: group_id.to_string(),
            hover: None,
        });
        true
    }

    /// Pointer over a group header. Hovering the dragged group itself shows
    /// no drop target.
    pub fn hover_group(&mut self, group_id: &str, pointer_y: f32, header_height: f32) {
        let InteractionState::Group(drag) = &mut self.state else {
            return;
        };

        drag.hover = if drag.group_id == group_id {
            None
        } else {
            Some(GroupHover {
                group_id: group_id.to_string(),
                side: insertion_side(pointer_y, header_height),
            })
        };
    }

    pub fn leave_group(&mut self, group_id: &str) {
        if let InteractionState::Group(drag) = &mut self.state {
            if drag.hover.as_ref().is_some_and(|h| h.group_id == group_id) {
                drag.hover = None;
            }
        }
    }

    /// Side currently shown for `group_id`, if it is the drop target.
    pub fn group_insertion(&self, group_id: &str) -> Option<InsertionSide> {
        self.group_drag()
            .and_then(|drag| drag.hover.as_ref())
            .filter(|hover| hover.group_id == group_id)
            .map(|hover| hover.side)
    }

    /// Release over `target_id`. Always returns to idle when a group drag was
    /// active; returns the new order unless the drop was onto the dragged group.
    ///
    /// Without a recorded hover side for the target the group goes below it.
    pub fn drop_on_group(
        &mut self,
        groups: &[FacilityGroup],
        target_id: &str,
    ) -> Option<Vec<FacilityGroup>> {
        if self.group_drag().is_none() {
            return None;
        }
        let InteractionState::Group(drag) = std::mem::take(&mut self.state) else {
            return None;
        };

        let side = drag
            .hover
            .as_ref()
            .filter(|hover| hover.group_id == target_id)
            .map(|hover| hover.side)
            .unwrap_or(InsertionSide::Below);

        let result = reorder_groups(groups, &drag.group_id, target_id, side);
        match &result {
            Some(_) => log::debug!(
                "Moved group '{}' {:?} '{}'",
                drag.group_id,
                side,
                target_id
            ),
            None => log::debug!("Group '{}' dropped without a move", drag.group_id),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::Appointment;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn groups() -> Vec<FacilityGroup> {
        ["A", "B", "C"]
            .iter()
            .map(|id| FacilityGroup::new(*id, *id, vec![format!("{} Hospital", id)]))
            .collect()
    }

    fn ids(groups: &[FacilityGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.id.as_str()).collect()
    }

    #[test_case(5.0, 40.0 => InsertionSide::Above; "top quarter")]
    #[test_case(19.9, 40.0 => InsertionSide::Above; "just above middle")]
    #[test_case(20.0, 40.0 => InsertionSide::Below; "exact middle")]
    #[test_case(39.0, 40.0 => InsertionSide::Below; "bottom")]
    fn test_insertion_side(y: f32, height: f32) -> InsertionSide {
        insertion_side(y, height)
    }

    #[test_case("C", "A", InsertionSide::Above => vec!["C", "A", "B"]; "last above first")]
    #[test_case("C", "A", InsertionSide::Below => vec!["A", "C", "B"]; "last below first")]
    #[test_case("A", "C", InsertionSide::Below => vec!["B", "C", "A"]; "first below last")]
    #[test_case("A", "C", InsertionSide::Above => vec!["B", "A", "C"]; "first above last")]
    #[test_case("A", "B", InsertionSide::Above => vec!["A", "B", "C"]; "already above neighbour")]
    fn test_reorder_groups(dragged: &str, target: &str, side: InsertionSide) -> Vec<String> {
        let result = reorder_groups(&groups(), dragged, target, side).unwrap();
        ids(&result).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_reorder_unknown_or_self_is_none() {
        assert!(reorder_groups(&groups(), "A", "A", InsertionSide::Above).is_none());
        assert!(reorder_groups(&groups(), "X", "A", InsertionSide::Above).is_none());
        assert!(reorder_groups(&groups(), "A", "X", InsertionSide::Below).is_none());
    }

    #[test]
    fn test_drag_flow_moves_group_above_target() {
        let mut controller = DragController::new();
        assert!(controller.begin_group_drag("C"));
        controller.hover_group("A", 4.0, 40.0);
        assert_eq!(controller.group_insertion("A"), Some(InsertionSide::Above));

        let result = controller.drop_on_group(&groups(), "A").unwrap();
        pretty_assertions::assert_eq!(ids(&result), vec!["C", "A", "B"]);
        assert!(controller.is_idle());
    }

    #[test]
    fn test_drop_on_self_clears_state() {
        let mut controller = DragController::new();
        controller.begin_group_drag("B");
        controller.hover_group("B", 30.0, 40.0);
        assert_eq!(controller.group_insertion("B"), None);

        assert!(controller.drop_on_group(&groups(), "B").is_none());
        assert!(controller.is_idle());
    }

    #[test]
    fn test_drop_without_hover_defaults_below() {
        let mut controller = DragController::new();
        controller.begin_group_drag("A");
        let result = controller.drop_on_group(&groups(), "B").unwrap();
        pretty_assertions::assert_eq!(ids(&result), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_leave_group_only_clears_matching_target() {
        let mut controller = DragController::new();
        controller.begin_group_drag("A");
        controller.hover_group("C", 35.0, 40.0);

        controller.leave_group("B");
        assert_eq!(controller.group_insertion("C"), Some(InsertionSide::Below));

        controller.leave_group("C");
        assert_eq!(controller.group_insertion("C"), None);
    }

    #[test]
    fn test_group_and_appointment_drags_are_exclusive() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 24)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let appointment = Appointment::builder()
            .id("1")
            .title("Doctor")
            .facility("A Hospital")
            .start(start)
            .end(start + chrono::Duration::hours(1))
            .build()
            .unwrap();

        let mut controller = DragController::new();
        assert!(controller.begin_group_drag("A"));
        assert!(!controller.appointment_targets_enabled());
        assert!(!controller.begin_appointment_drag(&appointment));
        assert!(controller
            .drop_on_cell(
                super::super::DropCell::new("B Hospital", start.date()),
                10.0,
                100.0
            )
            .is_none());
        assert!(controller.group_drag().is_some());

        controller.end_drag();
        assert!(controller.begin_appointment_drag(&appointment));
        assert!(!controller.begin_group_drag("A"));
        assert!(controller.drop_on_group(&groups(), "B").is_none());
        assert!(controller.appointment_drag().is_some());
    }
}
