// Integration tests for the drag-and-drop flow and composed views
mod fixtures;

use facility_scheduler::models::settings::LaneGeometry;
use facility_scheduler::services::composer::{compose_day, compose_month, compose_week};
use facility_scheduler::services::interaction::{
    forward_outcome, DragController, DropCell, DropOutcome, InsertionSide,
};
use facility_scheduler::services::layout::{classify_day, clip_to_day, DayPosition};
use facility_scheduler::services::schedule::ScheduleService;
use fixtures::{appointments, dates, groups, sample_schedule};
use pretty_assertions::assert_eq;

#[test]
fn test_overnight_appointment_splits_across_two_days() {
    let apt = appointments::overnight_on_call();

    assert_eq!(classify_day(&apt, dates::june(23)), DayPosition::Outside);
    assert_eq!(classify_day(&apt, dates::june(24)), DayPosition::First);
    assert_eq!(classify_day(&apt, dates::june(25)), DayPosition::Last);

    let tuesday = clip_to_day(&apt, dates::june(24));
    assert!((tuesday.left - 58.333).abs() < 0.01);
    assert!((tuesday.width - 41.667).abs() < 0.01);
    assert!(tuesday.rounding.left);
    assert!(!tuesday.rounding.right);
    assert_eq!(tuesday.label.text().as_deref(), Some("14:00 →"));

    let wednesday = clip_to_day(&apt, dates::june(25));
    assert_eq!(wednesday.left, 0.0);
    assert!((wednesday.width - 41.667).abs() < 0.01);
    assert!(!wednesday.rounding.left);
    assert!(wednesday.rounding.right);
    assert_eq!(wednesday.label.text().as_deref(), Some("→ 10:00"));
}

#[test]
fn test_reschedule_flow_updates_snapshot() {
    let mut service = ScheduleService::new(sample_schedule());
    let snapshot = service.snapshot();
    let apt = snapshot.find("5").unwrap().clone();

    let mut drag = DragController::new();
    assert!(drag.begin_appointment_drag(&apt));

    let cell = DropCell::new("paras hospital", dates::june(24));
    // 200 / 300 of the cell is two thirds of the day
    assert_eq!(drag.hover_cell(cell.clone(), 200.0, 300.0), Some(16));

    let command = drag.drop_on_cell(cell, 200.0, 300.0).unwrap();
    assert!(drag.is_idle());
    forward_outcome(DropOutcome::Reschedule(command), &mut service);

    let after = service.snapshot();
    let moved = after.find("5").unwrap();
    assert_eq!(moved.start, dates::june_at(24, 16, 0));
    assert_eq!(moved.end, dates::june_at(24, 20, 0));
    assert_eq!(moved.facility, "paras hospital");
    assert_eq!(moved.duration(), apt.duration());

    // the previous snapshot is untouched
    assert_eq!(snapshot.find("5").unwrap().facility, "Kappu Hospital - OnCall");
}

#[test]
fn test_group_reorder_flow_moves_group_to_top() {
    let mut service = ScheduleService::new(sample_schedule());
    let active = service.active_groups();
    assert_eq!(
        groups::ids(&active),
        vec!["paras-group", "kappu-group", "other-group"]
    );

    let mut drag = DragController::new();
    assert!(drag.begin_group_drag("other-group"));
    drag.hover_group("paras-group", 5.0, 40.0);
    assert_eq!(drag.group_insertion("paras-group"), Some(InsertionSide::Above));

    let reordered = drag.drop_on_group(&active, "paras-group").unwrap();
    forward_outcome(DropOutcome::Reorder(reordered), &mut service);

    assert_eq!(
        groups::ids(&service.active_groups()),
        vec!["other-group", "paras-group", "kappu-group"]
    );
    let rows = service.facility_rows();
    assert_eq!(
        &rows[..3],
        &[
            "jeswin-test - OnCall",
            "Delhi AIIMS - OnCall",
            "sneh hospital - OnCall"
        ]
    );
}

#[test]
fn test_group_drag_blocks_appointment_drops() {
    let schedule = sample_schedule();
    let mut drag = DragController::new();
    assert!(drag.begin_group_drag("kappu-group"));

    assert!(!drag.begin_appointment_drag(schedule.find("1").unwrap()));
    let cell = DropCell::new("paras hospital", dates::june(24));
    assert_eq!(drag.drop_on_cell(cell, 10.0, 100.0), None);
    assert!(drag.group_drag().is_some());
}

#[test]
fn test_week_of_sample_data() {
    let schedule = sample_schedule();
    let groups = schedule.active_groups(" - OnCall");
    let grid = compose_week(
        &schedule.appointments,
        &groups,
        dates::june(25),
        &LaneGeometry::week(),
        &DragController::new(),
    );

    assert_eq!(grid.days[0], dates::demo_monday());
    assert_eq!(grid.day_labels[0], "Mon, 06/23/2025");
    assert_eq!(grid.sections.len(), 3);
    assert!(grid.preview.is_none());

    let paras = &grid.sections[0];
    assert_eq!(paras.header, "Paras Hospital Group");
    assert_eq!(paras.rows.len(), 2);

    // X-Ray Tech (from 11:00) and Emergency Call (13:30) overlap on Wednesday
    let wednesday = &paras.rows[0].cells[2];
    assert_eq!(wednesday.date, dates::june(25));
    assert_eq!(wednesday.lane_count, 2);
    assert_eq!(wednesday.height, 180.0);
    let lanes: Vec<(&str, usize)> = wednesday
        .blocks
        .iter()
        .map(|b| (b.appointment_id.as_str(), b.lane))
        .collect();
    assert_eq!(lanes, vec![("1", 0), ("6", 1)]);

    // Friday holds only the last segment of the X-Ray Tech span
    let friday = &paras.rows[0].cells[4];
    assert_eq!(friday.blocks.len(), 1);
    assert_eq!(friday.blocks[0].time_label().as_deref(), Some("→ 17:00"));
}

#[test]
fn test_day_view_rows_follow_facility_list() {
    let schedule = sample_schedule();
    let grid = compose_day(
        &schedule.appointments,
        &schedule.facilities,
        dates::june(24),
        &LaneGeometry::day(),
        &DragController::new(),
    );

    assert_eq!(grid.title, "Tuesday, June 24, 2025");
    assert_eq!(grid.rows.len(), 7);

    let on_call = grid
        .rows
        .iter()
        .find(|row| row.facility == "paras hospital - OnCall")
        .unwrap();
    assert_eq!(on_call.blocks.len(), 1);
    assert_eq!(on_call.blocks[0].time_label().as_deref(), Some("14:00 →"));
}

#[test]
fn test_month_of_sample_data() {
    let schedule = sample_schedule();
    let grid = compose_month(&schedule.appointments, dates::june(1), dates::june(25));

    assert_eq!(grid.cells.len(), 42);
    let wednesday = grid
        .cells
        .iter()
        .find(|cell| cell.date == dates::june(25))
        .unwrap();
    assert!(wednesday.is_today);
    assert!(wednesday.is_current_month);
    // X-Ray Tech, Atish and Emergency Call all touch the 25th
    assert_eq!(wednesday.appointment_count, 3);
}
