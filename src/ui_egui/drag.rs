//! Pointer routing for drag and drop.
//!
//! Views register the screen rectangles of their drop targets while they
//! paint. At the end of the frame the router hit-tests the pointer against
//! them and drives the [`DragController`]; nothing about the drag itself is
//! kept in egui memory.

use egui::{Context, Pos2, Rect};

use crate::models::facility_group::FacilityGroup;
use crate::services::interaction::{DragController, DropCell, DropOutcome};

#[derive(Default)]
pub struct DragRouter {
    cells: Vec<(DropCell, Rect)>,
    headers: Vec<(String, Rect)>,
}

impl DragRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_cell(&mut self, cell: DropCell, rect: Rect) {
        self.cells.push((cell, rect));
    }

    pub fn register_group_header(&mut self, group_id: &str, rect: Rect) {
        self.headers.push((group_id.to_string(), rect));
    }

    fn cell_at(&self, pos: Pos2) -> Option<&(DropCell, Rect)> {
        self.cells.iter().find(|(_, rect)| rect.contains(pos))
    }

    fn header_at(&self, pos: Pos2) -> Option<&(String, Rect)> {
        self.headers.iter().find(|(_, rect)| rect.contains(pos))
    }

    /// Feed this frame's pointer into `drag` and return a drop outcome on
    /// release. Registered targets are cleared for the next frame.
    pub fn route(
        &mut self,
        ctx: &Context,
        drag: &mut DragController,
        groups: &[FacilityGroup],
    ) -> Option<DropOutcome> {
        let outcome = self.route_pointer(ctx, drag, groups);
        self.cells.clear();
        self.headers.clear();
        outcome
    }

    fn route_pointer(
        &self,
        ctx: &Context,
        drag: &mut DragController,
        groups: &[FacilityGroup],
    ) -> Option<DropOutcome> {
        if drag.is_idle() {
            return None;
        }

        let (pointer, released) =
            ctx.input(|i| (i.pointer.latest_pos(), i.pointer.any_released()));
        ctx.request_repaint();

        if let Some(active) = drag.appointment_drag() {
            let previous = active.hover.as_ref().map(|hover| hover.cell.clone());
            let target = pointer.and_then(|pos| self.cell_at(pos).map(|hit| (pos, hit)));

            if let Some(pos) = pointer {
                drag.update_pointer(pos.x, pos.y);
            }

            match target {
                Some((pos, (cell, rect))) => {
                    let x = pos.x - rect.left();
                    if released {
                        return drag
                            .drop_on_cell(cell.clone(), x, rect.width())
                            .map(DropOutcome::Reschedule);
                    }
                    drag.hover_cell(cell.clone(), x, rect.width());
                }
                None => {
                    if let Some(cell) = previous {
                        drag.leave_cell(&cell);
                    }
                    if released {
                        drag.end_drag();
                    }
                }
            }
            return None;
        }

        if let Some(active) = drag.group_drag() {
            let previous = active.hover.as_ref().map(|hover| hover.group_id.clone());
            let target = pointer.and_then(|pos| self.header_at(pos).map(|hit| (pos, hit)));

            match target {
                Some((pos, (group_id, rect))) => {
                    // record the side under the pointer before dropping
                    drag.hover_group(group_id, pos.y - rect.top(), rect.height());
                    if released {
                        return drag
                            .drop_on_group(groups, group_id)
                            .map(DropOutcome::Reorder);
                    }
                }
                None => {
                    if let Some(group_id) = previous {
                        drag.leave_group(&group_id);
                    }
                    if released {
                        drag.end_drag();
                    }
                }
            }
        }

        None
    }
}
