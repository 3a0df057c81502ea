use chrono::NaiveDate;

use crate::models::ui::ViewType;
use crate::services::interaction::DragController;
use crate::ui_egui::drag::DragRouter;

pub struct AppState {
    pub current_view: ViewType,
    pub current_date: NaiveDate,
    /// The single active drag session, if any
    pub drag: DragController,
    /// Drop targets registered while painting the current frame
    pub router: DragRouter,
}

impl AppState {
    pub fn new(current_view: ViewType, current_date: NaiveDate) -> Self {
        Self {
            current_view,
            current_date,
            drag: DragController::new(),
            router: DragRouter::new(),
        }
    }
}
