use super::SchedulerApp;
use crate::models::ui::ViewType;
use crate::utils::date::{format_long_date, step_date, week_dates, NavigationDirection};
use chrono::{Local, NaiveDate};

impl SchedulerApp {
    pub(super) fn navigate(&mut self, direction: NavigationDirection) {
        self.state.current_date =
            step_date(self.state.current_date, self.state.current_view, direction);
        // targets from the old range are gone
        self.state.drag.end_drag();
    }

    pub(super) fn jump_to_today(&mut self) {
        self.state.current_date = Local::now().date_naive();
        self.state.drag.end_drag();
    }

    pub(super) fn set_view(&mut self, view: ViewType) {
        if self.state.current_view != view {
            log::debug!("Switching to {} view", view.label());
            self.state.drag.end_drag();
            self.state.current_view = view;
        }
    }

    pub(super) fn period_label(&self) -> String {
        period_label(self.state.current_view, self.state.current_date)
    }
}

/// Toolbar title for the displayed range.
fn period_label(view: ViewType, date: NaiveDate) -> String {
    match view {
        ViewType::Day => format_long_date(date),
        ViewType::Week => {
            let days = week_dates(date);
            format!(
                "{} - {}",
                days[0].format("%b %-d"),
                days[6].format("%b %-d, %Y")
            )
        }
        ViewType::Month => date.format("%B %Y").to_string(),
    }
}
