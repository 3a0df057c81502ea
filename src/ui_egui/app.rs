mod lifecycle;
mod navigation;
mod state;
mod toolbar;

use chrono::Local;

use self::state::AppState;
use crate::models::settings::Settings;
use crate::models::ui::ViewType;
use crate::services::composer::{compose_day, compose_month, compose_week};
use crate::services::interaction::forward_outcome;
use crate::services::schedule::ScheduleService;
use crate::ui_egui::views::day_view::DayView;
use crate::ui_egui::views::month_view::MonthView;
use crate::ui_egui::views::week_view::WeekView;
use crate::ui_egui::views::ViewAction;

pub struct SchedulerApp {
    settings: Settings,
    /// Current appointment/group snapshot and the sink for drops
    schedule: ScheduleService,
    /// Navigation and drag state
    state: AppState,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl SchedulerApp {
    fn handle_update(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.drag.end_drag();
        }

        egui::TopBottomPanel::top("scheduler_toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        let snapshot = self.schedule.snapshot();
        let groups = self.schedule.active_groups();
        let today = Local::now().date_naive();
        let date = self.state.current_date;
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| match self.state.current_view {
            ViewType::Day => {
                let geometry = &self.settings.day_layout;
                let grid = compose_day(
                    &snapshot.appointments,
                    &snapshot.facilities,
                    date,
                    geometry,
                    &self.state.drag,
                );
                DayView::show(
                    ui,
                    &grid,
                    &snapshot.appointments,
                    geometry,
                    &mut self.state.drag,
                    &mut self.state.router,
                );
            }
            ViewType::Week => {
                let geometry = &self.settings.week_layout;
                let grid = compose_week(
                    &snapshot.appointments,
                    &groups,
                    date,
                    geometry,
                    &self.state.drag,
                );
                WeekView::show(
                    ui,
                    &grid,
                    &snapshot.appointments,
                    geometry,
                    today,
                    &mut self.state.drag,
                    &mut self.state.router,
                );
            }
            ViewType::Month => {
                let grid = compose_month(&snapshot.appointments, date, today);
                action = MonthView::show(ui, &grid);
            }
        });

        if let Some(outcome) = self
            .state
            .router
            .route(ctx, &mut self.state.drag, &groups)
        {
            forward_outcome(outcome, &mut self.schedule);
        }

        if let Some(ViewAction::OpenDay(day)) = action {
            self.state.current_date = day;
            self.set_view(ViewType::Day);
        }
    }
}
