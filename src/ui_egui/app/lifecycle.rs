use super::state::AppState;
use super::SchedulerApp;
use crate::models::settings::Settings;
use crate::services::schedule::{Schedule, ScheduleService};
use crate::services::seed::load_schedule;
use crate::services::settings::SettingsService;
use chrono::Local;
use std::path::Path;

impl SchedulerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::new();
        let settings = settings_service.load_or_default();
        log::info!(
            "Loaded settings from {}: default_view={:?}",
            settings_service.path().display(),
            settings.default_view
        );

        if !settings_service.path().exists() {
            if let Err(e) = settings_service.save(&settings) {
                log::warn!("Failed to write default settings: {:#}", e);
            }
        }

        let schedule = load_schedule_or_empty(&settings);
        Self::from_parts(settings, schedule)
    }

    pub(super) fn from_parts(settings: Settings, schedule: Schedule) -> Self {
        let current_date = settings
            .initial_date
            .unwrap_or_else(|| Local::now().date_naive());
        let state = AppState::new(settings.default_view, current_date);
        let schedule = ScheduleService::with_suffix(schedule, settings.on_call_suffix.clone());

        Self {
            settings,
            schedule,
            state,
        }
    }
}

fn load_schedule_or_empty(settings: &Settings) -> Schedule {
    match load_schedule(settings.seed_path.as_deref().map(Path::new)) {
        Ok(schedule) => schedule,
        Err(e) => {
            log::error!("Failed to load schedule data: {:#}", e);
            Schedule::default()
        }
    }
}
