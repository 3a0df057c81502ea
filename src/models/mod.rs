// Module exports for models

pub mod appointment;
pub mod facility_group;
pub mod settings;
pub mod ui;
