use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// `settings.toml` under the platform config directory, or the working
/// directory when no home directory can be resolved.
pub fn default_settings_path() -> PathBuf {
    match ProjectDirs::from("com", "FacilityScheduler", "FacilityScheduler") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILE_NAME),
        None => PathBuf::from(SETTINGS_FILE_NAME),
    }
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new() -> Self {
        Self::with_path(default_settings_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings = Settings::from_toml(&data)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is unreadable.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create dir {}", parent.display()))?;
            }
        }

        let data = settings.to_toml().context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ui::ViewType;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> SettingsService {
        SettingsService::with_path(dir.path().join("nested").join(SETTINGS_FILE_NAME))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = service_in(&dir).load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let mut settings = Settings::default();
        settings.default_view = ViewType::Month;
        settings.initial_date = NaiveDate::from_ymd_opt(2025, 7, 1);
        settings.week_layout.lane_height = 72.0;
        service.save(&settings).unwrap();

        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn test_invalid_geometry_is_rejected_on_save() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let mut settings = Settings::default();
        settings.day_layout.block_height = 0.0;
        assert!(service.save(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "default_view = [not toml").unwrap();

        assert!(service.load().is_err());
        assert_eq!(service.load_or_default(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "default_view = \"Day\"\n").unwrap();

        let settings = service.load().unwrap();
        assert_eq!(settings.default_view, ViewType::Day);
        assert_eq!(settings.week_layout, Settings::default().week_layout);
    }
}
