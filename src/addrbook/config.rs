use crate::book::DEFAULT_HORIZON_DAYS;
use crate::error::{AddrBookError, Result};
use crate::schedule::LeapDayPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for addrbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// How many days ahead `birthdays` looks when no `--days` is given
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    /// Where 29 February birthdays land in non-leap years
    #[serde(default)]
    pub leap_day: LeapDayPolicy,
}

fn default_upcoming_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_HORIZON_DAYS,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Look up a single setting by its config-file key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "upcoming_days" => Ok(self.upcoming_days.to_string()),
            "leap_day" => Ok(leap_day_label(self.leap_day).to_string()),
            other => Err(AddrBookError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Update a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "upcoming_days" => {
                self.upcoming_days = value.parse().map_err(|_| {
                    AddrBookError::Config(format!(
                        "upcoming_days must be a non-negative number, got '{}'",
                        value
                    ))
                })?;
            }
            "leap_day" => {
                self.leap_day = match value.to_lowercase().as_str() {
                    "feb28" => LeapDayPolicy::Feb28,
                    "mar1" => LeapDayPolicy::Mar1,
                    _ => {
                        return Err(AddrBookError::Config(format!(
                            "leap_day must be 'feb28' or 'mar1', got '{}'",
                            value
                        )))
                    }
                };
            }
            other => {
                return Err(AddrBookError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("upcoming_days", self.upcoming_days.to_string()),
            ("leap_day", leap_day_label(self.leap_day).to_string()),
        ]
    }
}

fn leap_day_label(policy: LeapDayPolicy) -> &'static str {
    match policy {
        LeapDayPolicy::Feb28 => "feb28",
        LeapDayPolicy::Mar1 => "mar1",
    }
}
