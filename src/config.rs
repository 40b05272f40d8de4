//! Configuration handling for the generator
//!
//! Only UI preferences live here. Applicant data is never written to disk.

use crate::email::DeadlineOffset;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User preferences for the request form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Preselected relative deadline in days (7, 14 or 21)
    pub default_deadline_days: Option<u32>,
    /// Tick "Include follow-up email templates" on a fresh form
    pub follow_ups_enabled_by_default: Option<bool>,
}

/// Starting values for a new request form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormDefaults {
    pub deadline: DeadlineOffset,
    pub follow_ups_enabled: bool,
}

impl GeneratorConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ie", "tus", "docreq-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: GeneratorConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Remember the given form defaults, keeping the rest of the file
    pub fn remember(&mut self, defaults: FormDefaults) {
        self.default_deadline_days = Some(defaults.deadline.days() as u32);
        self.follow_ups_enabled_by_default = Some(defaults.follow_ups_enabled);
    }

    /// Resolve preferences into form defaults, ignoring unsupported offsets
    pub fn form_defaults(&self) -> FormDefaults {
        let deadline = match self.default_deadline_days {
            Some(days) => DeadlineOffset::from_days(days).unwrap_or_else(|| {
                tracing::warn!("Unsupported default_deadline_days {days}, using 14");
                DeadlineOffset::default()
            }),
            None => DeadlineOffset::default(),
        };

        FormDefaults {
            deadline,
            follow_ups_enabled: self.follow_ups_enabled_by_default.unwrap_or(false),
        }
    }
}
