use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeFormat {
    #[default]
    HoursMinutes,  // "1h 30m"
    Decimal,       // "1.5h"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClockFormat {
    #[default]
    Hour24,      // "14:30"
    Hour12,      // "2:30pm"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaletteName {
    #[default]
    Lavender,
    Sage,
    Blush,
    Charcoal,
}

impl PaletteName {
    pub const ALL: [PaletteName; 4] = [
        PaletteName::Lavender,
        PaletteName::Sage,
        PaletteName::Blush,
        PaletteName::Charcoal,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub palette: PaletteName,
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
    #[serde(default)]
    pub clock_format: ClockFormat,
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default = "default_true")]
    pub sidebar_open: bool,
    #[serde(default = "default_event_minutes")]
    pub default_event_minutes: u32,
}

fn default_font_scale() -> f32 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_event_minutes() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: PaletteName::Lavender,
            font_scale: 1.0,
            clock_format: ClockFormat::Hour24,
            time_format: TimeFormat::HoursMinutes,
            sidebar_open: true,
            default_event_minutes: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .context("Failed to read config file")?;
        let mut config: Config = serde_json::from_str(&contents)
            .context("Failed to parse config file")?;
        config.font_scale = config.font_scale.clamp(0.75, 2.5);
        config.default_event_minutes = config.default_event_minutes.max(15);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    pub fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "hako", "hako")
            .context("Could not determine config directory")
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.json"))
    }
}
