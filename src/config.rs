use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Folder holding `<subject>-<trial>.csv` / `.json` pairs.
    #[serde(default = "DataConfig::default_folder")]
    pub folder: PathBuf,
}

impl DataConfig {
    fn default_folder() -> PathBuf {
        PathBuf::from("GaitData")
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            folder: Self::default_folder(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "PlotConfig::default_width")]
    pub width: u32,
    #[serde(default = "PlotConfig::default_height")]
    pub height: u32,
    /// Padding added above/below the shared accelerometer y-range (m/s²).
    #[serde(default = "PlotConfig::default_acc_margin")]
    pub acc_margin: f64,
    /// Padding added above/below the shared rotation y-range (deg/s).
    #[serde(default = "PlotConfig::default_rot_margin")]
    pub rot_margin: f64,
    #[serde(default = "PlotConfig::default_out_dir")]
    pub out_dir: PathBuf,
}

impl PlotConfig {
    fn default_width() -> u32 {
        1000
    }
    fn default_height() -> u32 {
        400
    }
    fn default_acc_margin() -> f64 {
        0.1
    }
    fn default_rot_margin() -> f64 {
        20.0
    }
    fn default_out_dir() -> PathBuf {
        PathBuf::from(".")
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            acc_margin: Self::default_acc_margin(),
            rot_margin: Self::default_rot_margin(),
            out_dir: Self::default_out_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "ReportConfig::default_path")]
    pub path: PathBuf,
}

impl ReportConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("trial_info.txt")
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Read the TOML config at `path`, or fall back to defaults. When the
    /// file does not exist, a fully commented default config is written there
    /// so the knobs are discoverable.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("failed to parse config {path}: {err}; using defaults");
                    }
                },
                Err(err) => {
                    warn!("failed to read config {path}: {err}; using defaults");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                let mut commented = String::new();
                for line in text.lines() {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        commented.push('\n');
                    } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                        commented.push_str(line);
                        commented.push('\n');
                    } else {
                        commented.push_str("# ");
                        commented.push_str(line);
                        commented.push('\n');
                    }
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    warn!("failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                warn!("failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}
