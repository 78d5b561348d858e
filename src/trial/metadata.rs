use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::channel::Side;
use crate::error::GaitError;

/// One detected gait cycle: (start, end) sample indices into the signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(u32, u32)")]
pub struct FootstepInterval {
    pub start: u32,
    pub end: u32,
}

impl From<(u32, u32)> for FootstepInterval {
    fn from((start, end): (u32, u32)) -> Self {
        Self { start, end }
    }
}

/// Subject and trial description stored next to the signal as
/// `<code>.json`. Field names mirror the on-disk record.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrialMetadata {
    pub subject: u32,
    pub trial: u32,
    pub age: u32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub pathology_group: String,
    pub walking_speed: f64,
    pub laterality: String,
    pub left_foot_activity: Vec<FootstepInterval>,
    pub right_foot_activity: Vec<FootstepInterval>,
}

impl TrialMetadata {
    pub fn load(path: &Path) -> Result<Self, GaitError> {
        let text = fs::read_to_string(path).map_err(|source| GaitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| GaitError::Metadata {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Footstep intervals of the given foot.
    pub fn foot_activity(&self, side: Side) -> &[FootstepInterval] {
        match side {
            Side::Left => &self.left_foot_activity,
            Side::Right => &self.right_foot_activity,
        }
    }
}
