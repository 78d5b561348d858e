use std::fs;
use std::path::Path;

use crate::channel::{Channel, N_COLUMNS};
use crate::error::GaitError;

/// Samples per second of the recording hardware.
pub const SAMPLE_RATE_HZ: f64 = 100.0;

/// The numeric signal table of one trial: one row per sample, 16 columns in
/// the fixed channel order.
#[derive(Clone, Debug)]
pub struct Signal {
    rows: Vec<[f64; N_COLUMNS]>,
}

impl Signal {
    pub fn load(path: &Path) -> Result<Self, GaitError> {
        let text = fs::read_to_string(path).map_err(|source| GaitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|(line, message)| GaitError::Signal {
            path: path.to_path_buf(),
            line,
            message,
        })
    }

    /// Parse comma-delimited rows, skipping the header line. Errors carry the
    /// 1-based line number of the offending row.
    pub fn parse(text: &str) -> Result<Self, (usize, String)> {
        let mut rows = Vec::new();
        for (idx, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let lineno = idx + 1;
            let mut row = [0.0f64; N_COLUMNS];
            let mut width = 0;
            for (i, field) in line.split(',').enumerate() {
                if i >= N_COLUMNS {
                    return Err((lineno, format!("expected {N_COLUMNS} columns, got more")));
                }
                row[i] = field
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| (lineno, format!("bad value {:?}: {e}", field.trim())))?;
                width = i + 1;
            }
            if width != N_COLUMNS {
                return Err((lineno, format!("expected {N_COLUMNS} columns, got {width}")));
            }
            rows.push(row);
        }
        Ok(Self { rows })
    }

    pub fn from_rows(rows: Vec<[f64; N_COLUMNS]>) -> Self {
        Self { rows }
    }

    pub fn n_samples(&self) -> usize {
        self.rows.len()
    }

    pub fn duration_secs(&self) -> f64 {
        self.rows.len() as f64 / SAMPLE_RATE_HZ
    }

    /// All values of one column, in sample order.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[column])
    }

    /// (time in seconds, value) points of one channel.
    pub fn series(&self, channel: Channel) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(move |(i, row)| (i as f64 / SAMPLE_RATE_HZ, row[channel.column]))
    }
}
