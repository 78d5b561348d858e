use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::code::TrialCode;
use crate::error::GaitError;

/// The set of trial codes available in the data folder, built from the
/// `<code>.csv` file names found there.
#[derive(Debug)]
pub struct TrialCatalog {
    folder: PathBuf,
    codes: BTreeSet<String>,
}

impl TrialCatalog {
    pub fn scan(folder: &Path) -> Result<Self, GaitError> {
        if !folder.is_dir() {
            return Err(GaitError::MissingDataDir(folder.to_path_buf()));
        }
        let mut codes = BTreeSet::new();
        for entry in WalkDir::new(folder)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                codes.insert(stem.to_string());
            }
        }
        debug!(folder = %folder.display(), n = codes.len(), "scanned trial catalog");
        Ok(Self {
            folder: folder.to_path_buf(),
            codes,
        })
    }

    pub fn contains(&self, code: &TrialCode) -> bool {
        self.codes.contains(&code.to_string())
    }

    pub fn require(&self, code: &TrialCode) -> Result<(), GaitError> {
        if self.contains(code) {
            Ok(())
        } else {
            Err(GaitError::TrialNotFound(code.to_string()))
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn metadata_path(&self, code: &TrialCode) -> PathBuf {
        self.folder.join(format!("{code}.json"))
    }

    pub fn signal_path(&self, code: &TrialCode) -> PathBuf {
        self.folder.join(format!("{code}.csv"))
    }
}
