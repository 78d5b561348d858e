use std::fs;
use std::path::Path;

use crate::error::GaitError;
use crate::trial::metadata::TrialMetadata;
use crate::trial::signal::{Signal, SAMPLE_RATE_HZ};

/// Integral floats keep one decimal ("64.0", not "64"), matching how the
/// metadata record's numeric fields are written elsewhere.
fn float_field(x: f64) -> String {
    if x.fract() == 0.0 && x.is_finite() {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}

/// Render the two-column trial summary. Pure: same inputs, same bytes.
pub fn format_report(metadata: &TrialMetadata, signal: &Signal) -> String {
    let subject = format!("Subject: {}", metadata.subject);
    let trial = format!("Trial: {}", metadata.trial);
    let age = format!("Age (year): {}", metadata.age);
    let height = format!("Height (m): {}", float_field(metadata.height));
    let weight = format!("Weight (kg): {}", float_field(metadata.weight));
    let pathology = format!("Pathology group: {}", metadata.pathology_group);
    let speed = format!(
        "Walking speed (km/h): {}",
        float_field(metadata.walking_speed)
    );
    let laterality = format!("Laterality : {}", metadata.laterality);
    let duration = format!(
        "Duration (s): {:.1}",
        signal.n_samples() as f64 / SAMPLE_RATE_HZ
    );
    let left = format!("    - Left foot: {}", metadata.left_foot_activity.len());
    let right = format!("    - Right foot: {}", metadata.right_foot_activity.len());

    format!(
        "\n    {subject:^30}|{trial:^30}\n    \
         ------------------------------+------------------------------\n    \
         {age:<30}| {speed:<30}\n    \
         {height:<30}| {duration:<30}\n    \
         {weight:<30}| Number of footsteps:\n    \
         {pathology:<30}| {left:<30}\n    \
         {laterality:<30}| {right:<30}\n    \n"
    )
}

/// Write the report to `path`, overwriting any previous run's output.
pub fn write_report(
    path: &Path,
    metadata: &TrialMetadata,
    signal: &Signal,
) -> Result<(), GaitError> {
    fs::write(path, format_report(metadata, signal)).map_err(|source| GaitError::Io {
        path: path.to_path_buf(),
        source,
    })
}
