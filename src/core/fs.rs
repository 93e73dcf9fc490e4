use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::types::{AppError, AppResult, ApproachName, Campaign, TrialId, build_campaign};

/// Raw hit counts for one trial, before presence normalization.
pub type RawCoverage = BTreeMap<String, u64>;

/// Parse one afl-showmap style file: one `<edge_id>:<count>` per line.
///
/// Blank lines are skipped. A line without exactly one `:` separator or
/// with a count that does not parse as a non-negative integer fails the
/// whole read; partial coverage maps are worse than no coverage map.
pub fn read_showmap_file(path: &Path) -> AppResult<RawCoverage> {
    let text = fs::read_to_string(path)?;
    let mut edges = RawCoverage::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut split = line.splitn(2, ':');
        let (id, count) = match (split.next(), split.next()) {
            (Some(id), Some(count)) if !id.is_empty() => (id, count),
            _ => {
                return Err(AppError::MalformedRecord {
                    path: path.to_path_buf(),
                    line: i + 1,
                    reason: format!("expected <edge_id>:<count>, got {line:?}"),
                });
            }
        };
        let count: u64 = count.parse().map_err(|_| AppError::MalformedRecord {
            path: path.to_path_buf(),
            line: i + 1,
            reason: format!("count {count:?} is not a non-negative integer"),
        })?;
        edges.insert(id.to_string(), count);
    }
    Ok(edges)
}

/// Read one approach directory: every file is a trial, keyed by file stem.
pub fn read_approach_dir(path: &Path) -> AppResult<BTreeMap<TrialId, RawCoverage>> {
    let mut trials = BTreeMap::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file = entry.path();
        if !file.is_file() {
            // Approach directories are flat; anything else is a layout error.
            return Err(AppError::UnexpectedEntry(file));
        }
        let trial_id = file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| entry.file_name().to_string_lossy().to_string());
        trials.insert(trial_id, read_showmap_file(&file)?);
    }
    Ok(trials)
}

/// Read a campaign directory: one subdirectory per approach.
pub fn read_campaign_dir(path: &Path) -> AppResult<Campaign<String>> {
    if !path.is_dir() {
        return Err(AppError::Custom(format!(
            "not a directory: {}",
            path.display()
        )));
    }
    let mut raw: BTreeMap<ApproachName, BTreeMap<TrialId, RawCoverage>> = BTreeMap::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let approach_dir = entry.path();
        if !approach_dir.is_dir() {
            return Err(AppError::UnexpectedEntry(approach_dir));
        }
        let name = entry.file_name().to_string_lossy().to_string();
        debug!("Reading approach directory: {}", approach_dir.display());
        raw.insert(name, read_approach_dir(&approach_dir)?);
    }
    build_campaign(raw)
}
