use std::path::Path;

use log::debug;
use regex::Regex;

use crate::core::cli::Args;
use crate::core::fs::read_campaign_dir;
use crate::core::output::{LatexOptions, OutputFormat};
use crate::types::{AppError, AppResult, Campaign};

pub mod reach;
pub mod relcov;
pub mod reliability;
pub mod relscore;

/// Rendering choices shared by every subcommand, resolved once from the
/// global CLI flags.
pub struct RenderOptions {
    pub format: OutputFormat,
    pub latex: LatexOptions,
}

impl RenderOptions {
    pub fn from_args(args: &Args) -> Self {
        Self {
            format: args.output,
            latex: LatexOptions {
                enable_color: args.latex_enable_color,
                rotate_headers: args.latex_rotate_headers,
                colormap: args.colormap,
            },
        }
    }
}

fn compile_patterns(patterns: &[String], flag: &'static str) -> AppResult<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| AppError::InvalidPattern {
                flag,
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Read a campaign directory and apply the include/exclude filters.
///
/// Filtering happens here, before any metric is computed: relscore's
/// missing counts must reflect the filtered campaign, not the full one.
pub fn load_campaign(dir: &Path, args: &Args) -> AppResult<Campaign<String>> {
    let campaign = read_campaign_dir(dir)?;
    debug!(
        "Read {} approaches from {}",
        campaign.approaches().len(),
        dir.display()
    );

    let include = compile_patterns(&args.include_approach, "--include-approach")?;
    let exclude = compile_patterns(&args.exclude_approach, "--exclude-approach")?;

    let mut approaches = campaign.into_approaches();
    if !include.is_empty() {
        approaches.retain(|name, _| include.iter().any(|pattern| pattern.is_match(name)));
        if approaches.is_empty() {
            return Err(AppError::EmptyInput(
                "no approaches matched --include-approach; nothing to do".to_string(),
            ));
        }
    }
    if !exclude.is_empty() {
        approaches.retain(|name, _| !exclude.iter().any(|pattern| pattern.is_match(name)));
        if approaches.is_empty() {
            return Err(AppError::EmptyInput(
                "all approaches were excluded via --exclude-approach; nothing to do".to_string(),
            ));
        }
    }
    Campaign::new(approaches)
}
