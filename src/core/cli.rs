use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::engine::reducers::{CollectionReducer, ValueReducer};
use crate::core::output::OutputFormat;
use crate::core::output::colormap::Colormap;

// All subcommands expect this directory layout (one campaign dir, no moving
// files).
const CAMPAIGN_DIR_HELP: &str = "Campaign directory: one subdirectory per approach, each \
     containing afl-showmap coverage files (id:count per line)";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Include only approaches whose name matches this regex (whitelist).
    /// Can be specified multiple times; an approach is kept if it matches
    /// any pattern.
    #[arg(
        short = 'i',
        long = "include-approach",
        global = true,
        value_name = "PATTERN"
    )]
    pub include_approach: Vec<String>,

    /// Exclude approaches whose name matches this regex.
    /// Can be specified multiple times; applied after --include-approach.
    #[arg(
        short = 'x',
        long = "exclude-approach",
        global = true,
        value_name = "PATTERN"
    )]
    pub exclude_approach: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Stdout)]
    pub output: OutputFormat,

    /// Rotate LaTeX table column headers by this angle in degrees (e.g. 45).
    /// Requires \usepackage[table]{xcolor} and \usepackage{adjustbox}.
    #[arg(long = "latex-rotate-headers", global = true, value_name = "DEGREES")]
    pub latex_rotate_headers: Option<f64>,

    /// Enable background colors for LaTeX tables and score outputs.
    /// Requires \usepackage[table]{xcolor}.
    #[arg(long = "latex-enable-color", global = true)]
    pub latex_enable_color: bool,

    /// Colormap for colored LaTeX output
    #[arg(long, global = true, value_enum, default_value_t = Colormap::Viridis)]
    pub colormap: Colormap,

    /// Logging level (overrides the default). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute relscore values: each approach is rewarded for edges that
    /// other approaches never hit. Prints one score per approach.
    Relscore(RelscoreArgs),

    /// Compute relcov-based performance of each approach relative to every
    /// other approach as reference. Prints a full approach x approach table.
    Relcov(RelcovArgs),

    /// Compute relcov-based reliability: each approach's trials against the
    /// union of its own trials.
    Reliability(ReliabilityArgs),

    /// Compute how much of a seed corpus's coverage each approach subsumes.
    Reach(ReachArgs),
}

/// Arguments for the relscore command
#[derive(Parser, Debug)]
pub struct RelscoreArgs {
    #[arg(value_name = "DIR", help = CAMPAIGN_DIR_HELP)]
    pub dir: PathBuf,
}

/// Arguments for the relcov command
#[derive(Parser, Debug)]
pub struct RelcovArgs {
    #[arg(value_name = "DIR", help = CAMPAIGN_DIR_HELP)]
    pub dir: PathBuf,

    /// How to fold each approach's per-trial ratios into one value
    #[arg(long, value_enum, default_value_t = ValueReducer::Median)]
    pub value_reducer: ValueReducer,

    /// How to collapse a reference approach's trials into one edge set
    #[arg(long, value_enum, default_value_t = CollectionReducer::Union)]
    pub collection_reducer: CollectionReducer,
}

/// Arguments for the reliability command
#[derive(Parser, Debug)]
pub struct ReliabilityArgs {
    #[arg(value_name = "DIR", help = CAMPAIGN_DIR_HELP)]
    pub dir: PathBuf,
}

/// Arguments for the reach command
#[derive(Parser, Debug)]
pub struct ReachArgs {
    #[arg(value_name = "DIR", help = CAMPAIGN_DIR_HELP)]
    pub dir: PathBuf,

    /// Name of the single-trial corpus approach (subdirectory) to measure
    /// against
    #[arg(long, default_value = "seeds")]
    pub corpus: String,

    /// How to fold the corpus's per-trial ratios into one value
    #[arg(long, value_enum, default_value_t = ValueReducer::Median)]
    pub value_reducer: ValueReducer,

    /// How to collapse each approach's trials into one edge set
    #[arg(long, value_enum, default_value_t = CollectionReducer::Union)]
    pub collection_reducer: CollectionReducer,
}
