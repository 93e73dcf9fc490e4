use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands};
use crate::core::cmds::{self, RenderOptions};
use crate::core::logging::init_logging;
use crate::types::AppResult;

pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Initialize logging first so everything downstream can report.
    init_logging(args.log_level.as_deref(), args.log_color.as_deref());

    let render = RenderOptions::from_args(&args);

    // Dispatch to appropriate command. Each command reads the campaign
    // directory (with the global include/exclude filters applied) and
    // renders its result to stdout.
    match &args.command {
        Commands::Relscore(cmd_args) => {
            debug!("Computing relscore for {}", cmd_args.dir.display());
            let campaign = cmds::load_campaign(&cmd_args.dir, &args)?;
            cmds::relscore::execute(&campaign, &render)
        }
        Commands::Relcov(cmd_args) => {
            debug!("Computing relcov table for {}", cmd_args.dir.display());
            let campaign = cmds::load_campaign(&cmd_args.dir, &args)?;
            cmds::relcov::execute(&campaign, cmd_args, &render)
        }
        Commands::Reliability(cmd_args) => {
            debug!("Computing reliability for {}", cmd_args.dir.display());
            let campaign = cmds::load_campaign(&cmd_args.dir, &args)?;
            cmds::reliability::execute(&campaign, &render)
        }
        Commands::Reach(cmd_args) => {
            debug!("Computing reach for {}", cmd_args.dir.display());
            let campaign = cmds::load_campaign(&cmd_args.dir, &args)?;
            cmds::reach::execute(&campaign, cmd_args, &render)
        }
    }
}
