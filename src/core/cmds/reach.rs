use log::debug;

use crate::core::cli::ReachArgs;
use crate::core::cmds::RenderOptions;
use crate::core::engine::relcov::reach;
use crate::core::output::scores::render_scores;
use crate::types::{AppResult, Campaign};

pub fn execute(
    campaign: &Campaign<String>,
    args: &ReachArgs,
    render: &RenderOptions,
) -> AppResult<()> {
    debug!("Measuring reach of corpus {:?}", args.corpus);
    let scores = reach(
        campaign,
        &args.corpus,
        args.value_reducer,
        args.collection_reducer,
    )?;
    print!("{}", render_scores(&scores, render.format, &render.latex)?);
    Ok(())
}
