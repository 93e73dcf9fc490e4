use crate::core::cmds::RenderOptions;
use crate::core::engine::relcov::reliability;
use crate::core::output::scores::render_scores;
use crate::types::{AppResult, Campaign};

pub fn execute(campaign: &Campaign<String>, render: &RenderOptions) -> AppResult<()> {
    let scores = reliability(campaign)?;
    print!("{}", render_scores(&scores, render.format, &render.latex)?);
    Ok(())
}
