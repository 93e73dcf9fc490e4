use console::style;
use log::warn;

use crate::core::cmds::RenderOptions;
use crate::core::engine::relscore::relscore_all;
use crate::core::output::scores::render_scores;
use crate::types::{AppResult, Campaign};

pub fn execute(campaign: &Campaign<String>, render: &RenderOptions) -> AppResult<()> {
    let outcome = relscore_all(campaign);
    for name in &outcome.excluded {
        warn!(
            "Approach {} has no trials with non-empty coverage; its relscore is \
             undefined and it is excluded from the output (it still counts toward \
             missing edges). Use --exclude-approach to drop it entirely.",
            style(name).red()
        );
    }
    print!(
        "{}",
        render_scores(&outcome.scores, render.format, &render.latex)?
    );
    Ok(())
}
