use crate::core::cli::RelcovArgs;
use crate::core::cmds::RenderOptions;
use crate::core::engine::relcov::relcov_table;
use crate::core::output::table::render_table;
use crate::types::{AppResult, Campaign};

pub fn execute(
    campaign: &Campaign<String>,
    args: &RelcovArgs,
    render: &RenderOptions,
) -> AppResult<()> {
    let table = relcov_table(campaign, args.value_reducer, args.collection_reducer)?;
    print!("{}", render_table(&table, render.format, &render.latex)?);
    Ok(())
}
