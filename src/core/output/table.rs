use crate::core::output::{
    LatexOptions, OutputFormat, escape_latex, latex_rotcol, latex_rotcol_preamble, norm_minmax,
    norm_value,
};
use crate::types::{AppError, AppResult, ResultTable};

const NAME_HEADER: &str = "approach";
const NUM_WIDTH: usize = 10;

/// Render a square result table; rows sorted by name, columns in campaign
/// order.
pub fn render_table(
    table: &ResultTable,
    format: OutputFormat,
    latex: &LatexOptions,
) -> AppResult<String> {
    match format {
        OutputFormat::Stdout => Ok(render_plain(table)),
        OutputFormat::Csv => render_csv(table),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
        OutputFormat::Latex => Ok(render_latex(table, latex)),
    }
}

fn render_plain(table: &ResultTable) -> String {
    let name_width = table
        .columns
        .iter()
        .map(|c| c.len())
        .chain([NAME_HEADER.len()])
        .max()
        .unwrap_or(NAME_HEADER.len());

    let mut out = String::new();
    out.push_str(&format!("{NAME_HEADER:<name_width$}"));
    for col in &table.columns {
        out.push_str(&format!("{col:>NUM_WIDTH$}"));
    }
    out.push('\n');

    for (row, cells) in &table.cells {
        out.push_str(&format!("{row:<name_width$}"));
        for col in &table.columns {
            match cells.get(col) {
                Some(value) => out.push_str(&format!("{value:>NUM_WIDTH$.5}")),
                None => out.push_str(&" ".repeat(NUM_WIDTH)),
            }
        }
        out.push('\n');
    }
    out
}

fn render_csv(table: &ResultTable) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    let mut header = vec![NAME_HEADER.to_string()];
    header.extend(table.columns.iter().cloned());
    writer.write_record(&header)?;

    for (row, cells) in &table.cells {
        let mut record = vec![row.clone()];
        for col in &table.columns {
            record.push(
                cells
                    .get(col)
                    .map(|value| format!("{value:.3}"))
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Custom(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Custom(e.to_string()))
}

fn render_latex(table: &ResultTable, latex: &LatexOptions) -> String {
    let mut out = latex_rotcol_preamble(latex.rotate_headers);

    let align = format!("l{}", "r".repeat(table.columns.len()));
    out.push_str(&format!("\\begin{{tabular}}{{{align}}}\n"));

    let header: Vec<String> = std::iter::once(String::new())
        .chain(
            table
                .columns
                .iter()
                .map(|col| latex_rotcol(&escape_latex(col), latex.rotate_headers)),
        )
        .collect();
    out.push_str(&format!("{} \\\\\n", header.join(" & ")));
    out.push_str("\\hline\n");

    // Colors are normalized over the whole table, not per row.
    let values: Vec<f64> = table
        .cells
        .values()
        .flat_map(|row| row.values().copied())
        .collect();
    let (min_v, max_v) = norm_minmax(&values);

    for (row, cells) in &table.cells {
        let mut rendered = vec![escape_latex(row)];
        for col in &table.columns {
            rendered.push(match cells.get(col) {
                Some(value) if latex.enable_color => {
                    let hex = latex.colormap.light_hex(norm_value(*value, min_v, max_v));
                    format!("\\cellcolor[HTML]{{{hex}}}{{{value:.3}}}")
                }
                Some(value) => format!("{value:.3}"),
                None => String::new(),
            });
        }
        out.push_str(&format!("{} \\\\\n", rendered.join(" & ")));
    }
    out.push_str("\\end{tabular}\n");
    out
}
