use std::collections::BTreeMap;

use crate::core::output::{LatexOptions, OutputFormat, escape_latex, norm_minmax, norm_value};
use crate::types::{AppError, AppResult, ApproachName};

/// Render one score per approach, best first (ties broken by name).
pub fn render_scores(
    scores: &BTreeMap<ApproachName, f64>,
    format: OutputFormat,
    latex: &LatexOptions,
) -> AppResult<String> {
    let mut sorted: Vec<(&ApproachName, f64)> =
        scores.iter().map(|(name, score)| (name, *score)).collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    match format {
        OutputFormat::Stdout => Ok(render_plain(&sorted)),
        OutputFormat::Csv => render_csv(&sorted),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(scores)?),
        OutputFormat::Latex => Ok(render_latex(&sorted, latex)),
    }
}

fn render_plain(sorted: &[(&ApproachName, f64)]) -> String {
    let mut out = String::new();
    for (name, score) in sorted {
        out.push_str(&format!("{name}: {score:.2}\n"));
    }
    out
}

fn render_csv(sorted: &[(&ApproachName, f64)]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["approach", "score"])?;
    for (name, score) in sorted {
        writer.write_record([name.to_string(), format!("{score:.2}")])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Custom(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Custom(e.to_string()))
}

fn render_latex(sorted: &[(&ApproachName, f64)], latex: &LatexOptions) -> String {
    let mut out = String::new();
    out.push_str("\\begin{tabular}{lr}\n");
    out.push_str("approach & score \\\\\n");
    if sorted.is_empty() {
        out.push_str("\\end{tabular}\n");
        return out;
    }
    out.push_str("\\hline\n");

    let values: Vec<f64> = sorted.iter().map(|(_, score)| *score).collect();
    let (min_v, max_v) = norm_minmax(&values);
    for (name, score) in sorted {
        let name = escape_latex(name);
        if latex.enable_color {
            let hex = latex.colormap.light_hex(norm_value(*score, min_v, max_v));
            out.push_str(&format!(
                "{name} & \\cellcolor[HTML]{{{hex}}}{{{score:.2}}} \\\\\n"
            ));
        } else {
            out.push_str(&format!("{name} & {score:.2} \\\\\n"));
        }
    }
    out.push_str("\\end{tabular}\n");
    out
}
