pub mod colormap;
pub mod scores;
pub mod table;

use clap::ValueEnum;
use strum::{Display, EnumString};

use crate::core::output::colormap::Colormap;

/// Where rendered results go. All formats render to a string the command
/// layer writes to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    Stdout,
    Csv,
    Json,
    /// LaTeX tabular environment.
    Latex,
}

/// Knobs that only apply to `--output latex`.
#[derive(Debug, Clone, Copy)]
pub struct LatexOptions {
    pub enable_color: bool,
    pub rotate_headers: Option<f64>,
    pub colormap: Colormap,
}

impl Default for LatexOptions {
    fn default() -> Self {
        Self {
            enable_color: false,
            rotate_headers: None,
            colormap: Colormap::Viridis,
        }
    }
}

/// (min, max) of the values; (0, 0) when empty so normalization stays safe.
pub(crate) fn norm_minmax(values: &[f64]) -> (f64, f64) {
    let mut values = values.iter().copied();
    let Some(first) = values.next() else {
        return (0.0, 0.0);
    };
    values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Map v in [min, max] to [0, 1]; a degenerate range maps to 0.5.
pub(crate) fn norm_value(v: f64, min_v: f64, max_v: f64) -> f64 {
    if max_v <= min_v {
        return 0.5;
    }
    (v - min_v) / (max_v - min_v)
}

/// Escape characters LaTeX treats specially in approach names.
pub(crate) fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// The `\rotcol` command definition for rotated column headers.
/// Requires \usepackage{graphicx}, \usepackage{calc} and
/// \usepackage{adjustbox} on the document side. Rotated text is raised so
/// it stays inside the header row.
pub(crate) fn latex_rotcol_preamble(angle: Option<f64>) -> String {
    let Some(angle) = angle else {
        return String::new();
    };
    format!(
        "\\newcolumntype{{R}}[2]{{%\n    \
         >{{\\adjustbox{{angle=#1,lap=\\width-(#2)}}\\bgroup}}%\n    \
         l%\n    \
         <{{\\egroup}}%\n\
         }}\n\
         \\newcommand*\\rotcol{{\\multicolumn{{1}}{{R{{{angle:.0}}}{{1em}}}}}}%\n"
    )
}

/// Wrap a column header in `\rotcol` when rotation is requested.
pub(crate) fn latex_rotcol(text: &str, angle: Option<f64>) -> String {
    match angle {
        Some(_) => format!("\\rotcol{{{text}}}"),
        None => text.to_string(),
    }
}
