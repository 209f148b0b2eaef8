//! Terminal rendering of analysis results.
//!
//! Everything returns a `String`; printing is left to the caller. The theme
//! is passed in on every call.

use crate::analysis::{AnomalyReport, CorrelationResult};
use crate::config::Theme;
use crate::types::DatasetProfile;
use nu_ansi_term::{Color, Style};

/// Default plot height in rows.
pub const PLOT_HEIGHT: usize = 20;

/// Default plot width in columns.
pub const PLOT_WIDTH: usize = 90;

const PAD_X: usize = 2;
const PAD_Y: usize = 1;

const WHITE: Color = Color::Rgb(0xFA, 0xFA, 0xFA);
const GREY: Color = Color::Rgb(0x80, 0x80, 0x80);

/// Styles for the box outline and the padded text area.
struct Palette {
    border: Style,
    body: Style,
}

fn palette(theme: Theme) -> Palette {
    let (foreground, background) = match theme {
        Theme::Dark => (WHITE, GREY),
        Theme::Light => (GREY, WHITE),
    };
    Palette {
        border: Style::new().fg(foreground),
        body: Style::new().bold().fg(foreground).on(background),
    }
}

/// Draw `content` inside a bordered, padded, coloured box.
pub fn panel(content: &str, theme: Theme) -> String {
    let Palette { border, body } = palette(theme);
    let lines: Vec<&str> = content.lines().collect();
    let text_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let inner_width = text_width + 2 * PAD_X;
    let rule = "─".repeat(inner_width);

    let mut out = String::new();
    out.push_str(&format!("{}\n", border.paint(format!("┌{rule}┐"))));

    let blank = " ".repeat(inner_width);
    let padded = (0..PAD_Y)
        .map(|_| blank.clone())
        .chain(lines.iter().map(|line| {
            let fill = text_width - line.chars().count();
            format!("{pad}{line}{}{pad}", " ".repeat(fill), pad = " ".repeat(PAD_X))
        }))
        .chain((0..PAD_Y).map(|_| blank.clone()));

    for line in padded {
        out.push_str(&format!(
            "{}{}{}\n",
            border.paint("│"),
            body.paint(line),
            border.paint("│")
        ));
    }

    out.push_str(&border.paint(format!("└{rule}┘")).to_string());
    out
}

/// Panel headed `Column: <name>` around a plot or histogram.
pub fn column_panel(name: &str, body: &str, theme: Theme) -> String {
    panel(&format!("Column: {name}\n\n{body}"), theme)
}

/// ASCII line chart of `values`, resampled to `width` columns, caption below.
pub fn plot(values: &[f64], height: usize, width: usize, caption: &str) -> String {
    if values.is_empty() || height == 0 || width == 0 {
        return caption.to_string();
    }

    let series = resample(values, width);
    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let top = height - 1;

    let level = |v: f64| -> usize {
        if range == 0.0 || top == 0 {
            0
        } else {
            (((v - min) / range) * top as f64).round() as usize
        }
    };

    let mut grid = vec![vec![' '; series.len()]; height];
    let mut previous: Option<usize> = None;
    for (x, &v) in series.iter().enumerate() {
        let y = level(v);
        if let Some(prev) = previous {
            let (lo, hi) = if prev < y { (prev, y) } else { (y, prev) };
            for row in grid.iter_mut().take(hi).skip(lo + 1) {
                row[x] = '│';
            }
        }
        grid[y][x] = '•';
        previous = Some(y);
    }

    let mut out = String::new();
    for (row_idx, row) in grid.iter().enumerate().rev() {
        let label = if top == 0 {
            min
        } else {
            min + range * row_idx as f64 / top as f64
        };
        let line: String = row.iter().collect();
        out.push_str(&format!("{label:>10.2} ┤{}\n", line.trim_end()));
    }
    out.push('\n');
    out.push_str(caption);
    out
}

fn resample(values: &[f64], width: usize) -> Vec<f64> {
    if values.len() == 1 {
        return vec![values[0]; width];
    }
    if width == 1 {
        return vec![values[0]];
    }

    let span = (values.len() - 1) as f64;
    (0..width)
        .map(|x| {
            let pos = x as f64 * span / (width - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(values.len() - 1);
            let frac = pos - lo as f64;
            values[lo] + (values[hi] - values[lo]) * frac
        })
        .collect()
}

/// Column overview table: name, inferred type, completeness.
pub fn profile_table(profile: &DatasetProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Rows: {}  Columns: {}\n\n",
        profile.total_rows, profile.total_columns
    ));
    out.push_str(&format!(
        "{:<20} {:<10} {:>12}\n",
        "Column", "Type", "Complete %"
    ));
    out.push_str(&format!("{}\n", "-".repeat(44)));
    for column in profile.columns() {
        out.push_str(&format!(
            "{:<20} {:<10} {:>12.1}\n",
            truncate_str(&column.name, 19),
            column.inferred_type.to_string(),
            column.completeness
        ));
    }
    out
}

/// One-paragraph summary of a correlation.
pub fn correlation_summary(result: &CorrelationResult) -> String {
    format!(
        "Pearson correlation: {} ~ {}\n\n     r: {:.4}\n Pairs: {}\nReading: {}\n",
        result.column_a, result.column_b, result.coefficient, result.pairs, result.interpretation
    )
}

/// Listing of flagged rows per column.
pub fn anomaly_summary(report: &AnomalyReport, threshold: f64) -> String {
    let mut out = format!("Anomalies (|z| > {threshold})\n\n");
    if report.is_empty() {
        out.push_str("No anomalies detected\n");
        return out;
    }
    for (column, rows) in report {
        let rows: Vec<String> = rows.iter().map(usize::to_string).collect();
        out.push_str(&format!("{:>20}: rows {}\n", truncate_str(column, 20), rows.join(", ")));
    }
    out
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
