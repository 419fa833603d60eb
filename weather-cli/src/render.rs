use std::io::{self, Write};

use cityweather_core::{Report, report::Row};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const GAP: usize = 2;

/// Write the report panel to stdout.
pub fn print(report: &Report) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", panel(report))?;
    out.flush()
}

/// Rounded panel with the report header as its title and one line per row.
///
/// Widths are measured in terminal columns; flag and weather glyphs are
/// assumed to take the width `unicode-width` reports for them.
pub fn panel(report: &Report) -> String {
    let label_width = report
        .rows
        .iter()
        .map(|row| row.label.width())
        .max()
        .unwrap_or(0);
    let body_width = report
        .rows
        .iter()
        .map(|row| label_width + GAP + row.value.width())
        .max()
        .unwrap_or(0);

    let title_width = report.header.width();
    // One space of padding inside each border; the title needs its own spaces
    // plus at least one dash on either side.
    let inner = (body_width + 2).max(title_width + 4);

    let dashes = inner - (title_width + 2);
    let left = dashes / 2;
    let right = dashes - left;

    let mut lines = Vec::with_capacity(report.rows.len() + 2);
    lines.push(format!(
        "{}{}{}",
        format!("╭{}", "─".repeat(left)).cyan(),
        format!(" {} ", report.header).bold(),
        format!("{}╮", "─".repeat(right)).cyan(),
    ));

    for row in &report.rows {
        let used = label_width + GAP + row.value.width();
        lines.push(format!(
            "{} {}{}{}{} {}",
            "│".cyan(),
            pad(row.label, label_width),
            " ".repeat(GAP),
            styled_value(row),
            " ".repeat(inner - 2 - used),
            "│".cyan(),
        ));
    }

    lines.push(format!("╰{}╯", "─".repeat(inner)).cyan().to_string());
    lines.join("\n")
}

fn styled_value(row: &Row) -> String {
    if row.emphasis {
        row.value.as_str().bold().cyan().to_string()
    } else {
        row.value.clone()
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(text.width())))
}
