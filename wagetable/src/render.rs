//! Terminal rendering of wage tables.

use console::{measure_text_width, pad_str, Alignment, Style};
use wagetablelib::{WageTable, NO_RESULTS};

/// Column alignments in table order; unit price is right-aligned.
const ALIGNMENTS: [Alignment; 4] = [
    Alignment::Left,
    Alignment::Left,
    Alignment::Right,
    Alignment::Left,
];

/// Gap between columns
const GAP: &str = "  ";

/// Render a table as aligned text, or the no-results message when empty.
///
/// Widths are measured in terminal cells, so Hangul labels line up.
pub fn render_table(table: &WageTable) -> String {
    if table.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }

    let widths = column_widths(table);
    let header_style = Style::new().bold();
    let footer_style = Style::new().dim();

    let mut out = String::new();
    let header = format_line(&table.headers, &widths);
    out.push_str(&header_style.apply_to(header.trim_end()).to_string());
    out.push('\n');

    let total_width = widths.iter().sum::<usize>() + GAP.len() * (widths.len() - 1);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for row in &table.rows {
        out.push_str(format_line(&row.values, &widths).trim_end());
        out.push('\n');
    }

    out.push_str(&footer_style.apply_to(&table.footer).to_string());
    out.push('\n');
    out
}

fn column_widths(table: &WageTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| measure_text_width(h)).collect();
    for row in &table.rows {
        for (width, value) in widths.iter_mut().zip(&row.values) {
            *width = (*width).max(measure_text_width(value));
        }
    }
    widths
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .zip(ALIGNMENTS)
        .map(|((cell, &width), align)| pad_str(cell, width, align, None).into_owned())
        .collect::<Vec<_>>()
        .join(GAP)
}
