use std::io;
use std::io::Write;

use crate::aggregator::Aggregation;
use crate::models::MetricsSnapshot;
use crate::view::metrics_line::metrics_line;
use crate::view::rows::{detail_rows, summary_rows, Tag, DETAIL_COLUMNS};

const DETAIL_INDENT: &str = "    ";

/// Writes the metrics banner, then every client followed by its expanded transactions.
pub fn write_report<W: Write>(output: &mut W, table: Option<&Aggregation>, metrics: Option<&MetricsSnapshot>) -> io::Result<()> {
    writeln!(output, "{}", metrics_line(metrics))?;

    let Some(table) = table else {
        return Ok(());
    };

    for row in summary_rows(table) {
        writeln!(output, "client: {} | tags: {}", row.client, format_tags(&row.tags))?;
        writeln!(output, "{DETAIL_INDENT}{}", DETAIL_COLUMNS.join(" | "))?;

        for detail in detail_rows(table, &row.client).unwrap_or_default() {
            writeln!(output, "{DETAIL_INDENT}{} | {}", detail.cells.join(" | "), format_tags(&detail.tags))?;
        }
    }

    Ok(())
}

fn format_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| format!("{}[{}]", tag.label, tag.category))
        .collect::<Vec<_>>()
        .join(", ")
}
