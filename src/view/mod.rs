mod metrics_line;
mod report;
mod rows;

pub use metrics_line::{metrics_line, LAST_UPDATED_FORMAT};
pub use report::write_report;
pub use rows::{detail_rows, summary_rows, tags, DetailRow, SummaryRow, Tag, DETAIL_COLUMNS};
