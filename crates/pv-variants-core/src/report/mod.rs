//! Presentation-ready views of an evaluated scenario.

pub mod chart;
pub mod comparison;
pub mod dump;

pub use chart::{chart_titles, net_result_chart, ChartBar};
pub use comparison::{
    build_report, ColumnHeader, ComparisonReport, MetricKind, MetricRow, EXPORT_FILE_STEM,
    SHEET_NAME, SPREADSHEET_COLUMN_WIDTHS,
};
pub use dump::{build_dump, ScenarioDump};
