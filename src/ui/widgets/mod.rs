//! UI widgets for reusable components.

pub mod profile_chart;

pub use profile_chart::ProfileChart;
