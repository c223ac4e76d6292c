pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::export_json;

use crate::analytics::{grand_total, summary_rows, SummaryRow};
use crate::model::{Measures, SolarData};
use serde::Serialize;

/// The exportable summary: per-school lifetime sums plus the grand total.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub schools: Vec<SummaryRow>,
    pub total: Measures,
}

impl SummaryReport {
    #[must_use]
    pub fn build(data: &SolarData) -> Self {
        let schools = summary_rows(&data.schools, &data.logs);
        let total = grand_total(&schools);
        Self { schools, total }
    }
}
