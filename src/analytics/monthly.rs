use super::Scope;
use crate::model::{EnergyLog, Measures};
use chrono::Datelike;
use std::collections::BTreeMap;

/// One aggregated month for the current scope.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub month: String,
    pub measures: Measures,
}

/// Build the month-ordered series for the chart axis.
///
/// The axis is always the twelve months of the latest year observed among
/// in-scope logs, so sparse data still renders a uniform 12-point x-axis;
/// months without logs carry zero sums. Logs whose month key falls outside
/// that year (or does not parse at all) simply find no axis slot. Points
/// come back sorted ascending by the `YYYY-MM` key, which is lexical-safe.
#[must_use]
pub fn monthly_series(logs: &[EnergyLog], scope: &Scope) -> Vec<MonthlyPoint> {
    let in_scope: Vec<&EnergyLog> = logs.iter().filter(|l| scope.includes(l)).collect();
    let year = latest_year(&in_scope);

    let mut by_month: BTreeMap<String, Measures> = (1..=12)
        .map(|mm| (format!("{year}-{mm:02}"), Measures::default()))
        .collect();

    for log in in_scope {
        if let Some(sums) = by_month.get_mut(&log.month) {
            *sums += log.measures;
        }
    }

    by_month
        .into_iter()
        .map(|(month, measures)| MonthlyPoint { month, measures })
        .collect()
}

/// Maximum year among the given logs, falling back to the current year
/// when nothing parses (empty scope, malformed keys).
fn latest_year(logs: &[&EnergyLog]) -> i32 {
    logs.iter()
        .filter_map(|l| l.month.get(0..4))
        .filter_map(|y| y.parse::<i32>().ok())
        .max()
        .unwrap_or_else(|| chrono::Utc::now().year())
}
