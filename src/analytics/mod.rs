//! Aggregation over the energy log: monthly series, KPI totals, and the
//! per-school lifetime summary.
//!
//! Charts and KPIs follow the current [`Scope`]; the summary table always
//! covers the full log set. That asymmetry is deliberate: the table stays
//! a stable reference while charts react to the selection.

pub mod monthly;
pub mod summary;

pub use monthly::{monthly_series, MonthlyPoint};
pub use summary::{grand_total, sort_rows, summary_rows, SortDir, SortKey, SummaryRow};

use crate::model::{EnergyLog, Measures};

/// The current aggregation filter: every school, or one selected id.
/// Transient UI state, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    AllSchools,
    School(String),
}

impl Scope {
    #[must_use]
    pub fn includes(&self, log: &EnergyLog) -> bool {
        match self {
            Self::AllSchools => true,
            Self::School(id) => log.school_id == *id,
        }
    }

    #[must_use]
    pub fn school_id(&self) -> Option<&str> {
        match self {
            Self::AllSchools => None,
            Self::School(id) => Some(id),
        }
    }
}

/// Sum every measure across the in-scope logs, for the KPI strip.
///
/// Unlike the summary table this honors the scope, and it keeps logs whose
/// school id matches no known school: best-effort aggregation, no
/// referential-integrity enforcement.
#[must_use]
pub fn scope_totals(logs: &[EnergyLog], scope: &Scope) -> Measures {
    let mut totals = Measures::default();
    for log in logs.iter().filter(|l| scope.includes(l)) {
        totals += log.measures;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::{scope_totals, Scope};
    use crate::parser::build_solar_data;
    use pretty_assertions::assert_eq;

    const LOGS: &str = "\
school_id,month,energy_generated_kwh,energy_used_kwh,grid_energy_kwh,cost_saving_idr
S1,2024-01,100,80,20,5000
S2,2024-01,50,40,10,2000
S1,2024-02,30,20,5,1000
";

    #[test]
    fn all_scope_sums_every_log() {
        let data = build_solar_data("school_id,school_name\nS1,A\nS2,B\n", LOGS);
        let totals = scope_totals(&data.logs, &Scope::AllSchools);
        assert_eq!(totals.energy_generated_kwh, 180.0);
        assert_eq!(totals.cost_saving_idr, 8000.0);
    }

    #[test]
    fn school_scope_narrows_to_matching_logs() {
        let data = build_solar_data("school_id,school_name\nS1,A\nS2,B\n", LOGS);
        let totals = scope_totals(&data.logs, &Scope::School("S1".into()));
        assert_eq!(totals.energy_generated_kwh, 130.0);
        assert_eq!(totals.energy_used_kwh, 100.0);
    }

    #[test]
    fn scope_round_trip_restores_unscoped_totals() {
        let data = build_solar_data("school_id,school_name\nS1,A\nS2,B\n", LOGS);
        let before = scope_totals(&data.logs, &Scope::AllSchools);
        let _narrowed = scope_totals(&data.logs, &Scope::School("S2".into()));
        let after = scope_totals(&data.logs, &Scope::AllSchools);
        assert_eq!(before, after);
    }
}
