use crate::model::{EnergyLog, Measures, School};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Lifetime sums for one school, always computed over the full log set
/// regardless of the current scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub school_id: String,
    pub school_name: String,
    pub sum_generated_kwh: f64,
    pub sum_used_kwh: f64,
    pub sum_grid_kwh: f64,
    pub sum_saving_idr: f64,
}

/// Sortable columns of the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Generated,
    Used,
    Grid,
    Saving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Build one row per known school, in the source table's order.
///
/// Logs referencing an id with no school row have no row to land in and
/// are dropped here only; they still count toward the monthly series and
/// KPI totals.
#[must_use]
pub fn summary_rows(schools: &[School], logs: &[EnergyLog]) -> Vec<SummaryRow> {
    let mut sums: HashMap<&str, Measures> = HashMap::new();
    for log in logs {
        *sums.entry(log.school_id.as_str()).or_default() += log.measures;
    }

    schools
        .iter()
        .map(|school| {
            let m = sums
                .get(school.school_id.as_str())
                .copied()
                .unwrap_or_default();
            SummaryRow {
                school_id: school.school_id.clone(),
                school_name: school.school_name.clone(),
                sum_generated_kwh: m.energy_generated_kwh,
                sum_used_kwh: m.energy_used_kwh,
                sum_grid_kwh: m.grid_energy_kwh,
                sum_saving_idr: m.cost_saving_idr,
            }
        })
        .collect()
}

/// Fold of the per-school rows; invariant under scope by construction.
#[must_use]
pub fn grand_total(rows: &[SummaryRow]) -> Measures {
    let mut total = Measures::default();
    for row in rows {
        total += Measures {
            energy_generated_kwh: row.sum_generated_kwh,
            energy_used_kwh: row.sum_used_kwh,
            grid_energy_kwh: row.sum_grid_kwh,
            cost_saving_idr: row.sum_saving_idr,
        };
    }
    total
}

/// Sort rows in place by the given key and direction.
///
/// The sort is stable, so rows with equal keys keep their prior relative
/// order.
pub fn sort_rows(rows: &mut [SummaryRow], key: SortKey, dir: SortDir) {
    rows.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => a.school_name.cmp(&b.school_name),
            SortKey::Generated => compare_f64(a.sum_generated_kwh, b.sum_generated_kwh),
            SortKey::Used => compare_f64(a.sum_used_kwh, b.sum_used_kwh),
            SortKey::Grid => compare_f64(a.sum_grid_kwh, b.sum_grid_kwh),
            SortKey::Saving => compare_f64(a.sum_saving_idr, b.sum_saving_idr),
        };
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::{grand_total, sort_rows, summary_rows, SortDir, SortKey};
    use crate::parser::build_solar_data;
    use pretty_assertions::assert_eq;

    const SCHOOLS: &str = "\
school_id,school_name
S1,Cendekia
S2,Harapan
S3,Bina Bangsa
";

    const LOGS: &str = "\
school_id,month,energy_generated_kwh,energy_used_kwh,grid_energy_kwh,cost_saving_idr
S1,2024-01,100,80,20,5000
S1,2024-02,50,40,10,2000
S2,2024-01,70,60,15,3000
GHOST,2024-01,999,999,999,999
";

    #[test]
    fn sums_lifetime_measures_per_school() {
        let data = build_solar_data(SCHOOLS, LOGS);
        let rows = summary_rows(&data.schools, &data.logs);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].sum_generated_kwh, 150.0);
        assert_eq!(rows[0].sum_saving_idr, 7000.0);
        assert_eq!(rows[1].sum_generated_kwh, 70.0);
        // no logs at all still yields a zero row
        assert_eq!(rows[2].sum_generated_kwh, 0.0);
    }

    #[test]
    fn unknown_school_ids_get_no_row() {
        let data = build_solar_data(SCHOOLS, LOGS);
        let rows = summary_rows(&data.schools, &data.logs);
        assert!(rows.iter().all(|r| r.school_id != "GHOST"));

        // and the grand total is the fold of the rows, so the ghost log
        // is absent there too
        let total = grand_total(&rows);
        assert_eq!(total.energy_generated_kwh, 220.0);
        assert_eq!(total.cost_saving_idr, 10_000.0);
    }

    #[test]
    fn toggling_a_numeric_sort_exactly_reverses_distinct_rows() {
        let data = build_solar_data(SCHOOLS, LOGS);
        let mut asc = summary_rows(&data.schools, &data.logs);
        sort_rows(&mut asc, SortKey::Generated, SortDir::Asc);

        let mut desc = asc.clone();
        sort_rows(&mut desc, SortKey::Generated, SortDir::Desc);

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn equal_keys_keep_prior_order() {
        let schools = "school_id,school_name\nS1,A\nS2,B\nS3,C\n";
        let logs = "\
school_id,month,energy_generated_kwh,energy_used_kwh,grid_energy_kwh,cost_saving_idr
S1,2024-01,10,0,0,0
S2,2024-01,10,0,0,0
S3,2024-01,10,0,0,0
";
        let data = build_solar_data(schools, logs);
        let mut rows = summary_rows(&data.schools, &data.logs);
        sort_rows(&mut rows, SortKey::Generated, SortDir::Asc);

        let ids: Vec<&str> = rows.iter().map(|r| r.school_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn name_sort_is_lexical() {
        let data = build_solar_data(SCHOOLS, LOGS);
        let mut rows = summary_rows(&data.schools, &data.logs);
        sort_rows(&mut rows, SortKey::Name, SortDir::Asc);

        let names: Vec<&str> = rows.iter().map(|r| r.school_name.as_str()).collect();
        assert_eq!(names, vec!["Bina Bangsa", "Cendekia", "Harapan"]);
    }
}
