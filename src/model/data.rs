use super::{EnergyLog, School};
use serde::Serialize;
use std::collections::HashMap;

/// The two source tables after parsing, plus an id index for lookups.
///
/// Owned by the composition root and handed to the UI; both collections
/// are read-only for the lifetime of the view, so every aggregate is
/// recomputed from here rather than cached.
#[derive(Debug, Serialize)]
pub struct SolarData {
    pub schools: Vec<School>,
    pub logs: Vec<EnergyLog>,
    #[serde(skip)]
    index_by_id: HashMap<String, usize>,
}

impl SolarData {
    #[must_use]
    pub fn new(schools: Vec<School>, logs: Vec<EnergyLog>) -> Self {
        let index_by_id = schools
            .iter()
            .enumerate()
            .map(|(i, s)| (s.school_id.clone(), i))
            .collect();
        Self {
            schools,
            logs,
            index_by_id,
        }
    }

    /// Look up a school by id. Logs referencing ids not present here are
    /// still aggregated into the monthly series and KPI totals.
    #[must_use]
    pub fn school(&self, school_id: &str) -> Option<&School> {
        self.index_by_id
            .get(school_id)
            .and_then(|&i| self.schools.get(i))
    }

    #[must_use]
    pub fn school_count(&self) -> usize {
        self.schools.len()
    }
}
