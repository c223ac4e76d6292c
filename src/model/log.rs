use serde::Serialize;
use std::ops::AddAssign;

/// One month of readings for one school. `month` is a `YYYY-MM` key;
/// malformed values are kept verbatim and degrade to literal labels.
#[derive(Debug, Clone, Serialize)]
pub struct EnergyLog {
    pub school_id: String,
    pub month: String,
    #[serde(flatten)]
    pub measures: Measures,
}

/// The four tracked quantities, grouped so aggregation code sums them as
/// one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Measures {
    pub energy_generated_kwh: f64,
    pub energy_used_kwh: f64,
    pub grid_energy_kwh: f64,
    pub cost_saving_idr: f64,
}

impl AddAssign for Measures {
    fn add_assign(&mut self, other: Self) {
        self.energy_generated_kwh += other.energy_generated_kwh;
        self.energy_used_kwh += other.energy_used_kwh;
        self.grid_energy_kwh += other.grid_energy_kwh;
        self.cost_saving_idr += other.cost_saving_idr;
    }
}
