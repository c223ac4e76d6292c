use serde::Serialize;

/// One tracked installation site. Built once at the parser boundary and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct School {
    pub school_id: String,
    pub school_name: String,
    pub city: String,
    pub district: String,
    pub address: String,
    pub installation_date: String,
    pub latitude: f64,
    pub longitude: f64,
    pub installation_cost: f64,
    pub panel_capacity_kw: f64,
}
