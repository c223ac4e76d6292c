use super::table::{parse_table, Row};
use super::parse_numeric_or_zero;
use crate::model::{EnergyLog, Measures, School, SolarData};

/// Parse both source tables and build the typed dataset.
///
/// All string/number coercion happens here, once; downstream code works
/// against the fixed record shapes in [`crate::model`]. Malformed numeric
/// cells degrade to zero per [`parse_numeric_or_zero`], so this never
/// fails on bad data.
///
/// # Example
///
/// ```
/// use solar_schools::parser::build_solar_data;
///
/// let data = build_solar_data(
///     "school_id,school_name,city\nS1,SDN 1 Bandung,Bandung\n",
///     "school_id,month,energy_generated_kwh\nS1,2024-01,120\n",
/// );
/// assert_eq!(data.schools[0].school_name, "SDN 1 Bandung");
/// assert_eq!(data.logs[0].measures.energy_generated_kwh, 120.0);
/// ```
#[must_use]
pub fn build_solar_data(schools_text: &str, logs_text: &str) -> SolarData {
    let schools = parse_table(schools_text)
        .iter()
        .map(school_from_row)
        .collect();
    let logs = parse_table(logs_text).iter().map(log_from_row).collect();
    SolarData::new(schools, logs)
}

fn school_from_row(row: &Row) -> School {
    School {
        school_id: text(row, "school_id"),
        school_name: text(row, "school_name"),
        city: text(row, "city"),
        district: text(row, "district"),
        address: text(row, "address"),
        installation_date: text(row, "installation_date"),
        latitude: number(row, "latitude"),
        longitude: number(row, "longitude"),
        installation_cost: number(row, "installation_cost"),
        panel_capacity_kw: number(row, "panel_capacity_kw"),
    }
}

fn log_from_row(row: &Row) -> EnergyLog {
    EnergyLog {
        school_id: text(row, "school_id"),
        month: text(row, "month"),
        measures: Measures {
            energy_generated_kwh: number(row, "energy_generated_kwh"),
            energy_used_kwh: number(row, "energy_used_kwh"),
            grid_energy_kwh: number(row, "grid_energy_kwh"),
            cost_saving_idr: number(row, "cost_saving_idr"),
        },
    }
}

fn text(row: &Row, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

fn number(row: &Row, key: &str) -> f64 {
    row.get(key).map_or(0.0, |v| parse_numeric_or_zero(v))
}

#[cfg(test)]
mod tests {
    use super::build_solar_data;
    use pretty_assertions::assert_eq;

    const SCHOOLS: &str = "\
school_id,school_name,city,district,address,installation_date,latitude,longitude,installation_cost,panel_capacity_kw
S1,SDN 1 Bandung,Bandung,Coblong,\"Jl. Dago, No. 5\",2023-06-01,-6.89,107.61,\"250,000,000\",12.5
S2,SMPN 2 Bogor,Bogor,,,,,,not-a-number,
";

    const LOGS: &str = "\
school_id,month,energy_generated_kwh,energy_used_kwh,grid_energy_kwh,cost_saving_idr
S1,2024-01,100,80,20,5000
S2,2024-02,garbage,40,10,2000
";

    #[test]
    fn builds_typed_schools_with_one_shot_coercion() {
        let data = build_solar_data(SCHOOLS, LOGS);
        assert_eq!(data.schools.len(), 2);
        assert_eq!(data.schools[0].address, "Jl. Dago, No. 5");
        assert_eq!(data.schools[0].installation_cost, 250_000_000.0);
        assert_eq!(data.schools[0].panel_capacity_kw, 12.5);
        // malformed numerics degrade to zero, missing fields to empty
        assert_eq!(data.schools[1].installation_cost, 0.0);
        assert_eq!(data.schools[1].district, "");
    }

    #[test]
    fn builds_typed_logs() {
        let data = build_solar_data(SCHOOLS, LOGS);
        assert_eq!(data.logs.len(), 2);
        assert_eq!(data.logs[0].month, "2024-01");
        assert_eq!(data.logs[0].measures.cost_saving_idr, 5000.0);
        assert_eq!(data.logs[1].measures.energy_generated_kwh, 0.0);
        assert_eq!(data.logs[1].measures.energy_used_kwh, 40.0);
    }

    #[test]
    fn indexes_schools_by_id() {
        let data = build_solar_data(SCHOOLS, LOGS);
        assert_eq!(data.school("S2").unwrap().school_name, "SMPN 2 Bogor");
        assert!(data.school("S9").is_none());
    }
}
