use super::SummaryReport;
use crate::error::ExportError;
use crate::model::SolarData;
use std::fs::File;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(data: &SolarData, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let report = SummaryReport::build(data);
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "school_id",
        "school_name",
        "sum_generated_kwh",
        "sum_used_kwh",
        "sum_grid_kwh",
        "sum_saving_idr",
    ])?;

    for row in &report.schools {
        writer.write_record([
            row.school_id.clone(),
            row.school_name.clone(),
            row.sum_generated_kwh.to_string(),
            row.sum_used_kwh.to_string(),
            row.sum_grid_kwh.to_string(),
            row.sum_saving_idr.to_string(),
        ])?;
    }

    writer.write_record([
        String::new(),
        "Total (All schools)".to_string(),
        report.total.energy_generated_kwh.to_string(),
        report.total.energy_used_kwh.to_string(),
        report.total.grid_energy_kwh.to_string(),
        report.total.cost_saving_idr.to_string(),
    ])?;

    writer.flush().map_err(|e| ExportError::WriteFailed {
        message: e.to_string(),
    })?;

    Ok(())
}
