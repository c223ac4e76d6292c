use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use solar_schools::export::{export_csv, export_json};
use solar_schools::load::load_sources;
use solar_schools::parser::build_solar_data;
use solar_schools::ui::App;

#[derive(Parser, Debug)]
#[command(name = "solar-schools")]
#[command(about = "Solar schools dashboard - monthly energy analytics for West Java installations")]
#[command(version)]
struct Args {
    /// Schools table: CSV file path or http(s) URL
    #[arg(default_value = "data/schools.csv")]
    schools: String,

    /// Energy log table: CSV file path or http(s) URL
    #[arg(default_value = "data/school_energy_log.csv")]
    logs: String,

    /// Export the summary table to CSV and exit
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the summary table to JSON and exit
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Both sources load concurrently; either failure aborts before the
    // terminal is touched, with the reason surfaced as-is.
    let (schools_text, logs_text) = load_sources(&args.schools, &args.logs)?;
    let data = build_solar_data(&schools_text, &logs_text);

    if let Some(csv_path) = &args.csv {
        export_csv(&data, csv_path)?;
        println!("Exported summary to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&data, json_path)?;
        println!("Exported summary to JSON: {}", json_path.display());
    }

    if args.csv.is_some() || args.json.is_some() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(data).run(terminal);
    ratatui::restore();
    result
}
