//! # Solar Schools Dashboard
//!
//! A terminal dashboard for solar installations at West Java schools.
//!
//! ## Features
//!
//! - Load the schools table and the monthly energy log as CSV (file or HTTP)
//! - Aggregate per-month sums over a selectable scope (all schools, or one)
//! - Interactive KPIs, line charts, and a sortable lifetime-sums table
//! - Export the summary table to CSV and JSON
//!
//! ## Example
//!
//! ```
//! use solar_schools::parser::build_solar_data;
//! use solar_schools::analytics::{monthly_series, Scope};
//!
//! let schools = "school_id,school_name\nS1,Test School\n";
//! let logs = "school_id,month,energy_generated_kwh,energy_used_kwh,grid_energy_kwh,cost_saving_idr\n\
//!             S1,2024-01,100,80,20,5000\n";
//!
//! let data = build_solar_data(schools, logs);
//! let series = monthly_series(&data.logs, &Scope::AllSchools);
//! assert_eq!(series.len(), 12);
//! ```

pub mod analytics;
pub mod chart;
pub mod error;
pub mod export;
pub mod format;
pub mod load;
pub mod model;
pub mod parser;
pub mod ui;
