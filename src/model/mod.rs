pub mod data;
pub mod log;
pub mod school;

pub use data::SolarData;
pub use log::{EnergyLog, Measures};
pub use school::School;
