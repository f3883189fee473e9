mod draft;
mod irrigation;
mod season;
mod seed_treatment;
mod weather;

pub use draft::{Draft, FertilizerApplication, IrrigationEntry};
pub use irrigation::{IrrigationMethod, WaterSource};
pub use season::Season;
pub use seed_treatment::SeedTreatment;
pub use weather::WeatherCondition;
