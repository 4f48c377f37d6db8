pub mod forecast;
pub mod metrics;
pub mod observation;
pub mod station;
