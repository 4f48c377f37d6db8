pub mod converter;
pub mod unit_system;
