pub mod endpoints;
pub mod error;
pub mod payloads;
pub mod readings;
pub mod transport;
