pub mod config;
pub mod error;
pub mod quality;
pub mod telemetry;
