pub mod bounty;
pub mod catalog;
pub mod config;
pub mod error;
pub mod report;
pub mod telemetry;
