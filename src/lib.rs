//! Shared configuration and tier metadata for the benchmark plotting tools.

pub mod config;
pub mod tier;

pub use config::PlotsConfig;
pub use tier::Tier;
