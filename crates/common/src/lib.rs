//! Shared building blocks for the customers workspace: response types,
//! logging setup and the Prometheus registry helpers.

pub mod types;
pub mod utils;
pub mod metrics;
