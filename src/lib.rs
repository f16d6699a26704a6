//! Terminal console for a fleet service: drivers, trucks and the daily
//! assignments that pair them.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod shutdown;
pub mod store;
pub mod ui;
pub mod worker;
