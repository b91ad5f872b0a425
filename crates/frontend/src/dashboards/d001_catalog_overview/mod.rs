pub mod metrics;
pub mod service;
pub mod ui;
