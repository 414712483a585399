//! CLI library for testing purposes

pub mod logging;
pub mod resolve;
pub mod stats;
pub mod view;
