//! CLI library components for the personal record validator.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
