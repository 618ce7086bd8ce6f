//! Command-line interface: the interactive game plus evaluation and analysis tools

pub mod commands;
pub mod config;
pub mod output;
pub mod prompt;
