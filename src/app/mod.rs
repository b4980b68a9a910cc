pub mod api;
pub mod cli;
pub mod commands;
pub mod configuration;
