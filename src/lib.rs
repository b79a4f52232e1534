pub mod commands;
pub mod config;
pub mod formatting;
pub mod selection;
pub mod teams;
pub mod tui;
