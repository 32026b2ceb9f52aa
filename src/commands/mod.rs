//! CLI commands for mazewalk

pub mod battery;
pub mod dispatch;
pub mod generate;
pub mod json_builders;
pub mod path;
pub mod settings;
