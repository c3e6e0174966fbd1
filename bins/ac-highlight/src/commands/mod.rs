//! CLI commands

pub mod classify;
pub mod render;
