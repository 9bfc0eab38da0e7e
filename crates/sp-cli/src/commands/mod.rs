//! CLI subcommand implementations.

pub mod interactive;
pub mod plan;
pub mod render;
pub mod util;
