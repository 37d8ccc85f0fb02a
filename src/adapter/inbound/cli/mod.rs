//! CLI module graph.

pub mod check;
pub mod command;
pub mod handle;
pub mod output;
pub mod paths;
