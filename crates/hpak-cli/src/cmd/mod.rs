//! CLI subcommand implementations.

pub mod check;
pub mod create;
pub mod describe;
pub mod export;
pub mod new;
pub mod package;
