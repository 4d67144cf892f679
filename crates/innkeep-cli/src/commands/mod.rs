//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod demo;
pub mod quote;
