//! CLI subcommands.

pub mod authkey;
pub mod config;
pub mod quorum;
