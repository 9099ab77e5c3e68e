//! One module per subcommand.

pub mod catalog;
pub mod completions;
pub mod config;
pub mod create;
pub mod init;
pub mod merge;
