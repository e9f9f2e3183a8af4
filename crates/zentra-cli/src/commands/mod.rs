//! Command handlers, one module per subcommand.
//!
//! `init` and `generate` return the status code of their successful end
//! state; the other commands return `0`.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
