//! Configuration for the Atlas world generator.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line. Unknown fields are ignored and missing ones take their
//! defaults, so files written by other versions still load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE, Config, DebugConfig, SaveConfig, WalkConfig, WorldConfig, default_config_dir,
};
pub use error::ConfigError;
