//! A library for expanding MPI benchmark studies into run configurations: the process counts to
//! sweep over and the launch command for each one.
//!
//! A study is described by a single `ExperimentDescriptor`. `ExperimentConfig::new` expands it
//! into a table of `LaunchCommand`s, and `ExperimentConfig::emit_config` writes the description
//! as `#` comments so it can head a job script or a results file.

pub mod cli;
pub mod command;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod numpes;
pub mod studies;

pub mod commands;
pub mod describe;
pub mod list;

pub use crate::command::LaunchCommand;
pub use crate::config::ExperimentConfig;
pub use crate::descriptor::{AppExec, ExperimentDescriptor};
pub use crate::error::ConfigError;
pub use crate::numpes::ProcessCountPolicy;
