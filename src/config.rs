//! Expanding a study descriptor into the commands to run.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::{
    command::{fill_placeholders, LaunchCommand},
    descriptor::ExperimentDescriptor,
    error::ConfigError,
    numpes::proc_grid,
};

/// The first line written by `emit_description`.
pub const CONFIG_HEADER: &str = "# Run Configuration";

/// A fully expanded study. Everything is derived in `new`; nothing changes afterwards.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    desc: ExperimentDescriptor,
    /// The resolved executable path.
    app_exec: String,
    numpes: Vec<usize>,
    runcmds: BTreeMap<usize, LaunchCommand>,
}

impl ExperimentConfig {
    /// Resolve the executable path and generate the process counts and commands.
    ///
    /// Fails if the executable path comes from an environment variable that is not set, or if
    /// the descriptor's process counts or options cannot be expanded.
    pub fn new(desc: ExperimentDescriptor) -> Result<Self, ConfigError> {
        let app_exec = desc.app_exec.resolve()?;
        log::debug!("{}: using executable {}", desc.name, app_exec);

        let numpes = desc.numpes.gen_numpes()?;
        let runcmds = gen_runcmds(&desc, &app_exec, &numpes)?;
        log::debug!("{}: generated {} run commands", desc.name, runcmds.len());

        Ok(ExperimentConfig {
            desc,
            app_exec,
            numpes,
            runcmds,
        })
    }

    pub fn descriptor(&self) -> &ExperimentDescriptor {
        &self.desc
    }

    pub fn app_exec(&self) -> &str {
        &self.app_exec
    }

    /// The process counts, in increasing order.
    pub fn numpes(&self) -> &[usize] {
        &self.numpes
    }

    /// The launch command for each process count.
    pub fn runcmds(&self) -> &BTreeMap<usize, LaunchCommand> {
        &self.runcmds
    }

    /// The launch command for `numpes` processes.
    pub fn runcmd(&self, numpes: usize) -> Result<&LaunchCommand, ConfigError> {
        self.runcmds
            .get(&numpes)
            .ok_or(ConfigError::NoSuchProcessCount { numpes })
    }

    /// The rendered command line for each process count.
    pub fn command_table(&self) -> BTreeMap<usize, String> {
        self.runcmds
            .iter()
            .map(|(&n, cmd)| (n, cmd.to_string()))
            .collect()
    }

    /// Write the run configuration as comment lines.
    pub fn emit_config<W: Write>(&self, to: &mut W) -> io::Result<()> {
        emit_description(&self.desc.fields(&self.app_exec), to)
    }
}

fn gen_runcmds(
    desc: &ExperimentDescriptor,
    app_exec: &str,
    numpes: &[usize],
) -> Result<BTreeMap<usize, LaunchCommand>, ConfigError> {
    numpes
        .iter()
        .map(|&n| {
            let exec_opts = if desc.proc_grid {
                let (x, y, z) = proc_grid(n).ok_or(ConfigError::NotCubic { numpes: n })?;
                fill_placeholders(&desc.app_exec_opts, &[x, y, z])?
            } else {
                desc.app_exec_opts.clone()
            };

            let cmd = LaunchCommand {
                launcher: desc.launcher.clone(),
                numpes: n,
                launcher_opts: desc.mpi_exec_opts.clone(),
                exec: app_exec.to_owned(),
                exec_opts,
            };

            Ok((n, cmd))
        })
        .collect()
}

/// Write `# Run Configuration` followed by one `# <key>: <value>` line per field, in key order.
pub fn emit_description<W: Write>(fields: &BTreeMap<String, String>, to: &mut W) -> io::Result<()> {
    writeln!(to, "{}", CONFIG_HEADER)?;
    for (k, v) in fields.iter() {
        writeln!(to, "# {}: {}", k, v)?;
    }
    Ok(())
}
