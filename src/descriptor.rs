//! The static description of a study: what to run and how to label it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, numpes::ProcessCountPolicy};

/// The launcher used when a descriptor does not name one.
pub const DEFAULT_LAUNCHER: &str = "mpirun";

/// Where the application executable lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppExec {
    /// A literal path (e.g. `/opt/hpcg/bin/xhpcg`).
    Path(String),

    /// The path is the value of an environment variable (e.g. `LULESH_EXEC`).
    Env { env: String },
}

impl AppExec {
    /// Get the executable path. For `Env`, the variable is read now; if it is unset, this is a
    /// `ConfigError::MissingEnvVar`. No default path is ever substituted.
    pub fn resolve(&self) -> Result<String, ConfigError> {
        match self {
            AppExec::Path(path) => Ok(path.clone()),
            AppExec::Env { env } => {
                std::env::var(env).map_err(|_| ConfigError::MissingEnvVar { var: env.clone() })
            }
        }
    }
}

/// Describes one study. This is the only thing that differs between studies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentDescriptor {
    pub name: String,
    pub arch: String,
    /// Which MPI implementation. Only a label; it does not change the launch command.
    pub mpi: String,
    pub app: String,

    pub app_exec: AppExec,
    /// Options for the application. If `proc_grid` is set, the first three `{}` are replaced
    /// with the x, y, and z dimensions of the process grid.
    #[serde(default)]
    pub app_exec_opts: String,

    /// Extra flags for the launcher. `None` and `Some("")` render differently; see
    /// `LaunchCommand`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpi_exec_opts: Option<String>,

    #[serde(default = "default_launcher")]
    pub launcher: String,
    pub numpes: ProcessCountPolicy,
    #[serde(default)]
    pub proc_grid: bool,
}

fn default_launcher() -> String {
    DEFAULT_LAUNCHER.into()
}

impl ExperimentDescriptor {
    /// Read a descriptor from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bad_file = |reason: String| ConfigError::BadConfigFile {
            path: path.display().to_string(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| bad_file(e.to_string()))?;
        let desc = serde_json::from_str(&contents).map_err(|e| bad_file(e.to_string()))?;

        log::debug!("Loaded study descriptor from {}", path.display());

        Ok(desc)
    }

    /// The fields that describe the run, keyed by name, with the executable path already
    /// resolved. The launcher, process-count policy, and grid flag are not included.
    pub fn fields(&self, app_exec: &str) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();

        fields.insert("name".into(), self.name.clone());
        fields.insert("arch".into(), self.arch.clone());
        fields.insert("mpi".into(), self.mpi.clone());
        fields.insert("app".into(), self.app.clone());
        fields.insert("app_exec".into(), app_exec.into());
        fields.insert("app_exec_opts".into(), self.app_exec_opts.clone());

        if let Some(mpi_exec_opts) = &self.mpi_exec_opts {
            fields.insert("mpi_exec_opts".into(), mpi_exec_opts.clone());
        }

        fields
    }
}
