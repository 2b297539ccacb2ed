//! Errors that come from a bad run configuration, as opposed to a bug or an I/O failure.

use failure::Fail;

/// The exit status used when the run configuration is unusable (`EX_CONFIG` from `sysexits.h`).
pub const EX_CONFIG: i32 = 78;

/// Something is wrong with the configuration we were asked to expand.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The executable path is sourced from an environment variable that is not set.
    #[fail(display = "{} not set. Cannot continue.", var)]
    MissingEnvVar { var: String },

    /// No built-in study has this name.
    #[fail(display = "Unknown study \"{}\". Try `runconfigs list`.", name)]
    UnknownStudy { name: String },

    /// A descriptor file could not be read or parsed.
    #[fail(display = "Bad config file {}: {}", path, reason)]
    BadConfigFile { path: String, reason: String },

    /// A single process count was requested, but the study does not generate it.
    #[fail(display = "The study has no run with {} processes", numpes)]
    NoSuchProcessCount { numpes: usize },

    /// The process-count policy generates no counts, or counts too large to represent.
    #[fail(display = "Bad process counts {:?}: {}", policy, reason)]
    BadProcessCounts { policy: String, reason: String },

    /// The application needs a process grid, but this count is not a perfect cube.
    #[fail(display = "{} processes do not form a cubic grid", numpes)]
    NotCubic { numpes: usize },

    /// The application options do not fit the values they are filled with.
    #[fail(display = "Bad application options \"{}\": {}", template, reason)]
    BadOptionsTemplate { template: String, reason: String },
}
