//! Launch commands.

use std::fmt;

use serde::Serialize;

use crate::error::ConfigError;

/// One launch of the application with a fixed number of processes.
///
/// The `Display` impl produces the command line exactly as the study scripts always have:
/// `<launcher> -n <numpes> <launcher_opts> <exec> <exec_opts>`. Empty option strings are kept as
/// empty slots, so `Some("")` launcher options leave a double space and empty application options
/// leave a trailing space. If `launcher_opts` is `None`, its slot is left out entirely. Use
/// `args` to get the command without any of that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchCommand {
    pub launcher: String,
    pub numpes: usize,
    pub launcher_opts: Option<String>,
    pub exec: String,
    /// The application options with any placeholders already filled in.
    pub exec_opts: String,
}

impl LaunchCommand {
    /// The command as a list of arguments, starting with the launcher. Options are split on
    /// whitespace; no argument is ever empty.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.launcher.clone(),
            "-n".to_owned(),
            self.numpes.to_string(),
        ];

        if let Some(launcher_opts) = &self.launcher_opts {
            args.extend(launcher_opts.split_whitespace().map(str::to_owned));
        }

        args.push(self.exec.clone());
        args.extend(self.exec_opts.split_whitespace().map(str::to_owned));

        args
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -n {} ", self.launcher, self.numpes)?;

        if let Some(launcher_opts) = &self.launcher_opts {
            write!(f, "{} ", launcher_opts)?;
        }

        write!(f, "{} {}", self.exec, self.exec_opts)
    }
}

/// Fill the `{}` placeholders in `template` with `values`, in order, the way Python's
/// `str.format` does for positional arguments: `{{` and `}}` become literal braces, leftover
/// values are ignored, and a placeholder with no value left is an error. Named or indexed fields
/// (`{0}`, `{x}`) are not supported.
pub fn fill_placeholders(template: &str, values: &[usize]) -> Result<String, ConfigError> {
    let bad = |reason: &str| ConfigError::BadOptionsTemplate {
        template: template.into(),
        reason: reason.into(),
    };

    let mut out = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek().copied()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                out.push(c);
            }
            ('{', Some('}')) => {
                chars.next();
                let value = values.next().ok_or_else(|| bad("more placeholders than values"))?;
                out.push_str(&value.to_string());
            }
            ('{', _) => return Err(bad("only `{}` placeholders are supported")),
            ('}', _) => return Err(bad("unmatched `}`")),
            (c, _) => out.push(c),
        }
    }

    Ok(out)
}
