//! Print the run configuration of a study as comment lines.

use clap::clap_app;

use crate::{cli, config::ExperimentConfig};

pub fn cli_options() -> clap::App<'static, 'static> {
    let app = clap_app! { describe =>
        (about: "Print the run configuration of a study as `#` comments.")
        (@setting ArgRequiredElseHelp)
        (@setting DisableVersion)
    };

    cli::study::add_cli_options(app)
}

pub fn run(sub_m: &clap::ArgMatches<'_>) -> Result<(), failure::Error> {
    let desc = cli::study::parse_cli_options(sub_m)?;
    let cfg = ExperimentConfig::new(desc)?;

    let stdout = std::io::stdout();
    cfg.emit_config(&mut stdout.lock())?;

    Ok(())
}
