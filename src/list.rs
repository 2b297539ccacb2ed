//! List the built-in studies.

use clap::clap_app;

use crate::studies::{study, STUDIES};

pub fn cli_options() -> clap::App<'static, 'static> {
    clap_app! { list =>
        (about: "List the built-in studies.")
        (@setting DisableVersion)
    }
}

pub fn run(_sub_m: &clap::ArgMatches<'_>) -> Result<(), failure::Error> {
    for name in STUDIES {
        println!("{:<12} {}", name, study(name)?.name);
    }

    Ok(())
}
