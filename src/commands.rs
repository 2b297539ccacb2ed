//! Print the launch commands of a study.

use std::io::Write;

use clap::{clap_app, Arg};

use failure::ResultExt;

use crate::{cli, config::ExperimentConfig};

pub fn cli_options() -> clap::App<'static, 'static> {
    fn is_usize(s: String) -> Result<(), String> {
        s.as_str()
            .parse::<usize>()
            .map(|_| ())
            .map_err(|e| format!("{:?}", e))
    }

    let app = clap_app! { commands =>
        (about: "Print the launch command for each process count of a study.")
        (@setting ArgRequiredElseHelp)
        (@setting DisableVersion)
        (@arg NUMPES: --numpes +takes_value {is_usize}
         "Only print the command for this many processes (e.g. 27)")
        (@arg JSON: --json
         "Print the commands as a JSON object keyed by process count")
    };

    let app = app.arg(
        Arg::with_name("NO_HEADER")
            .long("no-header")
            .conflicts_with("JSON")
            .help("Do not print the run configuration before the commands"),
    );

    cli::study::add_cli_options(app)
}

pub fn run(sub_m: &clap::ArgMatches<'_>) -> Result<(), failure::Error> {
    let desc = cli::study::parse_cli_options(sub_m)?;
    let numpes = sub_m
        .value_of("NUMPES")
        .map(|n| n.parse::<usize>().unwrap());
    let json = sub_m.is_present("JSON");
    let header = !json && !sub_m.is_present("NO_HEADER");

    let cfg = ExperimentConfig::new(desc)?;

    let mut table = cfg.command_table();
    if let Some(numpes) = numpes {
        let cmd = cfg.runcmd(numpes)?.to_string();
        table.clear();
        table.insert(numpes, cmd);
    }

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    if json {
        let serialized =
            serde_json::to_string_pretty(&table).context("serializing command table")?;
        writeln!(stdout, "{}", serialized)?;
    } else {
        if header {
            cfg.emit_config(&mut stdout)?;
        }
        for cmd in table.values() {
            writeln!(stdout, "{}", cmd)?;
        }
    }

    Ok(())
}
