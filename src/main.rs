//! This program expands MPI benchmark studies into launch commands. Which routine is chosen by
//! passing different command line arguments.

use runconfigs::error::{ConfigError, EX_CONFIG};

fn run() -> Result<(), failure::Error> {
    let matches = clap::App::new("runconfigs")
        .about(
            "This program expands MPI benchmark studies into the launch command for each process \
             count. It does not run anything.",
        )
        .subcommand(runconfigs::list::cli_options())
        .subcommand(runconfigs::describe::cli_options())
        .subcommand(runconfigs::commands::cli_options())
        .setting(clap::AppSettings::SubcommandRequiredElseHelp)
        .setting(clap::AppSettings::DisableVersion)
        .get_matches();

    match matches.subcommand() {
        ("list", Some(sub_m)) => runconfigs::list::run(sub_m),
        ("describe", Some(sub_m)) => runconfigs::describe::run(sub_m),
        ("commands", Some(sub_m)) => runconfigs::commands::run(sub_m),

        _ => {
            unreachable!();
        }
    }
}

fn main() {
    use console::style;

    env_logger::init();

    if let Err(err) = run() {
        // A bad configuration is the user's to fix, so just say what is wrong.
        if let Some(cfg_err) = err.downcast_ref::<ConfigError>() {
            log::debug!("configuration error: {:?}", cfg_err);
            eprintln!("{} {}", style("Configuration error:").red().bold(), cfg_err);
            std::process::exit(EX_CONFIG);
        }

        const MESSAGE: &str = r#"== ERROR ==================================================================================
`runconfigs` encountered an error. Setting the RUST_LOG=debug environment variable may offer
clues.
"#;

        eprintln!("{}", style(MESSAGE).red().bold());

        // Print error and backtrace
        eprintln!(
            "`runconfigs` encountered the following error:\n{}\n{}",
            err.as_fail(),
            err.backtrace(),
        );

        std::process::exit(101);
    }
}
