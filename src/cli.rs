//! Some routines for adding common CLI options in a consistent, less boilerplatey way.

/// CLI options for choosing which study to expand.
pub mod study {
    use clap::{App, Arg, ArgGroup, ArgMatches};

    use crate::{descriptor::ExperimentDescriptor, error::ConfigError, studies};

    pub fn add_cli_options<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(
            Arg::with_name("STUDY")
                .takes_value(true)
                .possible_values(studies::STUDIES)
                .help("The name of a built-in study (see `runconfigs list`)"),
        )
        .arg(
            Arg::with_name("CONFIG")
                .long("config")
                .takes_value(true)
                .help("A JSON file describing the study, instead of a built-in one"),
        )
        .group(
            ArgGroup::with_name("STUDY_SOURCE")
                .arg("STUDY")
                .arg("CONFIG")
                .required(true),
        )
    }

    /// Parse the values added by `add_cli_options` and return the chosen descriptor.
    pub fn parse_cli_options(sub_m: &ArgMatches<'_>) -> Result<ExperimentDescriptor, ConfigError> {
        match (sub_m.value_of("STUDY"), sub_m.value_of("CONFIG")) {
            (Some(name), None) => studies::study(name),
            (None, Some(path)) => ExperimentDescriptor::load(path),
            _ => unreachable!(),
        }
    }

    #[cfg(test)]
    mod test {
        use super::*;

        fn parse(args: &[&str]) -> Result<ExperimentDescriptor, ConfigError> {
            let matches = add_cli_options(App::new("test"))
                .get_matches_from_safe(args)
                .unwrap();
            parse_cli_options(&matches)
        }

        #[test]
        fn builtin() {
            let desc = parse(&["test", "osu_mbw_mr"]).unwrap();
            assert_eq!(desc, studies::osu_mbw_mr());
        }

        #[test]
        fn config_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            std::io::Write::write_all(
                &mut file,
                br#"{"name": "n", "arch": "a", "mpi": "m", "app": "p",
                     "app_exec": "/bin/app", "numpes": {"cubed": {"max_root": 1}}}"#,
            )
            .unwrap();

            let path = file.path().to_str().unwrap();
            let desc = parse(&["test", "--config", path]).unwrap();
            assert_eq!(desc.name, "n");
        }

        #[test]
        fn needs_exactly_one_source() {
            let app = || add_cli_options(App::new("test"));

            assert!(app().get_matches_from_safe(&["test"]).is_err());
            assert!(app()
                .get_matches_from_safe(&["test", "hpcg_weak", "--config", "x.json"])
                .is_err());
            assert!(app().get_matches_from_safe(&["test", "hpl"]).is_err());
        }
    }
}
