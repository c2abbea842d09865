pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_DATA: &str = "data";
pub const ARG_CLASS: &str = "class";
pub const ARG_PASSWORD: &str = "password";

pub const CMD_HASH: &str = "hash";
pub const CMD_CLASSES: &str = "classes";
pub const CMD_LOOKUP: &str = "lookup";
pub const CMD_CHECK: &str = "check";

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Password to digest; read from stdin when omitted")
        .long_help(
            "Password to digest. Prefer stdin: arguments are visible to other users through the process list.",
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("gradebook")
        .about("Roster tooling for the grade lookup portal")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_DATA)
                .short('d')
                .long("data")
                .help("Data directory or published base URL holding classes.json")
                .default_value(grade_core::DEFAULT_DATA_BASE)
                .env("GRADEBOOK_DATA")
                .global(true),
        )
        .subcommand(
            Command::new(CMD_HASH)
                .about("Print the passwordHash value for a password")
                .arg(password_arg()),
        )
        .subcommand(Command::new(CMD_CLASSES).about("List the classes in the manifest"))
        .subcommand(
            Command::new(CMD_LOOKUP)
                .about("Look up grades exactly as the page does")
                .arg(
                    Arg::new(ARG_CLASS)
                        .short('c')
                        .long("class")
                        .help("Roster file as listed in the manifest, e.g. algebra1.json")
                        .required(true),
                )
                .arg(password_arg()),
        )
        .subcommand(
            Command::new(CMD_CHECK)
                .about("Audit the manifest and every roster for publishing problems"),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "gradebook");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Roster tooling for the grade lookup portal".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_lookup_args() {
        temp_env::with_vars([("GRADEBOOK_DATA", None::<String>)], || {
            let matches = new().get_matches_from(vec![
                "gradebook",
                "lookup",
                "--class",
                "algebra1.json",
                "--password",
                "secret",
            ]);

            assert_eq!(
                matches.get_one::<String>(ARG_DATA).map(String::as_str),
                Some("data")
            );
            let sub = matches.subcommand_matches(CMD_LOOKUP).unwrap();
            assert_eq!(
                sub.get_one::<String>(ARG_CLASS).map(String::as_str),
                Some("algebra1.json")
            );
            assert_eq!(
                sub.get_one::<String>(ARG_PASSWORD).map(String::as_str),
                Some("secret")
            );
        });
    }

    #[test]
    fn test_lookup_requires_class() {
        let result = new().try_get_matches_from(vec!["gradebook", "lookup"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_data_after_subcommand() {
        let matches =
            new().get_matches_from(vec!["gradebook", "check", "--data", "https://x.test/data"]);
        assert_eq!(
            matches.get_one::<String>(ARG_DATA).map(String::as_str),
            Some("https://x.test/data")
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("GRADEBOOK_DATA", Some("/srv/notas/data")),
                ("GRADEBOOK_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["gradebook", "classes"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_DATA).map(String::as_str),
                    Some("/srv/notas/data")
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("GRADEBOOK_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["gradebook", "check"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5usize {
            temp_env::with_vars([("GRADEBOOK_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["gradebook".to_string(), "check".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
