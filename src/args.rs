use lexopt::{Arg, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file given with `--config`
    pub(crate) config: Option<PathBuf>,

    /// Set by `--no-config`: don't read any configuration file
    pub(crate) no_config: bool,

    /// Log file given with `--log-file`, overriding the configuration
    pub(crate) log_file: Option<PathBuf>,
}

impl Action {
    fn from_parser(mut parser: Parser) -> Result<Action, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("no-config") => args.no_config = true,
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Action::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Action::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        if args.no_config && args.config.is_some() {
            return Err(lexopt::Error::Custom(
                "--config and --no-config are mutually exclusive".into(),
            ));
        }
        Ok(Action::Run(args))
    }

    pub(crate) fn from_args<I>(args: I) -> Result<Action, lexopt::Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Action::from_parser(Parser::from_iter(args))
    }
}

pub(crate) const USAGE: &str = "\
Usage: gridsnake [options]

Play snake on a grid in your terminal

Options:
  -c, --config <PATH>    Read configuration from the given file
      --no-config        Do not read any configuration file
      --log-file <PATH>  Write log messages to the given file
  -h, --help             Show this help and exit
  -V, --version          Show the program version and exit
";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn no_args() {
        assert_eq!(
            Action::from_args(["gridsnake"]).unwrap(),
            Action::Run(Arguments::default())
        );
    }

    #[rstest]
    #[case(&["gridsnake", "--config", "cfg.toml"])]
    #[case(&["gridsnake", "-c", "cfg.toml"])]
    #[case(&["gridsnake", "--config=cfg.toml"])]
    fn config(#[case] argv: &[&str]) {
        assert_eq!(
            Action::from_args(argv.iter().copied()).unwrap(),
            Action::Run(Arguments {
                config: Some(PathBuf::from("cfg.toml")),
                ..Arguments::default()
            })
        );
    }

    #[test]
    fn no_config_and_log_file() {
        assert_eq!(
            Action::from_args(["gridsnake", "--no-config", "--log-file", "out.log"]).unwrap(),
            Action::Run(Arguments {
                config: None,
                no_config: true,
                log_file: Some(PathBuf::from("out.log")),
            })
        );
    }

    #[rstest]
    #[case(&["gridsnake", "--help"], Action::Help)]
    #[case(&["gridsnake", "-h", "--bogus"], Action::Help)]
    #[case(&["gridsnake", "-V"], Action::Version)]
    fn info(#[case] argv: &[&str], #[case] cmd: Action) {
        assert_eq!(Action::from_args(argv.iter().copied()).unwrap(), cmd);
    }

    #[rstest]
    #[case(&["gridsnake", "--bogus"])]
    #[case(&["gridsnake", "extra"])]
    #[case(&["gridsnake", "--config"])]
    #[case(&["gridsnake", "--no-config", "--config", "x.toml"])]
    fn errors(#[case] argv: &[&str]) {
        assert!(Action::from_args(argv.iter().copied()).is_err());
    }
}
