//! Argument handling shared by the check binaries
//!
//! Bad flags are a check failure like any other: the agent still gets a
//! single `status` line and exit code 1. Only `--help` and `--version` get
//! clap's usual treatment.

use std::ffi::OsString;

use lazy_static::lazy_static;
use regex::Regex;
use structopt::clap::{self, ErrorKind};
use structopt::StructOpt;

use crate::error::ConfigError;

lazy_static! {
    /// Terminal colour codes clap adds when stderr is a tty
    static ref ANSI_ESCAPE: Regex = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
}

/// Parse `argv`, exiting only for `--help` and `--version`
pub fn parse_args<T, I>(argv: I) -> Result<T, ConfigError>
where
    T: StructOpt,
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    T::from_iter_safe(argv).map_err(|e| match e.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
        _ => config_error(&e),
    })
}

/// Squash a clap error down to the one line that says what was wrong
pub fn config_error(e: &clap::Error) -> ConfigError {
    let plain = ANSI_ESCAPE.replace_all(&e.message, "");
    let first = plain.lines().next().unwrap_or("invalid arguments");
    let first = first.trim_start_matches("error:").trim();
    ConfigError::new(if first.is_empty() { "invalid arguments" } else { first })
}

/// A required string flag, treating an empty value as missing
pub fn required(value: &Option<String>, msg: &str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(ConfigError::new(msg)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(StructOpt, Debug)]
    struct Args {
        #[structopt(short = "p", long = "port", default_value = "18121")]
        port: u16,
        #[structopt(short = "s", long = "secret")]
        secret: Option<String>,
    }

    #[test]
    fn good_args_parse() {
        let args: Args = parse_args(vec!["check", "-p", "1812"]).unwrap();
        assert_eq!(args.port, 1812);
        assert_eq!(args.secret, None);
    }

    #[test]
    fn bad_args_are_config_errors() {
        let err = parse_args::<Args, _>(vec!["check", "--bogus"]).unwrap_err();
        assert!(!err.msg.starts_with("error:"));
        assert!(err.msg.contains("--bogus"));
        assert!(!err.msg.contains('\n'));

        let err = parse_args::<Args, _>(vec!["check", "--port", "many"]).unwrap_err();
        assert!(err.msg.contains("port"));
    }

    #[test]
    fn colour_codes_are_stripped() {
        let e = clap::Error {
            message: "\x1b[1;31merror:\x1b[0m Found argument '\x1b[33m--bogus\x1b[0m' \
                      which wasn't expected\n\nUSAGE:\n    check [OPTIONS]"
                .to_owned(),
            kind: ErrorKind::UnknownArgument,
            info: None,
        };
        assert_eq!(
            config_error(&e).msg,
            "Found argument '--bogus' which wasn't expected"
        );
    }

    #[test]
    fn empty_required_values_are_missing() {
        let msg = "You must specify a secret";
        assert_eq!(required(&None, msg), Err(ConfigError::new(msg)));
        assert_eq!(required(&Some(String::new()), msg), Err(ConfigError::new(msg)));
        assert_eq!(required(&Some("s3cret".into()), msg), Ok("s3cret".to_owned()));
    }
}
