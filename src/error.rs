//! Why a check run failed
//!
//! The `Display` of every error here is the reason reported to the agent on
//! the `status` line, so it is written for an operator to read.

use std::fmt;

use derive_more::From;

pub use crate::command::SpawnError;

/// Every failure a check can hit
///
/// Each stage returns its own error type, and they all convert into this.
#[derive(Debug, From)]
pub enum CheckError {
    /// The flags we were given can't be used
    Config(ConfigError),
    /// The service manager says the service isn't up
    Service(ServiceError),
    /// The diagnostic tool ran but didn't get an answer
    Probe(ProbeError),
    /// The diagnostic tool couldn't be run at all
    Spawn(SpawnError),
    /// The tool answered with something we don't understand
    Format(FormatError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::CheckError::*;
        match self {
            Config(e) => write!(f, "{}", e),
            Service(e) => write!(f, "{}", e),
            Probe(e) => write!(f, "{}", e),
            Spawn(e) => write!(f, "{}", e),
            Format(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CheckError {}

#[derive(Debug, PartialEq)]
pub struct ConfigError {
    pub msg: String,
}

impl ConfigError {
    pub fn new<S: Into<String>>(msg: S) -> ConfigError {
        ConfigError { msg: msg.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

#[derive(Debug, PartialEq)]
pub enum ServiceError {
    /// `systemctl status` exited nonzero
    NotRunning { label: String },
    /// The Active: line reports something other than `active (running)`
    Inactive { label: String, line: String },
    /// There was no Active: line at all
    NoActiveLine { label: String },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ServiceError::*;
        match self {
            NotRunning { label } => write!(f, "{} service is not running.", label),
            Inactive { label, line } => write!(f, "{} service not running: {}", label, line),
            NoActiveLine { label } => write!(
                f,
                "{} service status did not include an Active: line",
                label
            ),
        }
    }
}

/// The tool failed or reported that the target didn't answer
///
/// Carries the full tool output so whoever gets paged can see what happened.
#[derive(Debug, PartialEq)]
pub struct ProbeError {
    /// What we were trying to talk to, e.g. "Nginx status server"
    pub server: String,
    /// Where it was supposed to be
    pub target: String,
    pub output: String,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Could not connect to {} @ {}.\n\nCommand Result:\n\n{}",
            self.server, self.target, self.output
        )
    }
}

#[derive(Debug, PartialEq)]
pub enum FormatError {
    /// Fewer statistics lines than we need
    MissingStats {
        token: &'static str,
        expected: usize,
        found: usize,
    },
    /// The stub-status page doesn't have the expected layout
    StubStatus,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormatError::MissingStats {
                token,
                expected,
                found,
            } => write!(
                f,
                "expected {} {} statistics but found {}",
                expected, token, found
            ),
            FormatError::StubStatus => write!(f, "unexpected stub-status format."),
        }
    }
}
