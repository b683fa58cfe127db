//! Run external diagnostic commands
//!
//! Every probe shells out to some tool (`systemctl`, `radclient`, `curl`)
//! through the `CommandRunner` trait, so that tests can hand the probes
//! canned output instead of touching the host.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

/// One external command to run
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<Arg>,
    pub stdin: Option<String>,
}

/// A single argument, which may be hidden when the invocation is displayed
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Plain(String),
    Secret(String),
}

impl Arg {
    pub fn value(&self) -> &str {
        match self {
            Arg::Plain(v) | Arg::Secret(v) => v,
        }
    }
}

impl Invocation {
    pub fn new<S: Into<String>>(program: S) -> Invocation {
        Invocation {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Invocation {
        self.args.push(Arg::Plain(arg.into()));
        self
    }

    /// Add an argument that must never show up in logs
    pub fn secret_arg<S: Into<String>>(mut self, arg: S) -> Invocation {
        self.args.push(Arg::Secret(arg.into()));
        self
    }

    pub fn stdin<S: Into<String>>(mut self, input: S) -> Invocation {
        self.stdin = Some(input.into());
        self
    }

    /// The argument values, in order, secrets included
    pub fn argv(&self) -> Vec<&str> {
        self.args.iter().map(Arg::value).collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            match arg {
                Arg::Plain(v) => write!(f, " {}", v)?,
                Arg::Secret(_) => write!(f, " ****")?,
            }
        }
        Ok(())
    }
}

/// What a finished command left behind
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// Whether the command exited zero
    pub success: bool,
    /// stdout followed by stderr
    pub output: String,
}

/// The command couldn't be started, or we lost track of it
#[derive(Debug)]
pub struct SpawnError {
    pub program: String,
    pub source: io::Error,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unable to run {}: {}", self.program, self.source)
    }
}

impl Error for SpawnError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Something that can execute an `Invocation`
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, SpawnError>;
}

/// Runs commands on the local system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, SpawnError> {
        debug!(command = %invocation, "running");
        let spawn_err = |source| SpawnError {
            program: invocation.program.clone(),
            source,
        };

        let mut child = Command::new(&invocation.program)
            .args(invocation.argv())
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        if let (Some(input), Some(mut pipe)) = (&invocation.stdin, child.stdin.take()) {
            // pipe is dropped at the end of this block, closing the child's stdin
            if let Err(e) = pipe.write_all(input.as_bytes()) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(spawn_err(e));
            }
        }

        let finished = child.wait_with_output().map_err(spawn_err)?;
        let mut output = String::from_utf8_lossy(&finished.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&finished.stderr));
        trace!(command = %invocation, status = ?finished.status, %output, "finished");

        Ok(CommandOutput {
            success: finished.status.success(),
            output,
        })
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    //! A `CommandRunner` that never leaves the process

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;

    use super::{CommandOutput, CommandRunner, Invocation, SpawnError};

    /// Hands back canned output keyed by program name
    #[derive(Default)]
    pub(crate) struct FixtureRunner {
        outputs: HashMap<String, CommandOutput>,
        pub(crate) seen: RefCell<Vec<Invocation>>,
    }

    impl FixtureRunner {
        pub(crate) fn new() -> FixtureRunner {
            FixtureRunner::default()
        }

        pub(crate) fn ok(self, program: &str, output: &str) -> FixtureRunner {
            self.with(program, true, output)
        }

        pub(crate) fn failing(self, program: &str, output: &str) -> FixtureRunner {
            self.with(program, false, output)
        }

        fn with(mut self, program: &str, success: bool, output: &str) -> FixtureRunner {
            self.outputs.insert(
                program.to_owned(),
                CommandOutput {
                    success,
                    output: output.to_owned(),
                },
            );
            self
        }

        pub(crate) fn programs_run(&self) -> Vec<String> {
            self.seen.borrow().iter().map(|i| i.program.clone()).collect()
        }
    }

    impl CommandRunner for FixtureRunner {
        fn run(&self, invocation: &Invocation) -> Result<CommandOutput, SpawnError> {
            self.seen.borrow_mut().push(invocation.clone());
            self.outputs
                .get(&invocation.program)
                .cloned()
                .ok_or_else(|| SpawnError {
                    program: invocation.program.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
                })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_masks_secrets() {
        let inv = Invocation::new("radclient")
            .arg("-x")
            .arg("127.0.0.1:18121")
            .arg("status")
            .secret_arg("hunter2");
        assert_eq!(inv.to_string(), "radclient -x 127.0.0.1:18121 status ****");
        assert_eq!(inv.argv(), ["-x", "127.0.0.1:18121", "status", "hunter2"]);
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_combines_stdout_and_stderr() {
        let inv = Invocation::new("sh").arg("-c").arg("echo out; echo err 1>&2");
        let result = SystemRunner.run(&inv).unwrap();
        assert!(result.success);
        assert_eq!(result.output, "out\nerr\n");
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_feeds_stdin_and_reports_failure() {
        let inv = Invocation::new("sh")
            .arg("-c")
            .arg("cat; exit 3")
            .stdin("Message-Authenticator = 0x00");
        let result = SystemRunner.run(&inv).unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "Message-Authenticator = 0x00");
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let inv = Invocation::new("/nonexistent/definitely-not-a-binary");
        let err = SystemRunner.run(&inv).unwrap_err();
        assert_eq!(err.program, "/nonexistent/definitely-not-a-binary");
        assert!(err.to_string().starts_with("Unable to run /nonexistent/"));
    }
}
