//! nginx statistics from the `stub_status` page
//!
//! The page looks like this:
//!
//! ```plain
//! Active connections: 291
//! server accepts handled requests
//!  16630948 16630948 31070465
//! Reading: 6 Writing: 179 Waiting: 106
//! ```

use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{trace, warn};

use crate::check::StatsProbe;
use crate::command::{CommandRunner, Invocation};
use crate::error::{CheckError, FormatError, ProbeError};
use crate::lines::{coerce_int, split_field};
use crate::metrics::MetricSet;

pub const DEFAULT_PATH: &str = "http://127.0.0.1/nginx_status";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const COUNTER_HEADER: &str = "server accepts handled requests";

lazy_static! {
    static ref CONNECTION_STATES: Regex =
        Regex::new(r"Reading: (\d+) Writing: (\d+) Waiting: (\d+)").unwrap();
}

/// Where the stub_status page is and how long to wait for it
#[derive(Debug, Clone, PartialEq)]
pub struct StubStatus {
    pub path: String,
    pub timeout: Duration,
}

impl StubStatus {
    pub fn new<S: Into<String>>(path: S) -> StubStatus {
        StubStatus {
            path: path.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new("curl")
            .arg("-s")
            .arg("--max-time")
            .arg(self.timeout.as_secs().to_string())
            .arg(self.path.clone())
    }
}

impl StatsProbe for StubStatus {
    fn collect(
        &self,
        runner: &dyn CommandRunner,
        metrics: MetricSet,
    ) -> Result<MetricSet, CheckError> {
        let result = runner.run(&self.invocation())?;
        if !result.success || !result.output.contains("Active connections:") {
            return Err(ProbeError {
                server: "Nginx status server".into(),
                target: self.path.clone(),
                output: result.output,
            }
            .into());
        }
        trace!(body = %result.output, "stub_status answered");
        Ok(parse_stub_status(&result.output, metrics)?)
    }
}

fn unexpected(what: &str) -> FormatError {
    warn!("unexpected stub_status page: {}", what);
    FormatError::StubStatus
}

/// Record connection and request counters from a stub_status page
pub fn parse_stub_status(body: &str, mut metrics: MetricSet) -> Result<MetricSet, FormatError> {
    let mut lines = body
        .lines()
        .skip_while(|line| !line.contains("Active connection"));

    let connections = lines
        .next()
        .ok_or_else(|| unexpected("no Active connections line"))?;
    metrics.record("connections", split_field(connections, ":").int());

    let mut lines = lines.filter(|line| !line.trim().is_empty());

    let counters = match lines.next() {
        Some(line) if line.trim() == COUNTER_HEADER => lines.next(),
        other => other,
    }
    .ok_or_else(|| unexpected("no accepts/handled/requests line"))?;
    let counters: Vec<&str> = counters.split_whitespace().collect();
    if counters.len() < 3 {
        return Err(unexpected("accepts/handled/requests line has fewer than 3 fields"));
    }
    metrics.record("accepts", coerce_int(counters[0]));
    metrics.record("handled", coerce_int(counters[1]));
    metrics.record("requests", coerce_int(counters[2]));

    let caps = lines
        .next()
        .and_then(|line| CONNECTION_STATES.captures(line))
        .ok_or_else(|| unexpected("no Reading/Writing/Waiting line"))?;
    metrics.record("reading", coerce_int(&caps[1]));
    metrics.record("writing", coerce_int(&caps[2]));
    metrics.record("waiting", coerce_int(&caps[3]));

    Ok(metrics)
}
