//! FreeRADIUS statistics via `radclient`
//!
//! The status server answers a `Status-Server` request with a block of
//! attributes. We only care about the ten `FreeRADIUS-Total-*` counters, which
//! it always sends in the same order.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::check::StatsProbe;
use crate::command::{CommandRunner, Invocation};
use crate::error::{CheckError, FormatError, ProbeError};
use crate::lines::{grep, split_field};
use crate::metrics::MetricSet;

pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "18121";

const TOTAL_TOKEN: &str = "FreeRADIUS-Total";

/// Asks for authentication stats and an Access-Accept reply
const STATUS_REQUEST: &str = "Message-Authenticator = 0x00, \
                              FreeRADIUS-Statistics-Type = 1, \
                              Response-Packet-Type = Access-Accept";

/// Metric names for the `FreeRADIUS-Total` lines, in the order they arrive
pub const TOTALS: [&str; 10] = [
    "access_requests",
    "access_accepts",
    "access_rejects",
    "access_challenges",
    "auth_responses",
    "duplicate_requests",
    "malformed_requests",
    "invalid_requests",
    "dropped_requests",
    "unknown_types",
];

lazy_static! {
    static ref NO_RESPONSE: Regex = Regex::new(r"(?i)no response").unwrap();
}

/// Where the FreeRADIUS status server lives
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusStats {
    pub hostname: String,
    pub port: String,
    pub secret: String,
}

impl RadiusStats {
    pub fn target(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new("radclient")
            .arg("-x")
            .arg("-r")
            .arg("1")
            .arg(self.target())
            .arg("status")
            .secret_arg(self.secret.clone())
            .stdin(STATUS_REQUEST)
    }
}

impl StatsProbe for RadiusStats {
    fn collect(
        &self,
        runner: &dyn CommandRunner,
        metrics: MetricSet,
    ) -> Result<MetricSet, CheckError> {
        let result = runner.run(&self.invocation())?;
        if !result.success || NO_RESPONSE.is_match(&result.output) {
            return Err(ProbeError {
                server: "Freeradius status server".into(),
                target: self.target(),
                output: result.output,
            }
            .into());
        }
        trace!(output = %result.output, "radclient answered");
        Ok(parse_totals(&result.output, metrics)?)
    }
}

/// Record the ten `FreeRADIUS-Total` counters from `radclient` output
pub fn parse_totals(output: &str, mut metrics: MetricSet) -> Result<MetricSet, FormatError> {
    let lines = grep(output, TOTAL_TOKEN);
    if lines.len() < TOTALS.len() {
        warn!(found = lines.len(), "too few {} lines", TOTAL_TOKEN);
        return Err(FormatError::MissingStats {
            token: TOTAL_TOKEN,
            expected: TOTALS.len(),
            found: lines.len(),
        });
    }

    for (name, line) in TOTALS.iter().zip(lines) {
        let field = split_field(line, " = ");
        debug!(metric = name, label = field.label.trim(), raw = field.raw, "total");
        metrics.record(*name, field.int());
    }
    Ok(metrics)
}
