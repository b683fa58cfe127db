//! Tell the monitoring agent how the run went
//!
//! A run prints either one `metric` line per metric, or a single `status`
//! line explaining the failure. Never both.

use std::io::{self, Write};
use std::process;

use crate::error::CheckError;
use crate::metrics::MetricSet;

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Failed,
}

impl Status {
    #![cfg_attr(test, allow(dead_code))]
    pub fn exit(self) -> ! {
        match self {
            Status::Ok => process::exit(0),
            Status::Failed => process::exit(1),
        }
    }
}

/// Write the agent-facing lines for `result`
pub fn write_report<W: Write>(
    out: &mut W,
    result: &Result<MetricSet, CheckError>,
) -> io::Result<Status> {
    match result {
        Ok(metrics) => {
            for metric in metrics.iter() {
                writeln!(out, "{}", metric)?;
            }
            Ok(Status::Ok)
        }
        Err(e) => {
            writeln!(out, "status {}", e)?;
            Ok(Status::Failed)
        }
    }
}

/// Print the report to stdout and exit with the matching status
pub fn finish(result: Result<MetricSet, CheckError>) -> ! {
    if let Err(ref e) = result {
        tracing::debug!(error = ?e, "check failed");
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = write_report(&mut out, &result)
        .and_then(|status| out.flush().map(|_| status))
        .unwrap_or(Status::Failed);
    status.exit()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::{ConfigError, ProbeError};

    fn report(result: Result<MetricSet, CheckError>) -> (String, Status) {
        let mut out = Vec::new();
        let status = write_report(&mut out, &result).unwrap();
        (String::from_utf8(out).unwrap(), status)
    }

    #[test]
    fn success_prints_every_metric() {
        let mut metrics = MetricSet::new();
        metrics.record("service_status", "active (running)");
        metrics.record("access_requests", 10);
        assert_eq!(
            report(Ok(metrics)),
            (
                "metric service_status string active (running)\n\
                 metric access_requests int 10\n"
                    .to_owned(),
                Status::Ok
            )
        );
    }

    #[test]
    fn empty_success_prints_nothing() {
        assert_eq!(report(Ok(MetricSet::new())), (String::new(), Status::Ok));
    }

    #[test]
    fn failure_prints_one_status_line() {
        let err = ConfigError::new(
            "You must specify the freeradius admin secret via the -s or --secret option.",
        );
        let (out, status) = report(Err(err.into()));
        assert_eq!(
            out,
            "status You must specify the freeradius admin secret via the -s or --secret option.\n"
        );
        assert_eq!(status, Status::Failed);
    }

    #[test]
    fn multiline_reasons_stay_inline() {
        let err = ProbeError {
            server: "Nginx status server".into(),
            target: "http://127.0.0.1/nginx_status".into(),
            output: "curl: (7) Failed to connect".into(),
        };
        let (out, _) = report(Err(err.into()));
        assert!(out.starts_with("status Could not connect to Nginx status server"));
        assert_eq!(out.lines().filter(|l| l.starts_with("status ")).count(), 1);
        assert_eq!(out.lines().filter(|l| l.starts_with("metric ")).count(), 0);
        assert!(out.contains("\n\nCommand Result:\n\ncurl: (7) Failed to connect\n"));
    }
}
