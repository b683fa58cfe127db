//! Ask the service manager whether a service is up

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::command::{CommandRunner, Invocation};
use crate::error::{CheckError, ServiceError};
use crate::lines::grep;
use crate::metrics::MetricSet;

lazy_static! {
    static ref ACTIVE: Regex = Regex::new(r"Active:\s(.+)\s+since\s+(.*)").unwrap();
}

const RUNNING: &str = "active (running)";

/// A systemd unit to check before collecting its stats
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCheck {
    /// The unit name handed to `systemctl`
    pub unit: String,
    /// What to call the service in failure messages
    pub label: String,
}

impl ServiceCheck {
    pub fn new<U: Into<String>, L: Into<String>>(unit: U, label: L) -> ServiceCheck {
        ServiceCheck {
            unit: unit.into(),
            label: label.into(),
        }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new("systemctl")
            .arg("status")
            .arg("--no-pager")
            .arg(self.unit.clone())
    }

    /// Record `service_status` and `service_last_restarted`, or fail if the
    /// service isn't `active (running)`
    pub fn check(
        &self,
        runner: &dyn CommandRunner,
        mut metrics: MetricSet,
    ) -> Result<MetricSet, CheckError> {
        let result = runner.run(&self.invocation())?;
        if !result.success {
            return Err(ServiceError::NotRunning {
                label: self.label.clone(),
            }
            .into());
        }

        let (status, since) = self.parse_active(&result.output)?;
        debug!(unit = %self.unit, %status, %since, "service is running");
        metrics.record("service_status", status);
        metrics.record("service_last_restarted", since);
        Ok(metrics)
    }

    /// Pull the status phrase and the restart time from `systemctl status`
    pub fn parse_active<'a>(&self, output: &'a str) -> Result<(&'a str, &'a str), ServiceError> {
        let line = match grep(output, "Active:").into_iter().next() {
            Some(line) => line,
            None => {
                warn!(unit = %self.unit, "no Active: line in systemctl output");
                return Err(ServiceError::NoActiveLine {
                    label: self.label.clone(),
                });
            }
        };

        let inactive = |shown: &str| ServiceError::Inactive {
            label: self.label.clone(),
            line: shown.trim().to_owned(),
        };
        let caps = ACTIVE.captures(line).ok_or_else(|| inactive(line))?;
        let status = caps.get(1).map_or("", |m| m.as_str());
        if status != RUNNING {
            return Err(inactive(&caps[0]));
        }
        Ok((status, caps.get(2).map_or("", |m| m.as_str())))
    }
}
