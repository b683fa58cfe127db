//! Tie the service check and a stats probe together into one run

use tracing::debug;

use crate::command::CommandRunner;
use crate::error::CheckError;
use crate::metrics::MetricSet;
use crate::service::ServiceCheck;

/// A source of service statistics
///
/// Implementations take the metrics collected so far, add their own, and
/// hand the set back. Any error aborts the whole run.
pub trait StatsProbe {
    fn collect(
        &self,
        runner: &dyn CommandRunner,
        metrics: MetricSet,
    ) -> Result<MetricSet, CheckError>;
}

/// Check that the service is running, then collect its statistics
pub fn run_check(
    runner: &dyn CommandRunner,
    service: &ServiceCheck,
    probe: &dyn StatsProbe,
) -> Result<MetricSet, CheckError> {
    let metrics = service.check(runner, MetricSet::new())?;
    let metrics = probe.collect(runner, metrics)?;
    debug!(count = metrics.len(), "collected metrics");
    Ok(metrics)
}
