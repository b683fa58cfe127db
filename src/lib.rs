//! Sunray plugins: monitoring agent checks for FreeRADIUS and nginx
//!
//! Each check is a short-lived binary that the monitoring agent runs on an
//! interval. A check first asks systemd whether its service is up, then asks
//! the service itself for statistics by shelling out to a diagnostic tool
//! (`radclient` or `curl`), and prints what it found in the agent's line
//! format:
//!
//! ```plain
//! metric service_status string active (running)
//! metric connections int 5
//! ```
//!
//! or, if anything at all went wrong, a single line saying why, followed by a
//! nonzero exit:
//!
//! ```plain
//! status Nginx service is not running.
//! ```
//!
//! The library holds everything but argument parsing, so a check binary is
//! mostly:
//!
//! ```rust,no_run
//! use sunray_plugins::command::SystemRunner;
//! use sunray_plugins::service::ServiceCheck;
//! use sunray_plugins::stub_status::StubStatus;
//! use sunray_plugins::{finish, run_check};
//!
//! let service = ServiceCheck::new("nginx", "Nginx");
//! let probe = StubStatus::new("http://127.0.0.1/nginx_status");
//! finish(run_check(&SystemRunner, &service, &probe));
//! ```
//!
//! See the [`scripts`](scripts/index.html) module for the checks themselves.

pub mod check;
pub mod cli;
pub mod command;
pub mod error;
pub mod lines;
pub mod logging;
pub mod metrics;
pub mod radius;
pub mod report;
pub mod scripts;
pub mod service;
pub mod stub_status;

pub use crate::check::{run_check, StatsProbe};
pub use crate::error::CheckError;
pub use crate::metrics::{Metric, MetricSet, MetricValue};
pub use crate::report::{finish, Status};
