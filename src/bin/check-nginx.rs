//! Collect nginx statistics from the stub_status page

use std::time::Duration;

use structopt::StructOpt;

use sunray_plugins::cli::parse_args;
use sunray_plugins::command::SystemRunner;
use sunray_plugins::error::ConfigError;
use sunray_plugins::service::ServiceCheck;
use sunray_plugins::stub_status::StubStatus;
use sunray_plugins::{finish, logging, run_check};

const ZERO_TIMEOUT: &str = "The --timeout must be at least 1 second.";

/// Collect nginx statistics from the stub_status page.
///
/// Checks that the nginx service is running, then fetches the stub_status
/// page with curl and reports connection and request counters.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-nginx (part of sunray-plugins)",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
struct Args {
    #[structopt(
        short = "p",
        long = "path",
        value_name = "NGINX_STUB_PATH",
        default_value = "http://127.0.0.1/nginx_status",
        help = "The url to pull the nginx stub_status page from"
    )]
    path: String,
    #[structopt(
        short = "t",
        long = "timeout",
        value_name = "SECONDS",
        default_value = "10",
        help = "Give up on the stub_status page after this long"
    )]
    timeout: u64,
    #[structopt(
        long = "service",
        value_name = "UNIT",
        default_value = "nginx",
        help = "The systemd unit that runs nginx"
    )]
    service: String,
    #[structopt(short = "v", long = "verbose", help = "Log diagnostics to stderr")]
    verbose: bool,
}

impl Args {
    fn service(&self) -> ServiceCheck {
        ServiceCheck::new(self.service.clone(), "Nginx")
    }

    /// curl treats `--max-time 0` as no limit at all
    fn probe(&self) -> Result<StubStatus, ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::new(ZERO_TIMEOUT));
        }
        Ok(StubStatus {
            path: self.path.clone(),
            timeout: Duration::from_secs(self.timeout),
        })
    }
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => finish(Err(e.into())),
    };
    logging::init(args.verbose);

    let probe = match args.probe() {
        Ok(probe) => probe,
        Err(e) => finish(Err(e.into())),
    };
    finish(run_check(&SystemRunner, &args.service(), &probe));
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use structopt::StructOpt;

    use sunray_plugins::report::{write_report, Status};
    use sunray_plugins::stub_status::{StubStatus, DEFAULT_PATH};

    use super::{Args, ZERO_TIMEOUT};

    fn build_args(argv: Vec<&str>) -> Args {
        Args::from_iter(argv.into_iter())
    }

    #[test]
    fn defaults() {
        let args = build_args(vec!["check-nginx"]);
        assert_eq!(args.probe().unwrap(), StubStatus::new(DEFAULT_PATH));
        assert_eq!(args.service().unit, "nginx");
        assert_eq!(args.service().label, "Nginx");
    }

    #[test]
    fn flags() {
        let args = build_args(vec![
            "check-nginx",
            "-p",
            "http://10.1.2.3:8080/basic_status",
            "--timeout",
            "4",
            "--service=openresty",
            "-v",
        ]);
        let probe = args.probe().unwrap();
        assert_eq!(probe.path, "http://10.1.2.3:8080/basic_status");
        assert_eq!(probe.timeout, Duration::from_secs(4));
        assert_eq!(args.service().unit, "openresty");
        assert!(args.verbose);
    }

    #[test]
    fn zero_timeout_is_a_config_error() {
        let args = build_args(vec!["check-nginx", "-t", "0"]);
        let err = args.probe().unwrap_err();
        assert_eq!(err.msg, ZERO_TIMEOUT);

        let mut out = Vec::new();
        let status = write_report(&mut out, &Err(err.into())).unwrap();
        assert_eq!(status, Status::Failed);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("status {}\n", ZERO_TIMEOUT)
        );
    }
}
