//! Collect FreeRADIUS statistics from its status server

use structopt::StructOpt;

use sunray_plugins::cli::{parse_args, required};
use sunray_plugins::command::SystemRunner;
use sunray_plugins::error::ConfigError;
use sunray_plugins::radius::RadiusStats;
use sunray_plugins::service::ServiceCheck;
use sunray_plugins::{finish, logging, run_check};

const MISSING_SECRET: &str =
    "You must specify the freeradius admin secret via the -s or --secret option.";

/// Collect FreeRADIUS statistics from its status server.
///
/// Checks that the radiusd service is running, then sends a Status-Server
/// request with radclient and reports the FreeRADIUS-Total counters.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-freeradius (part of sunray-plugins)",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
struct Args {
    #[structopt(
        short = "h",
        long = "hostname",
        value_name = "HOSTNAME",
        default_value = "127.0.0.1",
        help = "The freeradius hostname"
    )]
    hostname: String,
    #[structopt(
        short = "p",
        long = "port",
        value_name = "PORT",
        default_value = "18121",
        help = "The freeradius status port"
    )]
    port: String,
    #[structopt(
        short = "s",
        long = "secret",
        value_name = "SECRET",
        help = "The secret as defined via the \"secret\" key within the client admin block"
    )]
    secret: Option<String>,
    #[structopt(
        long = "service",
        value_name = "UNIT",
        default_value = "radiusd",
        help = "The systemd unit that runs freeradius"
    )]
    service: String,
    #[structopt(short = "v", long = "verbose", help = "Log diagnostics to stderr")]
    verbose: bool,
}

impl Args {
    fn service(&self) -> ServiceCheck {
        ServiceCheck::new(self.service.clone(), "Freeradius")
    }

    fn probe(&self) -> Result<RadiusStats, ConfigError> {
        Ok(RadiusStats {
            hostname: self.hostname.clone(),
            port: self.port.clone(),
            secret: required(&self.secret, MISSING_SECRET)?,
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
