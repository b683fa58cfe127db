//! Documentation about the various scripts contained herein
//!
//! - [check-freeradius](#check-freeradius)
//! - [check-nginx](#check-nginx)
//!
//! # check-freeradius
//!
//! Linux-only. Requires systemd and `radclient` (part of freeradius-utils).
//!
//! ```plain
//! $ check-freeradius --help
//! check-freeradius (part of sunray-plugins) 0.1.0
//! Collect FreeRADIUS statistics from its status server.
//!
//! Checks that the radiusd service is running, then sends a Status-Server request with radclient and reports the
//! FreeRADIUS-Total counters.
//!
//! USAGE:
//!     check-freeradius [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!         --help       Prints help information
//!     -V, --version    Prints version information
//!     -v, --verbose    Log diagnostics to stderr
//!
//! OPTIONS:
//!     -h, --hostname <HOSTNAME>    The freeradius hostname [default: 127.0.0.1]
//!     -p, --port <PORT>            The freeradius status port [default: 18121]
//!     -s, --secret <SECRET>        The secret as defined via the "secret" key within the client admin block
//!         --service <UNIT>         The systemd unit that runs freeradius [default: radiusd]
//! ```
//!
//! # check-nginx
//!
//! Linux-only. Requires systemd, `curl`, and nginx built with the stub_status module.
//!
//! ```plain
//! $ check-nginx --help
//! check-nginx (part of sunray-plugins) 0.1.0
//! Collect nginx statistics from the stub_status page.
//!
//! Checks that the nginx service is running, then fetches the stub_status page with curl and reports connection and
//! request counters.
//!
//! USAGE:
//!     check-nginx [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!     -v, --verbose    Log diagnostics to stderr
//!
//! OPTIONS:
//!     -p, --path <NGINX_STUB_PATH>    The url to pull the nginx stub_status page from [default:
//!                                     http://127.0.0.1/nginx_status]
//!         --service <UNIT>            The systemd unit that runs nginx [default: nginx]
//!     -t, --timeout <SECONDS>         Give up on the stub_status page after this long [default: 10]
//! ```
//!
//! # Output
//!
//! Both checks print one line per metric on success and exit 0:
//!
//! ```plain
//! metric service_status string active (running)
//! metric access_requests int 872
//! ```
//!
//! On any failure they print exactly one `status` line and exit 1. The reason
//! can span several lines when it includes the diagnostic tool's output.
//!
//! Set `SUNRAY_PLUGINS_LOG` (e.g. `SUNRAY_PLUGINS_LOG=debug`) or pass
//! `--verbose` to get diagnostics on stderr.
