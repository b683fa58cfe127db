use std::process::Command;

struct Check {
    name: &'static str,
    about: &'static str,
}

fn main() {
    let preamble = "Documentation about the various scripts contained herein\n";

    let checks = [
        Check {
            name: "check-freeradius",
            about: "Linux-only. Requires systemd and `radclient` (part of freeradius-utils).",
        },
        Check {
            name: "check-nginx",
            about: "Linux-only. Requires systemd, `curl`, and nginx built with the stub_status module.",
        },
    ];

    let mut out: String = cp(preamble.split('\n'));
    out.push_str("\n");
    out.push_str(&cp(checks
        .iter()
        .map(|c| format!("- [{0}](#{0})", c.name))));
    out.push_str("\n");
    for check in &checks {
        out.push_str(&format!(
            "\
//!
//! # {0}
//!
//! {1}
//!
//! ```plain
//! $ {0} --help
",
            check.name, check.about
        ));
        let cout = match help_text(check.name) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
        out.push_str(&cp(cout.trim_end().split('\n')));
        out.push_str("\n//! ```\n");
    }
    out.push_str(&cp(OUTPUT_SECTION.split('\n')));
    out.push_str("\n");
    print!("{}", out);
}

const OUTPUT_SECTION: &str = "
# Output

Both checks print one line per metric on success and exit 0:

```plain
metric service_status string active (running)
metric access_requests int 872
```

On any failure they print exactly one `status` line and exit 1. The reason
can span several lines when it includes the diagnostic tool's output.

Set `SUNRAY_PLUGINS_LOG` (e.g. `SUNRAY_PLUGINS_LOG=debug`) or pass
`--verbose` to get diagnostics on stderr.";

/// Run a built check with `--help`
fn help_text(name: &str) -> Result<String, String> {
    let output = Command::new(&format!("target/debug/{}", name))
        .args(&["--help"])
        .output()
        .map_err(|e| format!("Couldn't execute command {}: {}", name, e))?;
    String::from_utf8(output.stdout)
        .map_err(|e| format!("Couldn't convert command {} help to utf8: {}", name, e))
}

/// Comment each line in the iterator
fn cp<S: AsRef<str>, I: Iterator<Item = S>>(s: I) -> String {
    s.map(|s| format!("//! {}", s.as_ref()))
        .map(|s| s.trim().into())
        .collect::<Vec<String>>()
        .join("\n")
}
