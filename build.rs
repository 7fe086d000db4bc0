use std::path::Path;
use std::process::Command;

/// Capture version details at build time for the `/version` endpoint.
fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|line| {
            line.split_whitespace()
                .nth(1)
                .map(|version| version.to_string())
        })
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=MY_REST_API_RUSTC_VERSION={rustc_version}");

    for (name, var) in [
        ("actix-web", "MY_REST_API_ACTIX_WEB_VERSION"),
        ("sea-orm", "MY_REST_API_SEA_ORM_VERSION"),
    ] {
        let version = locked_version(name).unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env={var}={version}");
    }

    println!("cargo:rerun-if-changed=Cargo.lock");
}

/// Look up the resolved version of a dependency in the workspace lockfile.
fn locked_version(name: &str) -> Option<String> {
    let lockfile = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.lock");
    let contents = std::fs::read_to_string(lockfile).ok()?;

    let mut in_package = false;
    for line in contents.lines() {
        let line = line.trim();
        if line == "[[package]]" {
            in_package = false;
            continue;
        }
        if line == format!("name = \"{name}\"") {
            in_package = true;
            continue;
        }
        if in_package {
            if let Some(version) = line.strip_prefix("version = \"") {
                return Some(version.trim_end_matches('"').to_string());
            }
        }
    }
    None
}
