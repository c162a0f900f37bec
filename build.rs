//! Embeds git and build-time metadata for the `--version` surface.
//!
//! Kept dependency-free; when git is unavailable (release tarballs), the
//! commit falls back to a stable "unknown" marker.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=QUEST_BUILD_GIT_HASH");
    println!("cargo:rerun-if-env-changed=QUEST_BUILD_TIMESTAMP");

    let git_hash = env::var("QUEST_BUILD_GIT_HASH").unwrap_or_else(|_| git_short_hash());
    let timestamp = env::var("QUEST_BUILD_TIMESTAMP").unwrap_or_else(|_| unix_timestamp());

    println!("cargo:rustc-env=QUEST_BUILD_GIT_HASH={git_hash}");
    println!("cargo:rustc-env=QUEST_BUILD_TIMESTAMP={timestamp}");
}

fn git_short_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn unix_timestamp() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|delta| delta.as_secs())
        .unwrap_or(0);
    format!("unix:{seconds}")
}
