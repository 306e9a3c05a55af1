// RiskCrab - GPL-3.0-or-later
// Build script to embed version info at compile time

use std::process::Command;

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

fn main() {
    let hash = git_output(&["rev-parse", "--short", "HEAD"])
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string());

    // Mark builds from a dirty working tree
    let dirty = git_output(&["status", "--porcelain"]).is_some_and(|s| !s.is_empty());

    if dirty {
        println!("cargo:rustc-env=GIT_HASH={hash}-dirty");
    } else {
        println!("cargo:rustc-env=GIT_HASH={hash}");
    }

    // Rerun if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
