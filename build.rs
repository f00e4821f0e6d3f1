//! Embeds build metadata for the `version` command.

use std::env;
use std::process::Command;

fn main() {
    let revision = git(&["rev-parse", "--short=12", "HEAD"]);
    let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]);
    let user = env::var("USER").unwrap_or_else(|_| "unknown".to_string());
    let date = chrono::Utc::now().format("%Y%m%d-%H:%M:%S").to_string();
    let rustc = env::var("RUSTC")
        .ok()
        .and_then(|rustc| capture(&rustc, &["--version"]))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=STORAGETOOL_BUILD_REVISION={}", revision);
    println!("cargo:rustc-env=STORAGETOOL_BUILD_BRANCH={}", branch);
    println!("cargo:rustc-env=STORAGETOOL_BUILD_USER={}", user);
    println!("cargo:rustc-env=STORAGETOOL_BUILD_DATE={}", date);
    println!("cargo:rustc-env=STORAGETOOL_BUILD_RUSTC={}", rustc);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git(args: &[&str]) -> String {
    capture("git", args).unwrap_or_else(|| "unknown".to_string())
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
