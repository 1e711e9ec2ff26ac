use std::process::Command;

fn main() {
    println!("cargo:rustc-env=BUILD_HASH={}", build_hash());

    // .git is at the workspace root, two levels up from this crate
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}

/// Short git hash, with a timestamp suffix when tracked files are dirty.
fn build_hash() -> String {
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());

    let clean = Command::new("git")
        .args(["diff", "--quiet", "HEAD"])
        .status()
        .map(|s| s.success())
        .unwrap_or(true);

    if clean {
        hash
    } else {
        format!("{hash}-dirty-{}", chrono::Local::now().format("%Y%m%d-%H%M%S"))
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
