use std::process::Command;

// Exposes PDFBOOT_GIT_HASH to the binary. An explicit PDFBOOT_GIT_HASH in the
// build environment wins over asking git; outside a checkout it is "unknown".
fn main() {
    println!("cargo:rerun-if-env-changed=PDFBOOT_GIT_HASH");

    let hash = std::env::var("PDFBOOT_GIT_HASH")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .or_else(git_hash)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=PDFBOOT_GIT_HASH={}", hash.trim());
}

fn git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}
