//! Build script for Pizza Builder
//!
//! Stamps the UTC build time into the binary for the status tool.

fn main() {
    println!("cargo:rerun-if-changed=src");

    let built_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    println!("cargo:rustc-env=PIZZA_BUILT_AT={}", built_at);
}
