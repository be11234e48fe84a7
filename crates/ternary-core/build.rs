// File: crates/ternary-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    // Build scripts run on the host; ask cargo for the target instead of using cfg.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
