// File: crates/sensitivity-core/build.rs
// Summary: Links the Windows system libraries Skia's raster backend and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW come from advapi32 (font manager lookups).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
