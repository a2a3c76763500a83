// File: crates/gauge-core/build.rs
// Summary: Links the Windows system libraries Skia's text layout (ICU) pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // ICU data lookup goes through the registry API.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
