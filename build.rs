// build.rs

fn main() {
    // --- Link against X11 ---
    // Try pkg-config first, which is the standard way to find library linking
    // information on Unix-like systems. If it fails (not installed, or the .pc
    // file is missing), fall back to manually specifying common linker flags.

    match pkg_config::probe_library("x11") {
        Ok(_) => {
            eprintln!("pkg-config found libX11. Linking configured automatically.");
        }
        Err(_) => {
            // --- Manual Linking Fallback ---
            // Assumes the library lives in a standard path like /usr/lib.
            // Non-standard locations need an adjusted -L path or LIBRARY_PATH.
            println!("cargo:rustc-link-lib=X11");
            println!("cargo:rustc-link-search=/usr/lib");
            eprintln!(
                "pkg-config failed for libX11; manual linking flags applied. \
                 Ensure the X11 development library is installed."
            );
        }
    }
}
