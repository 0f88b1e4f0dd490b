use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(limb_width_32)");
    println!("cargo:rustc-check-cfg=cfg(limb_width_64)");
    println!("cargo:rustc-check-cfg=cfg(native_strtod)");

    // Decide ideal limb width for arithmetic in the float parser. Refer to
    // src/lexical/math.rs for where this has an effect.
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let limb_width_64 = matches!(
        target_arch.as_str(),
        "aarch64" | "mips64" | "powerpc64" | "x86_64" | "loongarch64" | "riscv64"
    );
    if limb_width_64 {
        println!("cargo:rustc-cfg=limb_width_64");
    } else {
        println!("cargo:rustc-cfg=limb_width_32");
    }

    // Native-width conversions go through the C library's strtod, which
    // reports range errors through errno. Only enable that path where we
    // know how to reach the thread's errno slot.
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let has_errno_location = matches!(
        target_os.as_str(),
        "linux"
            | "android"
            | "emscripten"
            | "macos"
            | "ios"
            | "freebsd"
            | "netbsd"
            | "openbsd"
    );
    if has_errno_location && env::var_os("CARGO_FEATURE_STD").is_some() {
        println!("cargo:rustc-cfg=native_strtod");
    }
}
