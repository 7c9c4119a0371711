// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on the mask width feature.
//!
//! This enables cleaner conditional compilation in tests and code:
//! - `#[cfg(mask_wide)]` when masks are `u64` (the default)
//! - `#[cfg(mask_narrow)]` when the `mask_u32` feature is enabled

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(mask_wide)");
    println!("cargo:rustc-check-cfg=cfg(mask_narrow)");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_MASK_U32");

    if std::env::var_os("CARGO_FEATURE_MASK_U32").is_some() {
        println!("cargo:rustc-cfg=mask_narrow");
    } else {
        println!("cargo:rustc-cfg=mask_wide");
    }
}
