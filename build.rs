// Copyright © 2024 SiteFooter. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build script checking the minimum supported Rust version.

/// Minimum Rust version required to build the crate.
const MIN_RUSTC_VERSION: &str = "1.74.0";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    match version_check::is_min_version(MIN_RUSTC_VERSION) {
        Some(true) => {}
        Some(false) => {
            eprintln!(
                "SiteFooter requires rustc >= {}; please update your toolchain.",
                MIN_RUSTC_VERSION
            );
            std::process::exit(1);
        }
        None => {
            println!(
                "cargo:warning=Unable to determine the rustc version, assuming >= {}",
                MIN_RUSTC_VERSION
            );
        }
    }
}
