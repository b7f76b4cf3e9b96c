/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let rust_version = rustc_version::version()
        .map(|version| version.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is always set for build scripts");
    let dest = Path::new(&out_dir).join("build_env.rs");
    let mut file = File::create(&dest).expect("could not create build_env.rs");
    writeln!(
        file,
        "const RUST_VERSION: &str = \"{}\";",
        rust_version.escape_default()
    )
    .expect("could not write build_env.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
