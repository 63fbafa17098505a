//! Build script for pamplejuce-demo.
//!
//! Embeds the first line of the workspace `VERSION` file as
//! `PAMPLEJUCE_VERSION` so the plugin reports the packaged version.

use std::path::PathBuf;

use pamplejuce_core::{VersionRecord, VERSION_FILE_NAME};

fn main() {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let record_path = manifest_dir.join("../..").join(VERSION_FILE_NAME);

    // Rerun if the packaged record changes
    println!("cargo:rerun-if-changed={}", record_path.display());

    let record = VersionRecord::read(&record_path).unwrap_or_else(|e| panic!("{}", e));
    if record.as_str().is_empty() {
        panic!("version record {} is empty", record_path.display());
    }

    println!("cargo:rustc-env=PAMPLEJUCE_VERSION={}", record);
}
