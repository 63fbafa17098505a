//! Packaging and verification tooling for the Pamplejuce plugin.
//!
//! Usage: cargo xtask <version | check-version [PATH] | set-version <VERSION>>

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, ensure, Context, Result};
use pamplejuce_core::{
    check_version_record, check_working_dir, VersionCheck, VersionError, VersionRecord,
    VERSION_FILE_NAME,
};
use pamplejuce_demo::CONFIG;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        Some("version") => print_version(),
        Some("check-version") => check_version(args.get(2).map(PathBuf::from)),
        Some("set-version") => match args.get(2) {
            Some(version) => set_version(version),
            None => {
                print_usage();
                std::process::exit(1);
            }
        },
        _ => {
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: cargo xtask <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  version                Print the packaged and compiled-in versions");
    eprintln!("  check-version [PATH]   Compare the plugin version with a VERSION file");
    eprintln!("                         (default: VERSION in the current directory)");
    eprintln!("  set-version <VERSION>  Write VERSION at the workspace root");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  cargo xtask check-version");
    eprintln!("  cargo xtask set-version 1.2.0");
}

fn print_version() -> Result<()> {
    let record_path = get_workspace_root()?.join(VERSION_FILE_NAME);
    let record = VersionRecord::read(&record_path)?;
    println!("{} {}", record_path.display(), record);
    println!("{} (compiled)", CONFIG.identity());
    println!("Vendor: {}", CONFIG.vendor);
    if !CONFIG.url.is_empty() {
        println!("URL: {}", CONFIG.url);
    }
    Ok(())
}

fn check_version(path: Option<PathBuf>) -> Result<()> {
    let shown = path.as_deref().unwrap_or(Path::new(VERSION_FILE_NAME));
    println!("Checking {} against {}...", shown.display(), CONFIG.identity());

    let result = match &path {
        Some(path) => check_version_record(path, CONFIG.version),
        None => check_working_dir(CONFIG.version),
    };

    match result {
        Ok(VersionCheck::Match) => {
            println!("OK: {} reports {}", CONFIG.name, CONFIG.version);
            Ok(())
        }
        Ok(mismatch) => bail!("{}", mismatch),
        Err(e @ VersionError::ResourceUnavailable { .. }) => {
            Err(e).context("packaged version record is missing or unreadable")
        }
    }
}

fn set_version(version: &str) -> Result<()> {
    validate_version(version)?;
    let path = get_workspace_root()?.join(VERSION_FILE_NAME);
    write_version_record(&path, version)?;
    println!("Wrote {} to {}", version, path.display());
    println!("Rebuild the plugin so it reports the new version.");
    Ok(())
}

/// Accept a single token of dot-separated components made of ASCII
/// alphanumerics, `-` and `+`.
fn validate_version(version: &str) -> Result<()> {
    ensure!(!version.is_empty(), "version must not be empty");
    ensure!(
        !version.chars().any(char::is_whitespace),
        "version {:?} must not contain whitespace",
        version
    );
    for component in version.split('.') {
        ensure!(!component.is_empty(), "version {:?} has an empty component", version);
        ensure!(
            component
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '+'),
            "version {:?} has an invalid component {:?}",
            version,
            component
        );
    }
    Ok(())
}

fn write_version_record(path: &Path, version: &str) -> Result<()> {
    fs::write(path, format!("{}\n", version))
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn get_workspace_root() -> Result<PathBuf> {
    let output = Command::new("cargo")
        .args(["locate-project", "--workspace", "--message-format=plain"])
        .output()
        .context("Failed to locate workspace")?;

    ensure!(output.status.success(), "Failed to locate workspace");

    let cargo_toml = String::from_utf8_lossy(&output.stdout);
    let path = PathBuf::from(cargo_toml.trim());
    path.parent()
        .map(|p| p.to_path_buf())
        .context("Invalid workspace path")
}
