//! Packaged version record and the consistency check against it.
//!
//! The packaging step writes the released version to a plain text file
//! named [`VERSION_FILE_NAME`]. Only the first line is significant. The
//! plugin embeds the same value at build time; [`check_version_record`]
//! detects a build whose embedded value drifted from the packaged file.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{VersionError, VersionResult};

/// Conventional file name of the version record.
pub const VERSION_FILE_NAME: &str = "VERSION";

/// First line of a packaged version record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    value: String,
}

impl VersionRecord {
    /// Read the first line of the record at `path`.
    ///
    /// A trailing `\n` (or `\r\n`) is dropped; everything else, including
    /// surrounding spaces, is kept verbatim. An empty file yields an empty
    /// record. The file handle is released before this returns.
    pub fn read(path: impl AsRef<Path>) -> VersionResult<Self> {
        let path = path.as_ref();
        let unavailable = |source| VersionError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let mut line = String::new();
        BufReader::new(file).read_line(&mut line).map_err(unavailable)?;

        let record = Self::from_line(&line);
        log::debug!("read version record {:?} from {}", record.value, path.display());
        Ok(record)
    }

    /// Build a record from a line, dropping one trailing line terminator.
    pub fn from_line(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Self {
            value: line.to_owned(),
        }
    }

    /// The recorded version string.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Outcome of comparing a version record with a reported version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    /// Both values are byte-for-byte equal.
    Match,
    /// The values differ.
    Mismatch {
        /// First line of the packaged record.
        record: String,
        /// Version reported by the running plugin.
        reported: String,
    },
}

impl VersionCheck {
    /// Compare a record against a reported version.
    ///
    /// Comparison is exact: case and whitespace are significant.
    pub fn compare(record: &VersionRecord, reported: &str) -> Self {
        if record.as_str() == reported {
            Self::Match
        } else {
            Self::Mismatch {
                record: record.as_str().to_owned(),
                reported: reported.to_owned(),
            }
        }
    }

    /// Whether the check passed.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

impl fmt::Display for VersionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match => write!(f, "version record matches"),
            Self::Mismatch { record, reported } => write!(
                f,
                "version mismatch: record says {:?}, plugin reports {:?}",
                record, reported
            ),
        }
    }
}

/// Read the record at `path` and compare it with `reported`.
///
/// Fails with [`VersionError::ResourceUnavailable`] when the record cannot
/// be read; no default value is substituted.
pub fn check_version_record(path: impl AsRef<Path>, reported: &str) -> VersionResult<VersionCheck> {
    let record = VersionRecord::read(path)?;
    let check = VersionCheck::compare(&record, reported);
    if let VersionCheck::Mismatch { .. } = &check {
        log::warn!("{}", check);
    }
    Ok(check)
}

/// [`check_version_record`] against `VERSION` in the working directory.
pub fn check_working_dir(reported: &str) -> VersionResult<VersionCheck> {
    check_version_record(VERSION_FILE_NAME, reported)
}
