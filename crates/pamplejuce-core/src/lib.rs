//! # pamplejuce-core
//!
//! The host-framework boundary for the Pamplejuce plugin.
//!
//! The framework owns the plugin lifecycle and the editor window. This crate
//! describes the few hooks a plugin fills in, plus the packaged version
//! record the plugin's reported version must agree with.
//!
//! ## Main Traits
//!
//! - [`Plugin`] - Metadata hooks (name, version, editor presence)
//! - [`EditorDelegate`] - GUI size and lifecycle callbacks
//!
//! ## Types
//!
//! - [`PluginConfig`] - Compile-time plugin metadata
//! - [`ProductIdentity`] - Reported `(name, version)` pair
//! - [`VersionRecord`] - First line of the packaged `VERSION` file
//! - [`VersionCheck`] - Outcome of comparing the record with the plugin
//! - [`VersionError`] - Record could not be read
//! - [`Size`], [`Rect`] - Editor geometry

pub mod config;
pub mod editor;
pub mod error;
pub mod plugin;
pub mod types;
pub mod version;

// Re-exports for convenience
pub use config::{PluginConfig, ProductIdentity};
pub use editor::{EditorConstraints, EditorDelegate};
pub use error::{VersionError, VersionResult};
pub use plugin::Plugin;
pub use types::{Rect, Size};
pub use version::{
    check_version_record, check_working_dir, VersionCheck, VersionRecord, VERSION_FILE_NAME,
};

/// Prelude module for convenient imports.
///
/// ```
/// use pamplejuce_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        EditorConstraints, EditorDelegate, Plugin, PluginConfig, ProductIdentity, Rect, Size,
        VersionCheck, VersionError, VersionRecord, VersionResult,
    };
}
