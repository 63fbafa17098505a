//! The metadata hooks a plugin exposes to the host framework.
//!
//! A plugin hands the framework a `'static` [`PluginConfig`]; every other
//! query has a default implementation derived from it. Implementors only
//! override [`Plugin::create_editor`] when they ship a GUI.

use std::path::Path;

use crate::config::{PluginConfig, ProductIdentity};
use crate::editor::EditorDelegate;
use crate::error::VersionResult;
use crate::version::{check_version_record, VersionCheck};

/// Capability interface the host framework calls into.
pub trait Plugin: Send + 'static {
    /// Compile-time metadata for this plugin.
    fn config(&self) -> &'static PluginConfig;

    /// Display name reported to the host.
    fn name(&self) -> &'static str {
        self.config().name
    }

    /// Version string reported to the host.
    fn version(&self) -> &'static str {
        self.config().version
    }

    /// Whether [`create_editor`](Self::create_editor) returns an editor.
    fn has_editor(&self) -> bool {
        self.config().has_editor
    }

    /// The compiled-in `(name, version)` pair.
    fn identity(&self) -> ProductIdentity {
        self.config().identity()
    }

    /// Create the editor, if this plugin has one.
    fn create_editor(&self) -> Option<Box<dyn EditorDelegate>> {
        None
    }

    /// Compare [`version`](Self::version) against the record at `path`.
    fn check_version_record(&self, path: &Path) -> VersionResult<VersionCheck> {
        check_version_record(path, self.version())
    }
}
