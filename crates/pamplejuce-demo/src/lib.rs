//! Pamplejuce Demo - an empty plugin scaffold.
//!
//! The plugin carries no DSP and no parameters. It reports a constant name
//! and the version embedded from the packaged `VERSION` file, and offers an
//! inert editor.

pub mod editor;

use pamplejuce_core::prelude::*;

pub use editor::{DemoEditor, EDITOR_SIZE};

/// Product name reported to the host.
pub const PLUGIN_NAME: &str = "Pamplejuce Demo";

/// Version embedded at build time from the workspace `VERSION` file.
pub const PLUGIN_VERSION: &str = env!("PAMPLEJUCE_VERSION");

/// Plugin configuration (format-agnostic metadata)
pub static CONFIG: PluginConfig = PluginConfig::new(PLUGIN_NAME)
    .with_vendor("Pamplejuce")
    .with_url("https://github.com/sudara/pamplejuce")
    .with_version(PLUGIN_VERSION)
    .with_editor();

/// The demo plugin.
#[derive(Debug, Default)]
pub struct DemoPlugin;

impl DemoPlugin {
    pub fn new() -> Self {
        log::debug!("creating {}", CONFIG.identity());
        Self
    }
}

impl Plugin for DemoPlugin {
    fn config(&self) -> &'static PluginConfig {
        &CONFIG
    }

    fn create_editor(&self) -> Option<Box<dyn EditorDelegate>> {
        Some(Box::new(DemoEditor::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_carries_embedded_version() {
        assert_eq!(CONFIG.version, PLUGIN_VERSION);
        assert!(!PLUGIN_VERSION.is_empty());
        assert!(!PLUGIN_VERSION.ends_with('\n'));
    }

    #[test]
    fn vendor_metadata_is_set() {
        assert_eq!(CONFIG.name, "Pamplejuce Demo");
        assert_eq!(CONFIG.vendor, "Pamplejuce");
        assert!(CONFIG.url.starts_with("https://"));
    }

    #[test]
    fn editor_is_offered() {
        let plugin = DemoPlugin::new();
        assert!(plugin.has_editor());
        let editor = plugin.create_editor().unwrap();
        assert_eq!(editor.editor_size(), EDITOR_SIZE);
    }
}
