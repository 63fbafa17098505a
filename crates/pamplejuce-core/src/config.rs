//! Compile-time plugin metadata.
//!
//! The host framework asks a plugin for its display name and version. Both
//! are process-wide constants, so they live in a `static` built with `const`
//! builder methods.
//!
//! # Example
//!
//! ```
//! use pamplejuce_core::PluginConfig;
//!
//! pub static CONFIG: PluginConfig = PluginConfig::new("My Plugin")
//!     .with_vendor("My Company")
//!     .with_version("1.0.0")
//!     .with_editor();
//!
//! assert_eq!(CONFIG.identity().version, "1.0.0");
//! ```

use std::fmt;

/// Plugin metadata reported to the host.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Plugin name displayed in the DAW.
    pub name: &'static str,

    /// Vendor/company name.
    pub vendor: &'static str,

    /// Vendor URL.
    pub url: &'static str,

    /// Plugin version string.
    pub version: &'static str,

    /// Whether this plugin has an editor/GUI.
    pub has_editor: bool,
}

impl PluginConfig {
    /// Create a new plugin configuration with default values.
    ///
    /// The default version is `"0.0.0"`; real plugins set it from the
    /// packaged version record with [`with_version`](Self::with_version).
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            vendor: "Unknown Vendor",
            url: "",
            version: "0.0.0",
            has_editor: false,
        }
    }

    /// Set the vendor name.
    pub const fn with_vendor(mut self, vendor: &'static str) -> Self {
        self.vendor = vendor;
        self
    }

    /// Set the vendor URL.
    pub const fn with_url(mut self, url: &'static str) -> Self {
        self.url = url;
        self
    }

    /// Set the version string.
    pub const fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    /// Enable the editor/GUI.
    pub const fn with_editor(mut self) -> Self {
        self.has_editor = true;
        self
    }

    /// The compiled-in `(name, version)` pair.
    pub const fn identity(&self) -> ProductIdentity {
        ProductIdentity {
            name: self.name,
            version: self.version,
        }
    }
}

/// Name and version a running plugin reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductIdentity {
    pub name: &'static str,
    pub version: &'static str,
}

impl fmt::Display for ProductIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
