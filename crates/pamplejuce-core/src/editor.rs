//! Editor hooks called by the host framework.
//!
//! The framework owns the window. A plugin only answers size queries and
//! receives lifecycle and presentation callbacks, all of which default to
//! no-ops.

use crate::types::{Rect, Size};

/// Size constraints for the plugin editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConstraints {
    /// Minimum size.
    pub min: Size,
    /// Maximum size.
    pub max: Size,
    /// Whether the editor is resizable.
    pub resizable: bool,
}

impl EditorConstraints {
    /// Constraints that pin the editor to exactly `size`.
    pub const fn fixed(size: Size) -> Self {
        Self {
            min: size,
            max: size,
            resizable: false,
        }
    }

    /// Apply these constraints to a requested size.
    pub fn constrain(&self, requested: Size) -> Size {
        if self.resizable {
            requested.clamp(self.min, self.max)
        } else {
            self.min
        }
    }
}

impl Default for EditorConstraints {
    fn default() -> Self {
        Self {
            min: Size::new(400, 300),
            max: Size::new(1600, 1200),
            resizable: true,
        }
    }
}

/// Trait for plugin editor/GUI callbacks.
pub trait EditorDelegate: Send {
    /// Get the initial editor size.
    ///
    /// Default is 400x300.
    fn editor_size(&self) -> Size {
        Size::new(400, 300)
    }

    /// Get the editor size constraints.
    fn editor_constraints(&self) -> EditorConstraints {
        EditorConstraints::default()
    }

    /// Called when the editor is opened.
    fn editor_opened(&mut self) {}

    /// Called when the editor is closed.
    fn editor_closed(&mut self) {}

    /// Called when the editor area needs repainting.
    fn paint(&mut self, _bounds: Rect) {}

    /// Called when the editor is resized.
    ///
    /// The new size has already been constrained to the editor constraints.
    fn editor_resized(&mut self, _new_size: Size) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;
    impl EditorDelegate for Inert {}

    #[test]
    fn default_hooks_are_inert() {
        let mut editor = Inert;
        assert_eq!(editor.editor_size(), Size::new(400, 300));
        editor.editor_opened();
        editor.paint(Rect::from_size(editor.editor_size()));
        editor.editor_resized(Size::new(500, 400));
        editor.editor_closed();
        assert_eq!(editor.editor_size(), Size::new(400, 300));
    }

    #[test]
    fn fixed_constraints_ignore_requests() {
        let constraints = EditorConstraints::fixed(Size::new(400, 300));
        assert!(!constraints.resizable);
        assert_eq!(constraints.constrain(Size::new(1000, 50)), Size::new(400, 300));
    }

    #[test]
    fn resizable_constraints_clamp_requests() {
        let constraints = EditorConstraints::default();
        assert_eq!(constraints.constrain(Size::new(100, 2000)), Size::new(400, 1200));
    }
}
