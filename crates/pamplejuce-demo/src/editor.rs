//! The demo editor: a fixed-size, empty view.

use pamplejuce_core::{EditorConstraints, EditorDelegate, Rect, Size};

/// Initial and only editor size.
pub const EDITOR_SIZE: Size = Size::new(400, 300);

/// Editor for [`DemoPlugin`](crate::DemoPlugin).
///
/// Draws nothing and lays nothing out. It only tracks whether the host
/// currently has it open.
#[derive(Debug, Default)]
pub struct DemoEditor {
    open: bool,
}

impl DemoEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the host window is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl EditorDelegate for DemoEditor {
    fn editor_size(&self) -> Size {
        EDITOR_SIZE
    }

    fn editor_constraints(&self) -> EditorConstraints {
        EditorConstraints::fixed(EDITOR_SIZE)
    }

    fn editor_opened(&mut self) {
        self.open = true;
    }

    fn editor_closed(&mut self) {
        self.open = false;
    }

    fn paint(&mut self, _bounds: Rect) {}

    fn editor_resized(&mut self, _new_size: Size) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_is_fixed_at_400_by_300() {
        let editor = DemoEditor::new();
        assert_eq!(editor.editor_size(), Size::new(400, 300));
        let constraints = editor.editor_constraints();
        assert!(!constraints.resizable);
        assert_eq!(constraints.constrain(Size::new(800, 600)), EDITOR_SIZE);
    }

    #[test]
    fn open_close_is_tracked() {
        let mut editor = DemoEditor::new();
        assert!(!editor.is_open());
        editor.editor_opened();
        assert!(editor.is_open());
        editor.paint(Rect::from_size(EDITOR_SIZE));
        editor.editor_resized(EDITOR_SIZE);
        editor.editor_closed();
        assert!(!editor.is_open());
    }
}
