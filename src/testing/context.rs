use crate::testing::*;
use std::sync::Arc;
use test_context::TestContext;
pub use test_context::test_context;

/// An editor over the sample catalog with default configuration.
pub struct EditorSession {
    pub editor: Editor,
}

impl EditorSession {
    /// Feed every character of `text` through the key handler, as a user would.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.editor.handle_key(Key::Char(c));
        }
    }

    /// Items of the open suggestion panel, or nothing when it is closed.
    pub fn visible(&self) -> Vec<String> {
        self.editor
            .suggestions()
            .list()
            .map(|list| list.items().to_vec())
            .unwrap_or_default()
    }
}

impl TestContext for EditorSession {
    fn setup() -> Self {
        common_init();
        Self {
            editor: Editor::new(Arc::new(sample_catalog())),
        }
    }
}
