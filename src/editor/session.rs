use super::*;
use std::sync::Arc;

/// Input events understood by [`Editor::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Escape,
    /// Hand the current query to the host.
    Execute,
}

/// What a key event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The buffer changed and suggestions were recomputed.
    Edited,
    /// Only the cursor moved.
    Moved,
    /// The highlight in the open panel moved.
    Navigated,
    /// A suggestion replaced the word at the cursor.
    Accepted,
    /// The open panel was closed.
    Dismissed,
    /// The host should run this query.
    Execute(String),
    /// Nothing happened.
    Ignored,
}

impl KeyOutcome {
    /// Whether the key was consumed by the suggestion panel instead of
    /// reaching the buffer.
    pub fn is_suppressed(&self) -> bool {
        matches!(
            self,
            KeyOutcome::Navigated | KeyOutcome::Accepted | KeyOutcome::Dismissed
        )
    }

    /// Whether the buffer text changed.
    pub fn changed_text(&self) -> bool {
        matches!(self, KeyOutcome::Edited | KeyOutcome::Accepted)
    }
}

/// One editing session over a shared catalog.
///
/// Every edit runs the whole pipeline before returning: find the word at the
/// cursor, classify the context, ask the suggestion engine, update the panel.
#[derive(Debug, Clone)]
pub struct Editor {
    state: EditorState,
    suggestions: SuggestionState,
    catalog: Arc<Catalog>,
    config: EditorConfig,
    keywords: &'static [&'static str],
}

impl Editor {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            state: EditorState::default(),
            suggestions: SuggestionState::default(),
            catalog,
            config: EditorConfig::default(),
            keywords: SQL_KEYWORDS,
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_keywords(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn text(&self) -> &str {
        self.state.buffer()
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn suggestions(&self) -> &SuggestionState {
        &self.suggestions
    }

    /// Move the cursor (e.g. after a pointer click). Closes the panel.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.state.set_cursor(cursor);
        self.suggestions.close();
    }

    /// Replace the whole text, as when the host loads a saved query.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set_buffer(text);
        self.refresh();
    }

    /// Insert `text` at the cursor, as a paste would.
    pub fn insert(&mut self, text: &str) {
        self.state.insert(text);
        self.refresh();
    }

    /// The identifier being typed at the cursor.
    pub fn word(&self) -> WordSpan {
        current_word(self.state.buffer(), self.state.cursor())
    }

    pub fn context(&self) -> SuggestionContext {
        classify(self.state.buffer(), self.state.cursor())
    }

    /// Highlighted segments for the whole buffer.
    pub fn render(&self) -> DisplaySegments {
        render(self.state.buffer())
    }

    /// Where the cursor lands in [`Editor::render`]'s output.
    pub fn caret(&self) -> CaretPosition {
        self.render().caret_at(self.state.cursor())
    }

    /// Accept candidate `index` of the open panel, as a pointer click would.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(candidate) = self
            .suggestions
            .list()
            .and_then(|list| list.get(index))
            .map(str::to_string)
        else {
            return false;
        };
        self.accept(&candidate);
        true
    }

    /// Apply one key event and run the suggestion pipeline.
    ///
    /// The outcome does not carry the buffer. When
    /// [`KeyOutcome::changed_text`] is true the host reads the new query from
    /// [`Editor::text`] before the next event; nothing else mutates it in
    /// between.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let open = self.suggestions.is_open();
        let outcome = match key {
            Key::Char(c) => {
                let mut utf8 = [0; 4];
                self.insert(c.encode_utf8(&mut utf8));
                KeyOutcome::Edited
            }
            Key::Enter | Key::Tab if open => match self.suggestions.selected().map(str::to_string) {
                Some(candidate) => {
                    self.accept(&candidate);
                    KeyOutcome::Accepted
                }
                None => KeyOutcome::Ignored,
            },
            Key::Enter => {
                self.insert("\n");
                KeyOutcome::Edited
            }
            Key::Tab => {
                self.insert("\t");
                KeyOutcome::Edited
            }
            Key::Backspace => self.edit_with(EditorState::delete_backward),
            Key::Delete => self.edit_with(EditorState::delete_forward),
            Key::Down if open => {
                self.suggestions.select_next();
                KeyOutcome::Navigated
            }
            Key::Up if open => {
                self.suggestions.select_prev();
                KeyOutcome::Navigated
            }
            Key::Down => self.move_with(|state| {
                state.move_down();
            }),
            Key::Up => self.move_with(|state| {
                state.move_up();
            }),
            Key::Left => self.move_with(EditorState::move_left),
            Key::Right => self.move_with(EditorState::move_right),
            Key::Home => self.move_with(EditorState::move_line_start),
            Key::End => self.move_with(EditorState::move_line_end),
            Key::Escape if open => {
                self.suggestions.close();
                KeyOutcome::Dismissed
            }
            Key::Escape => KeyOutcome::Ignored,
            Key::Execute => {
                info!("Executing query of {} byte(s)", self.state.buffer().len());
                KeyOutcome::Execute(self.state.buffer().to_string())
            }
        };
        trace!("{key:?} -> {outcome:?} (cursor {})", self.state.cursor());
        outcome
    }

    /// Replace the word left of the cursor with `candidate` and close the panel.
    fn accept(&mut self, candidate: &str) {
        let word = self.word();
        debug!("Accepting {candidate:?} over {:?}", word.range());
        self.state.replace(word.range(), candidate);
        self.suggestions.close();
    }

    fn edit_with(&mut self, edit: impl FnOnce(&mut EditorState) -> bool) -> KeyOutcome {
        if edit(&mut self.state) {
            self.refresh();
            KeyOutcome::Edited
        } else {
            KeyOutcome::Ignored
        }
    }

    fn move_with(&mut self, movement: impl FnOnce(&mut EditorState)) -> KeyOutcome {
        let before = self.state.cursor();
        movement(&mut self.state);
        self.suggestions.close();
        if self.state.cursor() == before {
            KeyOutcome::Ignored
        } else {
            KeyOutcome::Moved
        }
    }

    fn refresh(&mut self) {
        let word = self.word();
        let context = self.context();
        let items = SuggestionEngine::new(&self.catalog, &self.config)
            .with_keywords(self.keywords)
            .suggest(&context, &word.text);
        self.suggestions.refresh(items);
    }
}
