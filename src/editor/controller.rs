use super::*;

/// Candidates currently shown in the panel and the highlighted one.
///
/// Never empty: an empty candidate list closes the panel instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<String>,
    selected: usize,
}

impl SuggestionList {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &str {
        &self.items[self.selected]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The suggestion panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionState {
    #[default]
    Closed,
    Open(SuggestionList),
}

impl SuggestionState {
    /// Show fresh candidates after an edit, selecting the first, or close the
    /// panel when there are none.
    pub fn refresh(&mut self, items: Vec<String>) {
        *self = if items.is_empty() {
            SuggestionState::Closed
        } else {
            SuggestionState::Open(SuggestionList { items, selected: 0 })
        };
        debug!("Suggestion panel {}", self.describe());
    }

    /// Move the highlight down, stopping at the last item. Returns false when
    /// the panel is closed.
    pub fn select_next(&mut self) -> bool {
        match self {
            SuggestionState::Open(list) => {
                list.selected = (list.selected + 1).min(list.items.len() - 1);
                trace!("Selected suggestion {}", list.selected);
                true
            }
            SuggestionState::Closed => false,
        }
    }

    /// Move the highlight up, stopping at the first item. Returns false when
    /// the panel is closed.
    pub fn select_prev(&mut self) -> bool {
        match self {
            SuggestionState::Open(list) => {
                list.selected = list.selected.saturating_sub(1);
                trace!("Selected suggestion {}", list.selected);
                true
            }
            SuggestionState::Closed => false,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.list().map(SuggestionList::selected)
    }

    /// Close the panel. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = SuggestionState::Closed;
        if was_open {
            debug!("Suggestion panel closed");
        }
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SuggestionState::Open(_))
    }

    pub fn list(&self) -> Option<&SuggestionList> {
        match self {
            SuggestionState::Open(list) => Some(list),
            SuggestionState::Closed => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            SuggestionState::Open(list) => format!("open with {} item(s)", list.len()),
            SuggestionState::Closed => "closed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(items: &[&str]) -> SuggestionState {
        let mut state = SuggestionState::default();
        state.refresh(items.iter().map(|s| s.to_string()).collect());
        state
    }

    #[test]
    fn starts_closed() {
        let state = SuggestionState::default();
        assert!(!state.is_open());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn refresh_opens_at_first_item() {
        let state = open(&["CORE", "MARTS"]);
        assert!(state.is_open());
        assert_eq!(state.selected(), Some("CORE"));
        assert_eq!(state.list().map(SuggestionList::selected_index), Some(0));
    }

    #[test]
    fn refresh_with_nothing_closes() {
        let mut state = open(&["CORE"]);
        state.refresh(Vec::new());
        assert_eq!(state, SuggestionState::Closed);
    }

    #[test]
    fn refresh_resets_selection() {
        let mut state = open(&["A", "B", "C"]);
        state.select_next();
        state.refresh(vec!["B".into(), "C".into()]);
        assert_eq!(state.selected(), Some("B"));
    }

    #[test]
    fn navigation_is_clamped() {
        let mut state = open(&["A", "B", "C"]);
        assert!(state.select_prev());
        assert_eq!(state.selected(), Some("A"));
        for _ in 0..5 {
            assert!(state.select_next());
        }
        assert_eq!(state.selected(), Some("C"));
        assert!(state.select_prev());
        assert_eq!(state.selected(), Some("B"));
    }

    #[test]
    fn navigation_needs_open_panel() {
        let mut state = SuggestionState::Closed;
        assert!(!state.select_next());
        assert!(!state.select_prev());
        assert!(!state.close());
    }

    #[test]
    fn close_reports_previous_state() {
        let mut state = open(&["A"]);
        assert!(state.close());
        assert!(!state.is_open());
    }
}
