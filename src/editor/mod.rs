//! Editing session: the buffer and caret (`state`), the word under the caret
//! (`cursor`), the suggestion panel state machine (`controller`) and the
//! `Editor` that drives all of them from key events (`session`).
crate::reexport!(cursor);
crate::reexport!(state);
crate::reexport!(controller);
crate::reexport!(session);

use crate::*;
