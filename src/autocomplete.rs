//! Schema-aware completion: decide what kind of name is being typed at the
//! cursor (`context`), then list matching candidates (`suggestion`).
crate::reexport!(context);
crate::reexport!(suggestion);

#[cfg(test)]
mod suggestion_tests;

use crate::*;
