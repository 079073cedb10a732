//! In-progress answers keyed by field id

use serde::Serialize;
use std::collections::BTreeMap;

/// Current value entered for each field, keyed by field id.
///
/// Updates are copy-on-write: [`AnswerMap::with_answer`] returns a new map
/// and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, String>);

impl AnswerMap {
    /// Copy of this map with `id` set to `value`
    #[must_use]
    pub fn with_answer(&self, id: &str, value: impl Into<String>) -> Self {
        let mut next = self.0.clone();
        next.insert(id.to_string(), value.into());
        Self(next)
    }

    /// Entered value, or the empty string when the field was never touched
    pub fn value(&self, id: &str) -> &str {
        self.0.get(id).map(String::as_str).unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
