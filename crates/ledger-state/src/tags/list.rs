//! Ordered, name-unique tag list.

use serde::Serialize;

use super::types::{Suggestion, Tag, TagInput};
use crate::error::{LedgerError, Result};

/// Tags attached to the transaction being edited.
///
/// Names are unique (case-sensitive). Every mutation either applies fully
/// or leaves the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from caller-provided tags in either accepted shape.
    ///
    /// Blank names are dropped and the first occurrence of a name wins.
    pub fn from_inputs<I, T>(inputs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
    {
        let mut list = Self::new();
        for tag in inputs.into_iter().filter_map(|i| i.into().normalize()) {
            list.push_unique(tag);
        }
        list
    }

    /// Append an ad-hoc tag.
    ///
    /// Returns `false` (and does nothing) when the trimmed name is empty or
    /// already present.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.push_unique(Tag::new(name))
    }

    /// Append a server-known tag verbatim.
    ///
    /// Returns `false` (and does nothing) when the name is blank or already
    /// present.
    pub fn add_suggestion(&mut self, suggestion: &Suggestion) -> bool {
        if suggestion.name.trim().is_empty() {
            return false;
        }
        self.push_unique(Tag::from(suggestion))
    }

    /// Remove and return the tag at `index`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` if `index` is out of range; the
    /// list is not modified.
    pub fn remove(&mut self, index: usize) -> Result<Tag> {
        if index >= self.tags.len() {
            return Err(LedgerError::InvalidInput(format!(
                "Tag index {} out of range (list has {} tags)",
                index,
                self.tags.len()
            )));
        }
        Ok(self.tags.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn into_vec(self) -> Vec<Tag> {
        self.tags
    }

    fn push_unique(&mut self, tag: Tag) -> bool {
        if self.contains(&tag.name) {
            return false;
        }
        self.tags.push(tag);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_appends() {
        let mut list = TagList::new();
        assert!(list.add("  employer1 "));
        assert_eq!(list.as_slice(), &[Tag::new("employer1")]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TagList::new();
        assert!(!list.add(""));
        assert!(!list.add("   "));
        assert!(list.is_empty());
    }

    #[test]
    fn test_names_stay_unique() {
        let mut list = TagList::new();
        for name in ["rent", "food", "rent", " food", "Rent"] {
            list.add(name);
        }
        assert_eq!(list.names(), vec!["rent", "food", "Rent"]);
    }

    #[test]
    fn test_add_suggestion_keeps_id() {
        let mut list = TagList::new();
        assert!(list.add_suggestion(&Suggestion::new("employer", 7)));
        assert!(!list.add_suggestion(&Suggestion::new("employer", 8)));
        assert_eq!(list.as_slice(), &[Tag::with_id("employer", 7)]);
    }

    #[test]
    fn test_add_suggestion_rejects_blank_name() {
        let mut list = TagList::new();
        assert!(!list.add_suggestion(&Suggestion::new("   ", 1)));
        assert!(!list.add_suggestion(&Suggestion::new("", 2)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_suggestion_does_not_duplicate_typed_tag() {
        let mut list = TagList::new();
        list.add("employer");
        assert!(!list.add_suggestion(&Suggestion::new("employer", 7)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_in_range() {
        let mut list = TagList::from_inputs(["tag1"]);
        let removed = list.remove(0).unwrap();
        assert_eq!(removed, Tag::new("tag1"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_out_of_range_leaves_list() {
        let mut list = TagList::from_inputs(["a", "b"]);
        assert!(matches!(list.remove(2), Err(LedgerError::InvalidInput(_))));
        assert_eq!(list.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_from_inputs_dedupes_mixed_shapes() {
        let list = TagList::from_inputs(vec![
            TagInput::from("food"),
            TagInput::from(Tag::with_id("food", 3)),
            TagInput::from(Tag::with_id("rent", 4)),
            TagInput::from(" "),
        ]);
        assert_eq!(list.as_slice(), &[Tag::new("food"), Tag::with_id("rent", 4)]);
    }

    #[test]
    fn test_serializes_as_array() {
        let list = TagList::from_inputs(["employer1"]);
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"[{"name":"employer1"}]"#
        );
    }
}
