//! Tag data types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-side identifier of a tag.
///
/// The backend hands these out as numbers or strings; both are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagId::Number(n) => write!(f, "{}", n),
            TagId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for TagId {
    fn from(value: i64) -> Self {
        TagId::Number(value)
    }
}

impl From<&str> for TagId {
    fn from(value: &str) -> Self {
        TagId::Text(value.to_string())
    }
}

/// A label attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Display label, unique within a tag list
    pub name: String,

    /// Present when the tag is known to the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<TagId>,
}

impl Tag {
    /// An ad-hoc tag typed by the user.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_id: None,
        }
    }

    pub fn with_id(name: impl Into<String>, tag_id: impl Into<TagId>) -> Self {
        Self {
            name: name.into(),
            tag_id: Some(tag_id.into()),
        }
    }
}

/// A match returned by the suggestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    #[serde(default)]
    pub tag_id: Option<TagId>,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, tag_id: impl Into<TagId>) -> Self {
        Self {
            name: name.into(),
            tag_id: Some(tag_id.into()),
        }
    }
}

impl From<&Suggestion> for Tag {
    fn from(suggestion: &Suggestion) -> Self {
        Tag {
            name: suggestion.name.clone(),
            tag_id: suggestion.tag_id.clone(),
        }
    }
}

/// Tags as handed over by callers seeding a list.
///
/// Existing transactions carry either bare names or `{name, tag_id}`
/// objects. Both are accepted here and normalized into [`Tag`] before
/// anything else sees them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TagInput {
    Name(String),
    Tag(Tag),
}

impl TagInput {
    /// Normalize into a [`Tag`], trimming the name.
    ///
    /// Returns `None` when the name is blank.
    pub fn normalize(self) -> Option<Tag> {
        let (name, tag_id) = match self {
            TagInput::Name(name) => (name, None),
            TagInput::Tag(tag) => (tag.name, tag.tag_id),
        };
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Tag {
            name: trimmed.to_string(),
            tag_id,
        })
    }
}

impl From<&str> for TagInput {
    fn from(value: &str) -> Self {
        TagInput::Name(value.to_string())
    }
}

impl From<String> for TagInput {
    fn from(value: String) -> Self {
        TagInput::Name(value)
    }
}

impl From<Tag> for TagInput {
    fn from(value: Tag) -> Self {
        TagInput::Tag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_without_id_omits_field() {
        let json = serde_json::to_value(Tag::new("employer1")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "employer1" }));
    }

    #[test]
    fn test_tag_input_accepts_both_shapes() {
        let inputs: Vec<TagInput> =
            serde_json::from_str(r#"["rent", {"name": "food", "tag_id": 4}, {"name": "x", "tag_id": "t-9"}]"#)
                .unwrap();
        let tags: Vec<Tag> = inputs.into_iter().filter_map(TagInput::normalize).collect();
        assert_eq!(
            tags,
            vec![
                Tag::new("rent"),
                Tag::with_id("food", 4),
                Tag::with_id("x", "t-9"),
            ]
        );
    }

    #[test]
    fn test_blank_input_normalizes_to_none() {
        assert_eq!(TagInput::from("   ").normalize(), None);
        assert_eq!(
            TagInput::from("  rent ").normalize(),
            Some(Tag::new("rent"))
        );
    }

    #[test]
    fn test_suggestion_without_id_deserializes() {
        let suggestion: Suggestion = serde_json::from_str(r#"{"name": "employer"}"#).unwrap();
        assert_eq!(suggestion.tag_id, None);
    }

    #[test]
    fn test_tag_id_display() {
        assert_eq!(TagId::from(12).to_string(), "12");
        assert_eq!(TagId::from("abc").to_string(), "abc");
    }
}
