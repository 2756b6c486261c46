//! Value objects produced by the message formatter.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Literal emitted by [`ParsedMessage::to_plain_text`] for database indicators.
pub const DATABASE_MARKER: &str = "(from our database)";

// ============ Segment Types ============

/// Kind of a [`MessageSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    Text,
    Bold,
    Italic,
    Bullet,
    NumberedList,
    DatabaseIndicator,
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Bold => write!(f, "bold"),
            Self::Italic => write!(f, "italic"),
            Self::Bullet => write!(f, "bullet"),
            Self::NumberedList => write!(f, "numbered_list"),
            Self::DatabaseIndicator => write!(f, "database_indicator"),
        }
    }
}

/// Kind-specific auxiliary data of a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentMetadata {
    /// List index as written (numbered list items only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number: Option<u64>,
    /// Business the indicator refers to, when it could be resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_name: Option<String>,
}

impl SegmentMetadata {
    pub fn number(&self) -> Option<u64> {
        self.number
    }

    pub fn business_name(&self) -> Option<&str> {
        self.business_name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.business_name.is_none()
    }
}

// ============ Segments ============

/// One classified span of a parsed message.
///
/// Segments are immutable: fields are only reachable through accessors, and
/// the constructors guarantee that metadata matches the segment kind.
/// Deserialization goes through the same constructors and rejects metadata
/// that does not belong to the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSegment")]
pub struct MessageSegment {
    #[serde(rename = "type")]
    segment_type: SegmentType,
    content: String,
    metadata: SegmentMetadata,
}

/// Wire form of a segment, checked before it becomes a [`MessageSegment`].
#[derive(Deserialize)]
struct RawSegment {
    #[serde(rename = "type")]
    segment_type: SegmentType,
    content: String,
    #[serde(default)]
    metadata: SegmentMetadata,
}

impl TryFrom<RawSegment> for MessageSegment {
    type Error = String;

    fn try_from(raw: RawSegment) -> std::result::Result<Self, Self::Error> {
        let RawSegment {
            segment_type,
            content,
            metadata,
        } = raw;
        let SegmentMetadata {
            number,
            business_name,
        } = metadata;

        if number.is_some() && segment_type != SegmentType::NumberedList {
            return Err(format!("{} segment cannot carry a number", segment_type));
        }
        if business_name.is_some() && segment_type != SegmentType::DatabaseIndicator {
            return Err(format!(
                "{} segment cannot carry a businessName",
                segment_type
            ));
        }

        match segment_type {
            SegmentType::NumberedList => match number {
                Some(number) => Ok(Self::numbered(number, content)),
                None => Err("numbered_list segment is missing its number".to_string()),
            },
            SegmentType::DatabaseIndicator if !content.is_empty() => {
                Err("database_indicator segment must have empty content".to_string())
            }
            SegmentType::DatabaseIndicator => Ok(Self::database_indicator(business_name)),
            _ => Ok(Self::plain(segment_type, content)),
        }
    }
}

impl MessageSegment {
    fn plain(segment_type: SegmentType, content: impl Into<String>) -> Self {
        Self {
            segment_type,
            content: content.into(),
            metadata: SegmentMetadata::default(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::plain(SegmentType::Text, content)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::plain(SegmentType::Bold, content)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::plain(SegmentType::Italic, content)
    }

    pub fn bullet(content: impl Into<String>) -> Self {
        Self::plain(SegmentType::Bullet, content)
    }

    pub fn numbered(number: u64, content: impl Into<String>) -> Self {
        Self {
            segment_type: SegmentType::NumberedList,
            content: content.into(),
            metadata: SegmentMetadata {
                number: Some(number),
                business_name: None,
            },
        }
    }

    /// A database attribution. `business_name` is `None` when no name could
    /// be resolved from the surrounding text.
    pub fn database_indicator(business_name: Option<String>) -> Self {
        Self {
            segment_type: SegmentType::DatabaseIndicator,
            content: String::new(),
            metadata: SegmentMetadata {
                number: None,
                business_name,
            },
        }
    }

    pub fn segment_type(&self) -> SegmentType {
        self.segment_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn metadata(&self) -> &SegmentMetadata {
        &self.metadata
    }

    pub fn number(&self) -> Option<u64> {
        self.metadata.number
    }

    pub fn business_name(&self) -> Option<&str> {
        self.metadata.business_name()
    }

    pub fn is_list_item(&self) -> bool {
        matches!(
            self.segment_type,
            SegmentType::Bullet | SegmentType::NumberedList
        )
    }

    /// Whether the segment carries meaning even with empty content.
    fn is_structural(&self) -> bool {
        self.is_list_item() || self.segment_type == SegmentType::DatabaseIndicator
    }

    fn write_plain(&self, out: &mut String) {
        match self.segment_type {
            SegmentType::DatabaseIndicator => out.push_str(DATABASE_MARKER),
            SegmentType::Bullet => {
                out.push_str("• ");
                out.push_str(&self.content);
            }
            SegmentType::NumberedList => {
                if let Some(number) = self.metadata.number {
                    out.push_str(&number.to_string());
                    out.push_str(". ");
                }
                out.push_str(&self.content);
            }
            SegmentType::Text | SegmentType::Bold | SegmentType::Italic => {
                out.push_str(&self.content)
            }
        }
    }
}

// ============ Parsed Message ============

/// Ordered segments of one chat message, in reading order of the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    segments: Vec<MessageSegment>,
}

impl ParsedMessage {
    pub fn new(segments: Vec<MessageSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[MessageSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageSegment> {
        self.segments.iter()
    }

    pub fn has_database_references(&self) -> bool {
        self.segments
            .iter()
            .any(|s| s.segment_type == SegmentType::DatabaseIndicator)
    }

    /// Names attached to database indicators, in segment order.
    pub fn database_business_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|s| s.segment_type == SegmentType::DatabaseIndicator)
            .filter_map(|s| s.business_name())
            .collect()
    }

    pub fn segments_by_type(&self, segment_type: SegmentType) -> Vec<&MessageSegment> {
        self.segments
            .iter()
            .filter(|s| s.segment_type == segment_type)
            .collect()
    }

    /// Re-serializes the segments to a plain-text approximation of the source.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            segment.write_plain(&mut out);
        }
        out
    }

    /// True when nothing renderable remains.
    ///
    /// List items and database indicators count as content even when their
    /// text is empty.
    pub fn is_empty(&self) -> bool {
        self.segments
            .iter()
            .all(|s| s.content.trim().is_empty() && !s.is_structural())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for ParsedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_text())
    }
}

impl<'a> IntoIterator for &'a ParsedMessage {
    type Item = &'a MessageSegment;
    type IntoIter = std::slice::Iter<'a, MessageSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
