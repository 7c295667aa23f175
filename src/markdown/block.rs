//! Display block types produced by the renderer.

use serde::{Deserialize, Serialize};

/// One unit of renderer output, in display order.
///
/// The set of block kinds is fixed and closed, so a tagged enum rather
/// than any open trait hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A `#`, `##` or `###` heading.
    Heading {
        /// Heading level, 1 through 3.
        level: u8,
        /// Heading text with the marker stripped.
        text: String,
    },
    /// A run of consecutive list items of one kind.
    List {
        /// Whether the items came from bullet or numbered markers.
        #[serde(rename = "list_kind")]
        kind: ListKind,
        /// Item bodies with their markers stripped, in input order.
        items: Vec<String>,
    },
    /// A single line of inline content.
    Paragraph {
        /// Inline spans in display order.
        spans: Vec<Span>,
    },
    /// A vertical gap produced by a blank input line.
    Spacer,
}

/// List flavor for a [`Block::List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// `- ` or `* ` bullet items.
    Unordered,
    /// `1. `-style numbered items; the numeric labels are discarded.
    Ordered,
}

/// Inline fragment of a [`Block::Paragraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    /// Plain text.
    Text(String),
    /// Emphasized text from a `**bold**` delimiter pair.
    Strong(String),
    /// Inline code from a backtick pair.
    Code(String),
}

impl Block {
    /// Convenience constructor for a paragraph holding one plain span.
    pub fn text_paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            spans: vec![Span::Text(text.into())],
        }
    }
}
