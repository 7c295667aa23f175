//! Line-by-line renderer for the restricted markdown subset.

use std::sync::LazyLock;

use regex::Regex;

use crate::markdown::block::{Block, ListKind, Span};

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static UNORDERED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static ORDERED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Items of the list currently being collected, if any.
///
/// Re-expresses the renderer's single piece of scan state as an explicit
/// accumulator: consecutive items of one kind merge into a single
/// [`Block::List`], and any other line kind (or a kind switch) flushes it.
#[derive(Debug, Default)]
struct ListAccumulator {
    kind: Option<ListKind>,
    items: Vec<String>,
}

impl ListAccumulator {
    /// Appends an item, flushing first if the open list has another kind.
    fn push(&mut self, kind: ListKind, item: String, out: &mut Vec<Block>) {
        if self.kind != Some(kind) {
            self.flush(out);
            self.kind = Some(kind);
        }
        self.items.push(item);
    }

    /// Emits the pending list as a completed block. No-op when nothing is
    /// pending.
    fn flush(&mut self, out: &mut Vec<Block>) {
        if let Some(kind) = self.kind.take() {
            out.push(Block::List {
                kind,
                items: std::mem::take(&mut self.items),
            });
        }
    }
}

/// Renders text into an ordered sequence of display blocks.
///
/// Single pass over the input split on newlines; per line, the first
/// matching rule wins: heading markers, then list markers, then code
/// fences, then bold delimiters, then blank lines, then plain paragraphs.
/// Total and stateless, so callers may re-render growing prefixes of a
/// document to simulate streaming.
pub fn render(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending = ListAccumulator::default();

    for line in text.split('\n') {
        // Most specific heading marker first so "### " is never consumed
        // as a level-1 heading.
        if let Some(rest) = line.strip_prefix("### ") {
            pending.flush(&mut blocks);
            blocks.push(Block::Heading {
                level: 3,
                text: rest.to_string(),
            });
        } else if let Some(rest) = line.strip_prefix("## ") {
            pending.flush(&mut blocks);
            blocks.push(Block::Heading {
                level: 2,
                text: rest.to_string(),
            });
        } else if let Some(rest) = line.strip_prefix("# ") {
            pending.flush(&mut blocks);
            blocks.push(Block::Heading {
                level: 1,
                text: rest.to_string(),
            });
        } else if let Some(m) = UNORDERED_MARKER.find(line) {
            pending.push(ListKind::Unordered, line[m.end()..].to_string(), &mut blocks);
        } else if let Some(m) = ORDERED_MARKER.find(line) {
            // The numeric label is discarded; only the body survives.
            pending.push(ListKind::Ordered, line[m.end()..].to_string(), &mut blocks);
        } else if line.starts_with("```") {
            // Fence markers are dropped. Fence bodies are not tracked, so
            // code-block content falls through to the paragraph rules on
            // subsequent lines.
            pending.flush(&mut blocks);
        } else if line.contains("**") {
            pending.flush(&mut blocks);
            blocks.push(Block::Paragraph {
                spans: delimited_spans(line, "**", Span::Strong),
            });
        } else if line.trim().is_empty() {
            pending.flush(&mut blocks);
            blocks.push(Block::Spacer);
        } else if line.contains('`') {
            pending.flush(&mut blocks);
            blocks.push(Block::Paragraph {
                spans: delimited_spans(line, "`", Span::Code),
            });
        } else {
            pending.flush(&mut blocks);
            blocks.push(Block::text_paragraph(line));
        }
    }

    pending.flush(&mut blocks);
    blocks
}

/// Splits a line on a delimiter, mapping odd-indexed segments through
/// `marked` and even-indexed segments to plain text. Empty segments
/// produce no span.
fn delimited_spans(line: &str, delimiter: &str, marked: fn(String) -> Span) -> Vec<Span> {
    line.split(delimiter)
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(i, segment)| {
            if i % 2 == 1 {
                marked(segment.to_string())
            } else {
                Span::Text(segment.to_string())
            }
        })
        .collect()
}
