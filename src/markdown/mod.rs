//! Restricted markdown rendering.
//!
//! Only the fixed subset of syntax the description generator emits is
//! recognized: `#`/`##`/`###` headings, `-`/`*` and numbered list items,
//! `**bold**` and `` `code` `` inline spans, and blank-line spacers.
//! Anything else renders as a plain paragraph.

pub mod block;
pub mod render;

pub use block::{Block, ListKind, Span};
pub use render::render;
