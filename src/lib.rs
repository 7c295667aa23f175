//! # pr-draft
//!
//! Turns a free-text block of commit messages into a formatted pull
//! request description, and renders that description as styled terminal
//! output through a small line-oriented markdown subset.
//!
//! The two core pieces are pure functions:
//!
//! - [`pr::generate_description`] classifies commit lines by their
//!   conventional-commit prefix and assembles the four-section
//!   description (Summary, Changes, Testing, Checklist).
//! - [`markdown::render`] scans the description line by line and
//!   produces an ordered sequence of display [`markdown::Block`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use pr_draft::pr::{generate_description, PrFlags};
//!
//! let text = generate_description("feat: add login\nfix: crash on start", PrFlags::default());
//! let blocks = pr_draft::markdown::render(&text);
//! assert!(!blocks.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod markdown;
pub mod pr;

pub use crate::cli::Cli;

/// The current version of pr-draft.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
