//! Commit classification and pull request description synthesis.
//!
//! [`parse_commits`] turns a raw text blob into classified commit lines;
//! [`generate_description`] assembles them into the final description.
//! Both are pure functions with no retained state between calls.

pub mod classify;
pub mod describe;

pub use classify::{parse_commits, Category, CommitLine};
pub use describe::{generate_description, PrFlags};
