//! Commit line classification by conventional-commit prefix.

use serde::{Deserialize, Serialize};

/// Classification bucket for a commit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// `feat:` / `feature:` prefixed commits.
    Feature,
    /// `fix:` prefixed commits.
    Fix,
    /// `chore:` prefixed commits.
    Chore,
    /// `docs:` / `doc:` prefixed commits.
    Doc,
    /// Everything without a recognized prefix.
    Other,
}

/// Prefix tokens checked against the start of each line, in priority order.
///
/// The longer spelling of a pair comes first so that `feature:` is never
/// half-consumed by a `feat:` match (same for `docs:` over `doc:`).
const PREFIXES: &[(&str, Category)] = &[
    ("feature:", Category::Feature),
    ("feat:", Category::Feature),
    ("fix:", Category::Fix),
    ("chore:", Category::Chore),
    ("docs:", Category::Doc),
    ("doc:", Category::Doc),
];

/// A single non-empty, trimmed line of commit input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLine {
    /// The trimmed line exactly as written.
    pub raw: String,
    /// Category derived from the line's prefix.
    pub category: Category,
    /// Line text with the category prefix stripped. For [`Category::Other`]
    /// this is the full raw text.
    pub body: String,
}

impl CommitLine {
    /// Classifies a single trimmed, non-empty line.
    fn classify(line: &str) -> Self {
        for (prefix, category) in PREFIXES {
            // Prefixes are pure ASCII, so an ASCII-case-insensitive byte
            // comparison is both correct and a guaranteed char boundary.
            if line.len() >= prefix.len()
                && line.is_char_boundary(prefix.len())
                && line[..prefix.len()].eq_ignore_ascii_case(prefix)
            {
                let body = line[prefix.len()..].trim_start().to_string();
                return Self {
                    raw: line.to_string(),
                    category: *category,
                    body,
                };
            }
        }

        Self {
            raw: line.to_string(),
            category: Category::Other,
            body: line.to_string(),
        }
    }
}

/// Splits raw input into classified commit lines.
///
/// Lines are trimmed and empty lines dropped before classification, so
/// whitespace-only input yields no commits. The relative order of surviving
/// lines is preserved.
pub fn parse_commits(raw: &str) -> Vec<CommitLine> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(CommitLine::classify)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── prefix matching ──────────────────────────────────────────────

    #[test]
    fn feat_prefix() {
        let commits = parse_commits("feat: add login");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].category, Category::Feature);
        assert_eq!(commits[0].body, "add login");
    }

    #[test]
    fn feature_prefix_long_form() {
        let commits = parse_commits("feature: add login");
        assert_eq!(commits[0].category, Category::Feature);
        assert_eq!(commits[0].body, "add login");
    }

    #[test]
    fn fix_prefix() {
        let commits = parse_commits("fix: crash on start");
        assert_eq!(commits[0].category, Category::Fix);
        assert_eq!(commits[0].body, "crash on start");
    }

    #[test]
    fn docs_and_doc_prefixes_share_category() {
        let commits = parse_commits("docs: update readme\ndoc: fix typo");
        assert_eq!(commits[0].category, Category::Doc);
        assert_eq!(commits[0].body, "update readme");
        assert_eq!(commits[1].category, Category::Doc);
        assert_eq!(commits[1].body, "fix typo");
    }

    #[test]
    fn chore_prefix() {
        let commits = parse_commits("chore: bump deps");
        assert_eq!(commits[0].category, Category::Chore);
        assert_eq!(commits[0].body, "bump deps");
    }

    #[test]
    fn unprefixed_line_keeps_full_text() {
        let commits = parse_commits("refactor everything");
        assert_eq!(commits[0].category, Category::Other);
        assert_eq!(commits[0].body, "refactor everything");
        assert_eq!(commits[0].raw, "refactor everything");
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let upper = parse_commits("FIX: x");
        let lower = parse_commits("fix: x");
        assert_eq!(upper[0].category, lower[0].category);
        assert_eq!(upper[0].body, lower[0].body);
    }

    #[test]
    fn mixed_case_prefix_keeps_body_casing() {
        let commits = parse_commits("Feat: Add OAuth Login");
        assert_eq!(commits[0].category, Category::Feature);
        assert_eq!(commits[0].body, "Add OAuth Login");
    }

    #[test]
    fn prefix_without_space_still_strips() {
        let commits = parse_commits("fix:crash");
        assert_eq!(commits[0].category, Category::Fix);
        assert_eq!(commits[0].body, "crash");
    }

    #[test]
    fn prefix_with_extra_spaces_strips_all() {
        let commits = parse_commits("feat:   spaced out");
        assert_eq!(commits[0].body, "spaced out");
    }

    #[test]
    fn prefix_must_start_the_line() {
        let commits = parse_commits("see fix: later");
        assert_eq!(commits[0].category, Category::Other);
    }

    // ── line splitting ───────────────────────────────────────────────

    #[test]
    fn empty_input_yields_no_commits() {
        assert!(parse_commits("").is_empty());
    }

    #[test]
    fn whitespace_only_lines_are_dropped() {
        let commits = parse_commits("\n   \n\t\nfeat: a\n\n");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].body, "a");
    }

    #[test]
    fn lines_are_trimmed_before_classification() {
        let commits = parse_commits("   fix: indented   ");
        assert_eq!(commits[0].category, Category::Fix);
        assert_eq!(commits[0].body, "indented");
    }

    #[test]
    fn input_order_is_preserved() {
        let commits = parse_commits("feat: one\nfix: two\nfeat: three");
        let features: Vec<&str> = commits
            .iter()
            .filter(|c| c.category == Category::Feature)
            .map(|c| c.body.as_str())
            .collect();
        assert_eq!(features, vec!["one", "three"]);
    }

    // ── property tests ───────────────────────────────────────────────

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn classification_is_total(s in ".*") {
                // Never panics, and every survivor lands in a category.
                let _ = parse_commits(&s);
            }

            #[test]
            fn classification_is_deterministic(s in ".*") {
                prop_assert_eq!(parse_commits(&s), parse_commits(&s));
            }

            #[test]
            fn no_empty_commit_lines(s in ".*") {
                for commit in parse_commits(&s) {
                    prop_assert!(!commit.raw.is_empty());
                }
            }
        }
    }
}
