//! Generate command — commit messages to pull request description.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use termcolor::StandardStream;
use tracing::debug;

use crate::cli::display::write_blocks;
use crate::cli::ColorMode;
use crate::markdown::render;
use crate::pr::{generate_description, PrFlags};

/// Generate command options.
#[derive(Parser)]
pub struct GenerateCommand {
    /// File with one commit message per line (reads stdin when omitted).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Marks the change set as containing breaking changes.
    #[arg(long)]
    pub breaking_change: bool,

    /// Marks the change set as having tests added or updated.
    #[arg(long)]
    pub tests_added: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "ansi")]
    pub format: OutputFormat,
}

/// How the generated description is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered blocks with terminal styling.
    Ansi,
    /// The raw markdown text, suitable for pasting into a PR form.
    Markdown,
}

impl GenerateCommand {
    /// Executes the generate command.
    pub fn execute(self, color: ColorMode) -> Result<()> {
        let input = super::read_input(self.file.as_deref())?;

        let flags = PrFlags {
            breaking_change: self.breaking_change,
            tests_added: self.tests_added,
        };
        debug!(
            input_lines = input.lines().count(),
            ?flags,
            "Generating PR description"
        );

        let description = generate_description(&input, flags);

        match self.format {
            OutputFormat::Markdown => print!("{description}"),
            OutputFormat::Ansi => {
                let blocks = render(&description);
                debug!(block_count = blocks.len(), "Rendered description");
                let mut stdout = StandardStream::stdout(color.stdout_choice());
                write_blocks(&mut stdout, &blocks)?;
            }
        }

        Ok(())
    }
}
