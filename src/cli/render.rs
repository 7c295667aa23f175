//! Render command — arbitrary markdown text to styled blocks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use termcolor::StandardStream;
use tracing::debug;

use crate::cli::display::write_blocks;
use crate::cli::ColorMode;
use crate::markdown::render;

/// Render command options.
#[derive(Parser)]
pub struct RenderCommand {
    /// File to render (reads stdin when omitted).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Prints the block sequence as JSON instead of styled text.
    #[arg(long)]
    pub json: bool,
}

impl RenderCommand {
    /// Executes the render command.
    pub fn execute(self, color: ColorMode) -> Result<()> {
        let input = super::read_input(self.file.as_deref())?;

        let blocks = render(&input);
        debug!(block_count = blocks.len(), "Rendered input");

        if self.json {
            let json = serde_json::to_string_pretty(&blocks)
                .context("Failed to serialize blocks to JSON")?;
            println!("{json}");
        } else {
            let mut stdout = StandardStream::stdout(color.stdout_choice());
            write_blocks(&mut stdout, &blocks)?;
        }

        Ok(())
    }
}
