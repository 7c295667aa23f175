//! CLI interface for pr-draft.
//!
//! The commands here are thin plumbing around the pure core: they read a
//! text blob, call into [`crate::pr`] / [`crate::markdown`], and print the
//! result. No state survives between invocations.

use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use termcolor::ColorChoice;

pub mod display;
pub mod generate;
pub mod render;

/// pr-draft: commit messages in, pull request description out.
#[derive(Parser)]
#[command(name = "pr-draft")]
#[command(about = "Turn commit messages into a pull request description", long_about = None)]
#[command(version)]
pub struct Cli {
    /// When to color rendered output.
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a pull request description from commit messages.
    Generate(generate::GenerateCommand),
    /// Render markdown text as styled terminal blocks.
    Render(render::RenderCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(generate_cmd) => generate_cmd.execute(self.color),
            Commands::Render(render_cmd) => render_cmd.execute(self.color),
        }
    }
}

/// Color behavior selected with `--color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    Auto,
    /// Always emit color escapes.
    Always,
    /// Never emit color escapes.
    Never,
}

impl ColorMode {
    /// Maps the CLI option onto a termcolor choice for stdout.
    pub fn stdout_choice(self) -> ColorChoice {
        match self {
            Self::Auto => {
                if std::io::stdout().is_terminal() {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
            Self::Always => ColorChoice::Always,
            Self::Never => ColorChoice::Never,
        }
    }
}

/// Reads command input from a file, or from stdin when no path was given.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}
