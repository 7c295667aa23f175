//! Styled terminal output for rendered blocks.
//!
//! Mirrors the look of the generated description in a terminal: cyan
//! section headings, green body text, highlighted bold and code spans.

use termcolor::{Color, ColorSpec, WriteColor};

use crate::markdown::{Block, ListKind, Span};

/// Writes a block sequence to a color-capable writer.
///
/// When the writer has colors disabled the same text is emitted plain, so
/// output degrades cleanly in pipes.
pub fn write_blocks<W: WriteColor>(out: &mut W, blocks: &[Block]) -> std::io::Result<()> {
    for block in blocks {
        match block {
            Block::Heading { level, text } => write_heading(out, *level, text)?,
            Block::List { kind, items } => write_list(out, *kind, items)?,
            Block::Paragraph { spans } => write_paragraph(out, spans)?,
            Block::Spacer => writeln!(out)?,
        }
    }
    out.reset()
}

fn write_heading<W: WriteColor>(out: &mut W, level: u8, text: &str) -> std::io::Result<()> {
    // Top-level and section headings in cyan, subsections in green,
    // matching the body color they introduce.
    let color = if level == 3 { Color::Green } else { Color::Cyan };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    writeln!(out, "{text}")?;
    out.reset()
}

fn write_list<W: WriteColor>(out: &mut W, kind: ListKind, items: &[String]) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    for (i, item) in items.iter().enumerate() {
        match kind {
            ListKind::Unordered => writeln!(out, "  • {item}")?,
            ListKind::Ordered => writeln!(out, "  {}. {item}", i + 1)?,
        }
    }
    out.reset()
}

fn write_paragraph<W: WriteColor>(out: &mut W, spans: &[Span]) -> std::io::Result<()> {
    for span in spans {
        match span {
            Span::Text(text) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(out, "{text}")?;
            }
            Span::Strong(text) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
                write!(out, "{text}")?;
            }
            Span::Code(text) => {
                out.set_color(
                    ColorSpec::new()
                        .set_fg(Some(Color::Cyan))
                        .set_intense(true),
                )?;
                write!(out, "{text}")?;
            }
        }
    }
    out.reset()?;
    writeln!(out)
}
