//! ATX heading extraction.

use crate::context::MarkdownContext;
use crate::error::ProcessError;
use crate::pipeline::ProcessingStep;

/// Parses a line as an ATX heading: 1-6 `#` characters, exactly one space,
/// then a non-empty remainder. The line is trimmed first, so indented
/// headings are recognized.
///
/// Returns the level and the heading text (hash run and the single following
/// space removed). Seven or more hashes, `#hashtag`, and a bare `#` run do
/// not match. Lines inside fenced code blocks are not excluded; a `#` line
/// inside a fence still counts as a heading.
pub(crate) fn parse_atx_heading(line: &str) -> Option<(u8, &str)> {
    let trimmed = line.trim();
    let hashes = trimmed.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = trimmed[hashes..].strip_prefix(' ')?;
    if rest.is_empty() {
        return None;
    }
    Some((hashes as u8, rest))
}

/// Pipeline step that scans the document for ATX headings and records text,
/// level, and source line index in encounter order.
///
/// The recorded line indices are the single source of truth for heading
/// positions; the anchor injector consumes them instead of re-running
/// detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingExtractor;

impl ProcessingStep for HeadingExtractor {
    fn process(&self, ctx: &mut MarkdownContext) -> Result<(), ProcessError> {
        for (index, line) in ctx.content.lines().enumerate() {
            if let Some((level, text)) = parse_atx_heading(line) {
                ctx.heading_levels.push(level);
                ctx.headings.push(text.to_string());
                ctx.heading_lines.push(index);
            }
        }
        log::debug!("extracted {} headings", ctx.heading_count());
        Ok(())
    }
}
