//! Table-of-contents rendering.

use crate::context::MarkdownContext;
use crate::error::ProcessError;
use crate::pipeline::ProcessingStep;

/// Pipeline step that renders headings, levels, and slugs into a nested
/// markdown bullet list stored in `ctx.toc`.
///
/// Indentation is two spaces per level below one, derived from the absolute
/// heading level rather than relative nesting: a jump from level 1 straight
/// to level 3 indents by two units. Each emitted line is newline-terminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct TocGenerator;

impl ProcessingStep for TocGenerator {
    fn process(&self, ctx: &mut MarkdownContext) -> Result<(), ProcessError> {
        ensure_parallel(ctx)?;

        let mut toc = String::new();
        for ((heading, slug), level) in ctx
            .headings
            .iter()
            .zip(&ctx.slugs)
            .zip(&ctx.heading_levels)
        {
            let indent = "  ".repeat(usize::from(level.saturating_sub(1)));
            toc.push_str(&indent);
            toc.push_str("- [");
            toc.push_str(heading);
            toc.push_str("](#");
            toc.push_str(slug);
            toc.push_str(")\n");
        }
        ctx.toc = toc;
        Ok(())
    }
}

fn ensure_parallel(ctx: &MarkdownContext) -> Result<(), ProcessError> {
    let headings = ctx.headings.len();
    if ctx.heading_levels.len() != headings || ctx.slugs.len() != headings {
        return Err(ProcessError::inconsistent(format!(
            "{} headings, {} levels, {} slugs",
            headings,
            ctx.heading_levels.len(),
            ctx.slugs.len()
        )));
    }
    Ok(())
}
