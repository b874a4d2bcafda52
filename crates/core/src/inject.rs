//! Anchor injection: rewriting heading lines with `{#slug}` identifiers.

use crate::context::MarkdownContext;
use crate::error::ProcessError;
use crate::pipeline::ProcessingStep;

/// Pipeline step that rewrites the document so every extracted heading line
/// carries an explicit anchor: `## Heading {#slug}`.
///
/// Heading lines are located by the line indices the extractor recorded, not
/// by re-matching the heading pattern, so injection can never drift out of
/// sync with the extraction pass. The hash prefix is rebuilt from the
/// recorded level; any indentation the original line had is dropped, and
/// every output line is newline-terminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorInjector;

impl ProcessingStep for AnchorInjector {
    fn process(&self, ctx: &mut MarkdownContext) -> Result<(), ProcessError> {
        ensure_parallel(ctx)?;

        let mut rewritten = String::with_capacity(ctx.content.len());
        let mut next = 0usize;
        for (index, line) in ctx.content.lines().enumerate() {
            if next < ctx.heading_lines.len() && ctx.heading_lines[next] == index {
                let level = usize::from(ctx.heading_levels[next]);
                rewritten.push_str(&"#".repeat(level));
                rewritten.push(' ');
                rewritten.push_str(&ctx.headings[next]);
                rewritten.push_str(" {#");
                rewritten.push_str(&ctx.slugs[next]);
                rewritten.push('}');
                next += 1;
            } else {
                rewritten.push_str(line);
            }
            rewritten.push('\n');
        }
        ctx.content = rewritten;
        Ok(())
    }
}

fn ensure_parallel(ctx: &MarkdownContext) -> Result<(), ProcessError> {
    let headings = ctx.headings.len();
    if ctx.heading_lines.len() != headings
        || ctx.heading_levels.len() != headings
        || ctx.slugs.len() != headings
    {
        return Err(ProcessError::inconsistent(format!(
            "{} headings, {} lines, {} levels, {} slugs",
            headings,
            ctx.heading_lines.len(),
            ctx.heading_levels.len(),
            ctx.slugs.len()
        )));
    }
    Ok(())
}
