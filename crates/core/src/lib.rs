#![deny(missing_docs)]
//! mdslug core: heading extraction, slug generation, TOC rendering, and
//! anchor injection for markdown documents.
//!
//! Only ATX-style heading lines (`#` through `######` followed by a space)
//! are recognized; everything else passes through unexamined. The caller
//! supplies a document string in a [`MarkdownContext`], runs a [`Pipeline`]
//! over it, and reads the enriched fields back out.

/// Shared processing state threaded through the pipeline.
pub mod context;
/// Configuration and pipeline errors.
pub mod error;
/// ATX heading extraction.
pub mod extract;
/// Anchor identifier injection.
pub mod inject;
/// The pipeline runner and step trait.
pub mod pipeline;
/// Slug generation and the heading-to-slug mapping step.
pub mod slug;
/// Table-of-contents rendering.
pub mod toc;

pub use context::MarkdownContext;
pub use error::ProcessError;
pub use extract::HeadingExtractor;
pub use inject::AnchorInjector;
pub use pipeline::{Pipeline, ProcessingStep};
pub use slug::{DefaultSlugStrategy, SlugConfig, SlugMapper, SlugStrategy};
pub use toc::TocGenerator;

/// Runs the standard pipeline over a document with the given slug
/// configuration, returning the enriched context.
///
/// Convenience wrapper for the common case; use [`Pipeline`] directly to
/// register custom steps or a custom [`SlugStrategy`].
pub fn process_document(
    content: impl Into<String>,
    config: SlugConfig,
) -> Result<MarkdownContext, ProcessError> {
    let strategy = DefaultSlugStrategy::new(config)?;
    let mut ctx = MarkdownContext::new(content);
    Pipeline::standard(strategy).process(&mut ctx)?;
    Ok(ctx)
}
