//! The pipeline runner: an ordered list of steps executed against one
//! shared context.

use crate::context::MarkdownContext;
use crate::error::ProcessError;
use crate::extract::HeadingExtractor;
use crate::inject::AnchorInjector;
use crate::slug::{SlugMapper, SlugStrategy};
use crate::toc::TocGenerator;

/// A single transformation over the shared processing context.
pub trait ProcessingStep {
    /// Read and/or mutate the context in place.
    fn process(&self, ctx: &mut MarkdownContext) -> Result<(), ProcessError>;
}

/// An ordered sequence of processing steps.
///
/// Steps run strictly in registration order, every step against the same
/// context; nothing is skipped or reordered. Order matters: the TOC
/// generator and anchor injector read state the extractor and slug mapper
/// populated earlier.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step, returning the pipeline for chaining.
    pub fn add_step(mut self, step: impl ProcessingStep + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Runs every registered step in order, stopping at the first error.
    pub fn process(&self, ctx: &mut MarkdownContext) -> Result<(), ProcessError> {
        log::debug!("running {} pipeline steps", self.steps.len());
        for step in &self.steps {
            step.process(ctx)?;
        }
        Ok(())
    }

    /// The standard pipeline: heading extraction, slug mapping, TOC
    /// generation, anchor injection, in that fixed order.
    pub fn standard(strategy: impl SlugStrategy + 'static) -> Self {
        Self::new()
            .add_step(HeadingExtractor)
            .add_step(SlugMapper::new(strategy))
            .add_step(TocGenerator)
            .add_step(AnchorInjector)
    }
}
