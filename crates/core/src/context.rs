//! Shared processing state threaded through the pipeline.

/// Mutable state for one document run.
///
/// A context is created per document and handed by `&mut` to every pipeline
/// step in turn; each step reads fields populated by earlier steps and
/// appends its own results. The three heading vectors plus `heading_lines`
/// are positionally correlated: index `i` always describes the same heading.
/// Contexts are single-owner and not meant to be shared across threads while
/// a run is in flight.
#[derive(Debug, Clone, Default)]
pub struct MarkdownContext {
    /// Document text. Starts as the raw input and is replaced in full by the
    /// anchor injector.
    pub content: String,
    /// Heading text in document order.
    pub headings: Vec<String>,
    /// Heading levels (1-6), parallel to `headings`.
    pub heading_levels: Vec<u8>,
    /// Zero-based source line index of each heading, parallel to `headings`.
    ///
    /// Recorded once during extraction so the injector can locate heading
    /// lines without re-running detection.
    pub heading_lines: Vec<usize>,
    /// Slugs, parallel to `headings` once mapping has run.
    pub slugs: Vec<String>,
    /// Rendered table of contents, empty until generated.
    pub toc: String,
}

impl MarkdownContext {
    /// Creates a context for the given document.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Number of headings extracted so far.
    pub fn heading_count(&self) -> usize {
        self.headings.len()
    }
}
