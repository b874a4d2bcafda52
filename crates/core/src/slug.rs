//! Slug generation: configuration, the default transform chain, and the
//! pipeline step that maps headings to slugs.

use crate::context::MarkdownContext;
use crate::error::ProcessError;
use crate::pipeline::ProcessingStep;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Capability for turning heading text into a URL-safe slug.
///
/// Implementations must be pure: the same heading always yields the same
/// slug. No cross-heading uniqueness is guaranteed; two headings that
/// normalize to the same text produce colliding slugs.
pub trait SlugStrategy {
    /// Convert one heading to a slug.
    fn to_slug(&self, heading: &str) -> String;
}

/// Configuration for [`DefaultSlugStrategy`].
///
/// Constructed once and shared read-only; a single config may serve many
/// concurrent document runs. Serde-derived so host applications can load
/// slug policy from their own configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Ordered literal substitutions applied before any other transform.
    ///
    /// Represented as a sequence of pairs, never a map: substitution order is
    /// observable (an earlier pair may produce text a later pair rewrites).
    pub replacements: Vec<(String, String)>,
    /// Lowercase the slug.
    pub to_lowercase: bool,
    /// Remove characters matched by `allowed_characters_pattern`.
    pub strip_disallowed: bool,
    /// Separator substituted for each maximal whitespace run.
    pub whitespace_replacement: String,
    /// Strip leading and trailing separator runs.
    pub trim_edges: bool,
    /// Decompose Unicode and drop combining marks, so accented letters
    /// degrade to their base letters.
    pub remove_accents: bool,
    /// Collapse runs of two or more separators into one.
    pub collapse_separators: bool,
    /// Pattern describing characters to strip when `strip_disallowed` is on.
    pub allowed_characters_pattern: String,
}

impl Default for SlugConfig {
    /// GitHub-style policy: lowercase, dash separator, accents folded,
    /// everything outside `[a-z0-9\s-]` stripped.
    fn default() -> Self {
        Self {
            replacements: Vec::new(),
            to_lowercase: true,
            strip_disallowed: true,
            whitespace_replacement: "-".to_string(),
            trim_edges: true,
            remove_accents: true,
            collapse_separators: true,
            allowed_characters_pattern: r"[^a-z0-9\s-]".to_string(),
        }
    }
}

/// The default slug transform chain.
///
/// Applies, in this fixed order: literal replacements, accent removal,
/// lowercasing, character stripping, whitespace-run replacement (always),
/// separator-run collapse, and edge trimming. Later stages assume earlier
/// ones already ran, so the order is a correctness requirement.
#[derive(Debug, Clone)]
pub struct DefaultSlugStrategy {
    config: SlugConfig,
    strip_pattern: Regex,
}

impl DefaultSlugStrategy {
    /// Builds a strategy from the given configuration, compiling the
    /// allowed-characters pattern. An invalid pattern fails here rather than
    /// on first use.
    pub fn new(config: SlugConfig) -> Result<Self, ProcessError> {
        let strip_pattern = Regex::new(&config.allowed_characters_pattern).map_err(|source| {
            ProcessError::InvalidAllowedPattern {
                pattern: config.allowed_characters_pattern.clone(),
                source,
            }
        })?;
        Ok(Self {
            config,
            strip_pattern,
        })
    }

    /// The configuration this strategy was built from.
    pub fn config(&self) -> &SlugConfig {
        &self.config
    }
}

impl SlugStrategy for DefaultSlugStrategy {
    fn to_slug(&self, heading: &str) -> String {
        let mut slug = heading.to_string();

        // 1. Ordered literal replacements, always applied.
        for (from, to) in &self.config.replacements {
            if !from.is_empty() {
                slug = slug.replace(from.as_str(), to);
            }
        }

        // 2. Canonical decomposition, dropping combining marks.
        if self.config.remove_accents {
            slug = slug.nfd().filter(|ch| !is_combining_mark(*ch)).collect();
        }

        // 3. Case folding.
        if self.config.to_lowercase {
            slug = slug.to_lowercase();
        }

        // 4. Strip disallowed characters.
        if self.config.strip_disallowed {
            slug = self.strip_pattern.replace_all(&slug, "").into_owned();
        }

        // 5. Each maximal whitespace run becomes one separator, always.
        slug = replace_whitespace_runs(&slug, &self.config.whitespace_replacement);

        let sep = self.config.whitespace_replacement.as_str();

        // 6. Collapse separator runs.
        if self.config.collapse_separators && !sep.is_empty() {
            let doubled = format!("{sep}{sep}");
            while slug.contains(&doubled) {
                slug = slug.replace(&doubled, sep);
            }
        }

        // 7. Trim separator runs at the edges.
        if self.config.trim_edges && !sep.is_empty() {
            while slug.starts_with(sep) {
                slug.drain(..sep.len());
            }
            while slug.ends_with(sep) {
                slug.truncate(slug.len() - sep.len());
            }
        }

        slug
    }
}

/// Replaces every maximal run of whitespace with `replacement`.
fn replace_whitespace_runs(input: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push_str(replacement);
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Pipeline step that slugs every extracted heading, in order.
///
/// Preserves index correspondence: `slugs[i]` is the slug of `headings[i]`.
/// No deduplication is performed; colliding headings collide in the output.
pub struct SlugMapper<S> {
    strategy: S,
}

impl<S: SlugStrategy> SlugMapper<S> {
    /// Creates a mapper around the given strategy.
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }
}

impl<S: SlugStrategy> ProcessingStep for SlugMapper<S> {
    fn process(&self, ctx: &mut MarkdownContext) -> Result<(), ProcessError> {
        for heading in &ctx.headings {
            ctx.slugs.push(self.strategy.to_slug(heading));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_strategy() -> DefaultSlugStrategy {
        DefaultSlugStrategy::new(SlugConfig::default()).unwrap()
    }

    #[test]
    fn basic_heading() {
        assert_eq!(default_strategy().to_slug("Title One"), "title-one");
    }

    #[test]
    fn accents_fold_to_base_letters() {
        let strategy = DefaultSlugStrategy::new(SlugConfig {
            collapse_separators: false,
            ..SlugConfig::default()
        })
        .unwrap();
        assert_eq!(
            strategy.to_slug("Über-cool Stuff & Features"),
            "uber-cool-stuff-features"
        );
    }

    #[test]
    fn whitespace_run_becomes_single_separator() {
        // The `&` is stripped, leaving a two-space run that is replaced by
        // one separator even with collapsing disabled.
        let strategy = DefaultSlugStrategy::new(SlugConfig {
            collapse_separators: false,
            ..SlugConfig::default()
        })
        .unwrap();
        assert_eq!(strategy.to_slug("a & b"), "a-b");
        assert_eq!(strategy.to_slug("a \t b"), "a-b");
    }

    #[test]
    fn replacements_apply_first_and_in_order() {
        let strategy = DefaultSlugStrategy::new(SlugConfig {
            replacements: vec![
                ("ä".to_string(), "ae".to_string()),
                ("ae".to_string(), "x".to_string()),
            ],
            ..SlugConfig::default()
        })
        .unwrap();
        // "ä" -> "ae" by the first pair, then "ae" -> "x" by the second.
        assert_eq!(strategy.to_slug("Bär"), "bxr");
    }

    #[test]
    fn replacement_order_is_observable() {
        let reversed = DefaultSlugStrategy::new(SlugConfig {
            replacements: vec![
                ("ae".to_string(), "x".to_string()),
                ("ä".to_string(), "ae".to_string()),
            ],
            ..SlugConfig::default()
        })
        .unwrap();
        assert_eq!(reversed.to_slug("Bär"), "baer");
    }

    #[test]
    fn collapse_merges_separator_runs() {
        let strategy = default_strategy();
        // The dash survives stripping and the spaces around it each become a
        // dash ("a---b"), which collapsing reduces to one.
        assert_eq!(strategy.to_slug("a - b"), "a-b");
    }

    #[test]
    fn trim_removes_edge_separators() {
        assert_eq!(default_strategy().to_slug("  spaced out  "), "spaced-out");
        assert_eq!(default_strategy().to_slug("!!!"), "");
    }

    #[test]
    fn no_trim_keeps_edge_separators() {
        let strategy = DefaultSlugStrategy::new(SlugConfig {
            trim_edges: false,
            collapse_separators: false,
            ..SlugConfig::default()
        })
        .unwrap();
        assert_eq!(strategy.to_slug(" padded "), "-padded-");
    }

    #[test]
    fn custom_separator() {
        let strategy = DefaultSlugStrategy::new(SlugConfig {
            whitespace_replacement: "_".to_string(),
            allowed_characters_pattern: r"[^a-z0-9\s_]".to_string(),
            ..SlugConfig::default()
        })
        .unwrap();
        assert_eq!(strategy.to_slug("Some  Long   Title"), "some_long_title");
    }

    #[test]
    fn empty_separator_deletes_whitespace() {
        let strategy = DefaultSlugStrategy::new(SlugConfig {
            whitespace_replacement: String::new(),
            ..SlugConfig::default()
        })
        .unwrap();
        assert_eq!(strategy.to_slug("Title One"), "titleone");
    }

    #[test]
    fn deterministic_for_same_input() {
        let strategy = default_strategy();
        assert_eq!(
            strategy.to_slug("Repeatable Heading"),
            strategy.to_slug("Repeatable Heading")
        );
    }

    #[test]
    fn invalid_pattern_fails_at_construction() {
        let err = DefaultSlugStrategy::new(SlugConfig {
            allowed_characters_pattern: "[unclosed".to_string(),
            ..SlugConfig::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ProcessError::InvalidAllowedPattern { ref pattern, .. } if pattern == "[unclosed"
        ));
    }

    #[test]
    fn mapper_preserves_index_correspondence() {
        let mut ctx = MarkdownContext::new("");
        ctx.headings = vec!["First".into(), "Second".into(), "First".into()];
        SlugMapper::new(default_strategy())
            .process(&mut ctx)
            .unwrap();
        assert_eq!(ctx.slugs, vec!["first", "second", "first"]);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = SlugConfig {
            replacements: vec![("ß".to_string(), "ss".to_string())],
            whitespace_replacement: "_".to_string(),
            ..SlugConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SlugConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.replacements, config.replacements);
        assert_eq!(back.whitespace_replacement, "_");
        assert!(back.to_lowercase);
    }
}
