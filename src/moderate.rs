//! Moderation boundary.
//!
//! Turns one caller request into a term matcher query and back into a
//! [`ModerationOutcome`]. The matcher is built lazily on first use.

use std::num::NonZeroUsize;

use lru::LruCache;
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ModerationError, Result};
use crate::filter::{MatcherOptions, TermMatcher};
use crate::terms::{StaticTermSource, TermSource};
use crate::types::ModerationOutcome;

/// Default outcome cache size (0 disables the cache)
pub const DEFAULT_CACHE_SIZE: usize = 0;

/// Upper bound for the outcome cache size; larger configured sizes are clamped
pub const MAX_CACHE_SIZE: usize = 65_536;

/// Texts longer than this are never cached
pub const MAX_CACHED_TEXT_LEN: usize = 1024;

/// Process-wide moderator backed by the built-in term list
static SHARED: Lazy<Moderator> =
    Lazy::new(|| Moderator::new(Box::new(StaticTermSource), ModeratorOptions::default()));

/// Moderator options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ModeratorOptions {
    /// Options for the term matcher built on first use
    pub matcher: MatcherOptions,
    /// LRU cache size for moderation outcomes
    pub cache_size: usize,
}

impl ModeratorOptions {
    /// Create new moderator options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set matcher options.
    pub fn with_matcher(mut self, matcher: MatcherOptions) -> Self {
        self.matcher = matcher;
        self
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Lazily-initialized moderation front end.
///
/// The first call loads the term source and builds the matcher. Concurrent
/// first calls are serialized, so every caller sees the same fully built
/// matcher. If loading fails nothing is stored: that call and every later
/// call return the error until the source becomes loadable.
pub struct Moderator {
    source: Box<dyn TermSource>,
    options: ModeratorOptions,
    matcher: OnceCell<TermMatcher>,
    cache: Option<Mutex<LruCache<String, ModerationOutcome>>>,
}

impl Moderator {
    /// Create a new moderator. No terms are loaded until the first request.
    ///
    /// A `cache_size` above [`MAX_CACHE_SIZE`] is clamped to it.
    pub fn new(source: Box<dyn TermSource>, options: ModeratorOptions) -> Self {
        if options.cache_size > MAX_CACHE_SIZE {
            warn!(
                requested = options.cache_size,
                max = MAX_CACHE_SIZE,
                "Clamping moderation cache size"
            );
        }
        let cache = NonZeroUsize::new(options.cache_size.min(MAX_CACHE_SIZE))
            .map(|size| Mutex::new(LruCache::new(size)));
        Self {
            source,
            options,
            matcher: OnceCell::new(),
            cache,
        }
    }

    /// Get the matcher, building it on first use.
    pub fn matcher(&self) -> Result<&TermMatcher> {
        self.matcher.get_or_try_init(|| {
            debug!(source = %self.source.describe(), "Building shared term matcher");
            TermMatcher::new(self.source.as_ref(), self.options.matcher).map_err(|e| {
                warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "Failed to build term matcher"
                );
                e
            })
        })
    }

    /// Whether the matcher has been built yet.
    pub fn is_initialized(&self) -> bool {
        self.matcher.get().is_some()
    }

    /// Moderate a text.
    pub fn moderate(&self, text: &str) -> Result<ModerationOutcome> {
        let matcher = self.matcher()?;

        let cache = match &self.cache {
            Some(cache) if text.len() <= MAX_CACHED_TEXT_LEN => cache,
            _ => return Ok(matcher.check(text).into()),
        };

        if let Some(cached) = cache.lock().get(text) {
            return Ok(cached.clone());
        }

        // Matching is CPU-only, so computing outside the lock only risks a duplicate insert.
        let outcome: ModerationOutcome = matcher.check(text).into();
        cache.lock().put(text.to_string(), outcome.clone());
        Ok(outcome)
    }

    /// Moderate a dynamically-typed value.
    ///
    /// Anything but a string is rejected before the matcher is touched.
    pub fn moderate_value(&self, value: &Value) -> Result<ModerationOutcome> {
        match value {
            Value::String(text) => self.moderate(text),
            other => Err(ModerationError::InvalidInputType {
                found: value_type_name(other).to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for Moderator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Moderator")
            .field("source", &self.source.describe())
            .field("options", &self.options)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Moderate a text with the process-wide moderator.
pub fn moderate_text(text: &str) -> Result<ModerationOutcome> {
    SHARED.moderate(text)
}

/// Moderate a dynamically-typed value with the process-wide moderator.
pub fn moderate_value(value: &Value) -> Result<ModerationOutcome> {
    SHARED.moderate_value(value)
}
