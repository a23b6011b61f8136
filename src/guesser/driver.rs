//! Guesser driver: memoized view guessing per resource and context

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use super::codegen::Suggestion;
use super::config::GuesserConfig;
use super::element::InferredElement;
use super::inferrer::ElementInferrer;
use super::registry::Registry;
use super::types::ViewContext;

/// Receiver of the code suggestions produced when a view is first guessed
pub trait SuggestionSink {
    /// Handle one suggestion
    fn emit(&mut self, suggestion: &Suggestion);
}

/// Logs suggestions at info level on the `admin_guesser::suggestion` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SuggestionSink for TracingSink {
    fn emit(&mut self, suggestion: &Suggestion) {
        info!(target: "admin_guesser::suggestion", "{}", suggestion.code);
    }
}

impl SuggestionSink for Vec<Suggestion> {
    fn emit(&mut self, suggestion: &Suggestion) {
        self.push(suggestion.clone());
    }
}

/// Guessed trees of the current resource, one per view context
///
/// Entries only ever belong to one resource: pointing the cache at another
/// resource drops all of them.
#[derive(Debug, Default)]
pub struct GuessCache {
    resource: Option<String>,
    trees: HashMap<ViewContext, Arc<InferredElement>>,
}

impl GuessCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource the cached trees belong to
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Cached tree for a context
    pub fn get(&self, context: ViewContext) -> Option<&Arc<InferredElement>> {
        self.trees.get(&context)
    }

    /// Number of cached trees
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Drop every cached tree and forget the resource
    pub fn clear(&mut self) {
        self.resource = None;
        self.trees.clear();
    }

    /// Point the cache at a resource; returns true if cached trees were dropped
    fn switch_to(&mut self, resource: &str) -> bool {
        if self.resource.as_deref() == Some(resource) {
            return false;
        }
        let dropped = !self.trees.is_empty();
        self.trees.clear();
        self.resource = Some(resource.to_string());
        dropped
    }

    fn insert(&mut self, context: ViewContext, tree: Arc<InferredElement>) {
        self.trees.insert(context, tree);
    }
}

/// Guesses list, show and edit views from sample records
///
/// One guesser belongs to one mounted view. Inference runs once per
/// resource and context; later calls return the same tree until the
/// resource changes, however the records change in between.
pub struct Guesser<S: SuggestionSink = TracingSink> {
    config: GuesserConfig,
    cache: GuessCache,
    sink: S,
}

impl Guesser<TracingSink> {
    /// Create a guesser with default configuration
    pub fn new() -> Self {
        Self::with_config(GuesserConfig::default())
    }

    /// Create a guesser logging suggestions through `tracing`
    pub fn with_config(config: GuesserConfig) -> Self {
        Self::with_sink(config, TracingSink)
    }
}

impl Default for Guesser<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SuggestionSink> Guesser<S> {
    /// Create a guesser sending suggestions to `sink`
    pub fn with_sink(config: GuesserConfig, sink: S) -> Self {
        Self {
            config,
            cache: GuessCache::new(),
            sink,
        }
    }

    pub fn config(&self) -> &GuesserConfig {
        &self.config
    }

    pub fn cache(&self) -> &GuessCache {
        &self.cache
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Forget every guessed tree
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Guess the view of `resource` in `context` from sample records
    ///
    /// An empty sample yields an empty container, which is not cached: the
    /// records are most likely still loading.
    pub fn guess(
        &mut self,
        resource: &str,
        context: ViewContext,
        records: &[Value],
    ) -> Arc<InferredElement> {
        if self.cache.switch_to(resource) {
            debug!("Resource changed to '{}', dropped cached guesses", resource);
        }

        if let Some(tree) = self.cache.get(context) {
            return Arc::clone(tree);
        }

        let registry = Registry::new(context);
        if records.is_empty() {
            debug!("No records yet for '{}' {} view", resource, context);
            return Arc::new(InferredElement::empty(&registry));
        }

        let inferrer = ElementInferrer::new(&registry, &self.config);
        let sample = inferrer.sample(records);
        let tree = Arc::new(inferrer.infer_tree(sample));
        info!(
            "Guessed {} view for '{}' with {} fields from {} of {} records",
            context,
            resource,
            tree.children().len(),
            sample.len(),
            records.len()
        );

        if self.config.emit_suggestions {
            let suggestion =
                Suggestion::new(resource, context, &tree, &self.config.component_package);
            self.sink.emit(&suggestion);
        }

        self.cache.insert(context, Arc::clone(&tree));
        tree
    }
}
