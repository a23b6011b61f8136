//! Admin Guesser - Guess admin panel views from sample records
//!
//! Provides:
//! - Field type classification of sample records
//! - Component registries for list, show and edit views
//! - Inferred element trees with live and textual projections
//! - A memoizing guesser with code suggestions
//! - A command-line front end (`cli` feature)

pub mod guesser;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use guesser::{
    ElementInferrer, GuessCache, Guesser, GuesserConfig, GuesserError, InferredElement,
    Suggestion, SuggestionSink, TracingSink, TypeTag, UiElement, ViewContext, records_from_json,
};
