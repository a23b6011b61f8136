//! UI guessing engine for admin panels
//!
//! This module inspects sample records of a resource and guesses which
//! components should render each field in a list, show or edit view.
//!
//! ## Features
//!
//! - **Type classification** - Recognize ids, references, dates, emails, urls and rich text
//! - **Per-view registries** - Map every field type to a component for each view
//! - **Nested records** - Expand nested objects into dotted sources and arrays into iterators
//! - **Memoized guesses** - Guess each view once per resource
//! - **Code suggestions** - Print ready-to-paste component code for the guessed view
//!
//! ## Example
//!
//! ```rust,ignore
//! use admin_guesser::guesser::{Guesser, ViewContext, records_from_json};
//!
//! let records = records_from_json(r#"[{"id": 1, "title": "Hello", "author_id": 5}]"#)?;
//!
//! let mut guesser = Guesser::new();
//! let tree = guesser.guess("posts", ViewContext::List, &records);
//!
//! println!("{}", tree.represent(0));
//! let element = tree.materialize();
//! ```

mod classify;
mod codegen;
mod config;
mod driver;
mod element;
mod error;
mod inferrer;
mod inflect;
mod patterns;
mod records;
mod registry;
mod sampler;
mod types;

pub use classify::{classify, reference_target};
pub use codegen::{Suggestion, component_name, referenced_components};
pub use config::{DEFAULT_COMPONENT_PACKAGE, GuesserConfig, GuesserConfigBuilder};
pub use driver::{GuessCache, Guesser, SuggestionSink, TracingSink};
pub use element::{InferredElement, UiElement};
pub use error::GuesserError;
pub use inferrer::ElementInferrer;
pub use inflect::{capitalize, pluralize, singularize};
pub use patterns::{contains_markup, is_date_string, is_email, is_url};
pub use records::{records_from_json, records_from_value};
pub use registry::{EntryKind, Layout, Registry, RegistryEntry};
pub use sampler::{FieldDescriptor, sample_fields};
pub use types::{FieldSummary, Props, TypeTag, ViewContext};
