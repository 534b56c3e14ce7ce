//! `schnipsel_core` turns a block of source code into an editor snippet.
//! Declared identifiers (types, interfaces, functions, classes, function-like
//! `const` bindings and, in React dialects, default imports) become numbered
//! tab stops, and every later whole-word reference to them is replaced with the
//! same number, so renaming the placeholder renames all linked occurrences.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source text
//!   → Tokenizer (trims the input, splits lines on `\n` and tokens on single spaces)
//!   → Replacer (rewrites references to already registered identifiers)
//!   → Keyword scan (type, interface, function, class, const, import)
//!   → Processor (turns the declared name into `${n:name}` or cancels)
//!   → Body (tokens re-joined with single spaces, one entry per input line)
//!   → Snippet (optional JSON packaging with name, prefix and description)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Conversion options, the supported [`Language`]s and
//!   `schnipsel.toml` discovery.
//! - [`processor`]: Declaration keywords and their processors.
//! - [`tokens`]: The single-space line tokenizer.
//!
//! ## Quick Start
//!
//! ```rust
//! use schnipsel_core::Config;
//! use schnipsel_core::Language;
//! use schnipsel_core::parse_body;
//!
//! let body = parse_body(
//! 	"function greet(name) {}\ngreet('world')",
//! 	Config::default(),
//! 	Language::JavaScript,
//! );
//!
//! assert_eq!(body, ["function ${1:greet}(name) {}", "$1('world')"]);
//! ```

pub use config::*;
pub use error::*;
pub use parser::*;
pub use processor::*;
pub use replacer::*;
pub use selection::*;
pub use snippet::*;
pub use tab_stop::*;

pub mod config;
#[allow(unused_assignments)]
mod error;
mod parser;
pub mod processor;
mod replacer;
mod selection;
mod snippet;
mod tab_stop;
pub mod tokens;
