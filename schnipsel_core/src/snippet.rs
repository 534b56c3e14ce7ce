use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;

use crate::Language;
use crate::SchnipselResult;

/// Prefix of every generated snippet name.
pub const SNIPPET_NAME_PREFIX: &str = "Snippet from";

/// A snippet body packaged for an editor snippets file.
///
/// Renders as a JSON object member (without the enclosing braces) so it can be
/// pasted straight into an existing snippets file:
///
/// ```json
///   "Snippet from Counter": {
///     "prefix": "Counter",
///     "body": ["function ${1:Counter}() {", "}"],
///     "description": "Auto-generated typescriptreact snippet from Counter"
///   }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
	name: String,
	entry: SnippetEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct SnippetEntry {
	prefix: String,
	body: Vec<String>,
	description: String,
}

impl Snippet {
	pub fn new(body: Vec<String>, language: Language, file_name: &str) -> Self {
		Self {
			name: format!("{SNIPPET_NAME_PREFIX} {file_name}"),
			entry: SnippetEntry {
				prefix: file_name.to_string(),
				body,
				description: format!("Auto-generated {language} snippet from {file_name}"),
			},
		}
	}

	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	#[must_use]
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.entry.prefix = prefix.into();
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn prefix(&self) -> &str {
		&self.entry.prefix
	}

	pub fn body(&self) -> &[String] {
		&self.entry.body
	}

	pub fn description(&self) -> &str {
		&self.entry.description
	}

	/// The complete JSON document `{ "<name>": { … } }`.
	pub fn to_json(&self) -> SchnipselResult<String> {
		let document = BTreeMap::from([(self.name.as_str(), &self.entry)]);
		Ok(serde_json::to_string_pretty(&document)?)
	}

	/// The JSON document without its outermost braces.
	pub fn to_fragment(&self) -> SchnipselResult<String> {
		let json = self.to_json()?;
		let inner = json
			.strip_prefix('{')
			.and_then(|json| json.strip_suffix('}'))
			.unwrap_or(&json);

		Ok(inner.to_string())
	}
}

impl Display for Snippet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let fragment = self.to_fragment().map_err(|_| std::fmt::Error)?;
		write!(f, "{fragment}")
	}
}
