use crate::TabStopRegistry;
use crate::tokens::Line;

/// Rewrites references to registered identifiers with their tab stop.
///
/// Every token is checked against the registry in insertion order. The first
/// identifier found as a whole word is replaced (first whole-word occurrence
/// only) and the remaining entries are skipped for that token. Object keys
/// (`name:`) and fully quoted string literals are left alone.
#[derive(Debug, Clone, Copy)]
pub struct TabStopReplacer<'a> {
	registry: &'a TabStopRegistry,
}

impl<'a> TabStopReplacer<'a> {
	pub fn new(registry: &'a TabStopRegistry) -> Self {
		Self { registry }
	}

	/// Substitute every token of `line` in place.
	pub fn apply(&self, line: &mut Line) {
		if self.registry.is_empty() {
			return;
		}

		for token in line.iter_mut() {
			if let Some(replaced) = self.replace_token(token) {
				*token = replaced;
			}
		}
	}

	/// The substituted token, or `None` when it stays unchanged.
	pub fn replace_token(&self, token: &str) -> Option<String> {
		if token.is_empty() || is_object_property_key(token) || is_string_literal(token) {
			return None;
		}

		self.registry.iter().find_map(|(identifier, reference)| {
			let start = find_whole_word(token, identifier)?;
			tracing::trace!(token, identifier, reference, "substituting reference");

			Some(format!(
				"{}{reference}{}",
				&token[..start],
				&token[start + identifier.len()..]
			))
		})
	}
}

/// `[A-Za-z0-9_]`, the characters that make up a word.
fn is_word_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_'
}

/// A word boundary sits between a word and a non-word byte, with the start
/// and end of the text counting as non-word.
fn is_boundary(text: &[u8], position: usize) -> bool {
	let before = position
		.checked_sub(1)
		.and_then(|index| text.get(index))
		.is_some_and(|byte| is_word_byte(*byte));
	let after = text.get(position).is_some_and(|byte| is_word_byte(*byte));

	before != after
}

/// Byte offset of the first occurrence of `identifier` in `token` that is
/// bounded by word boundaries on both sides.
pub fn find_whole_word(token: &str, identifier: &str) -> Option<usize> {
	if identifier.is_empty() {
		return None;
	}

	let bytes = token.as_bytes();

	token.match_indices(identifier).map(|(start, _)| start).find(|start| {
		is_boundary(bytes, *start) && is_boundary(bytes, start + identifier.len())
	})
}

/// Object keys such as `name:` are never references.
fn is_object_property_key(token: &str) -> bool {
	token.ends_with(':')
}

/// Tokens wrapped in one pair of matching quotes, e.g. `'name'` or `"name"`.
fn is_string_literal(token: &str) -> bool {
	['\'', '"'].into_iter().any(|quote| {
		token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote)
	})
}
