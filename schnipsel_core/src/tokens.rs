use std::fmt::Display;

use derive_more::Deref;
use derive_more::DerefMut;

/// The only character that separates tokens within a line.
pub const TOKEN_SEPARATOR: char = ' ';

/// A single source line split into tokens.
///
/// Tokens are separated by exactly one space, so indentation and repeated
/// spaces show up as empty tokens. Indices are stable: processors address the
/// declared name by its position and the line is re-joined with single spaces,
/// which reproduces the original spacing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct Line(Vec<String>);

impl Line {
	pub fn parse(source: &str) -> Self {
		Self(source.split(TOKEN_SEPARATOR).map(String::from).collect())
	}

	/// Index of the first token that equals `token` exactly.
	pub fn position(&self, token: &str) -> Option<usize> {
		self.0.iter().position(|item| item == token)
	}

	/// The first non-empty token at or after `start`, with its index.
	pub fn next_token(&self, start: usize) -> Option<(usize, &str)> {
		self.0
			.iter()
			.enumerate()
			.skip(start)
			.find(|(_, token)| !token.trim().is_empty())
			.map(|(index, token)| (index, token.as_str()))
	}

	pub fn into_tokens(self) -> Vec<String> {
		self.0
	}
}

impl From<Vec<String>> for Line {
	fn from(tokens: Vec<String>) -> Self {
		Self(tokens)
	}
}

impl<const N: usize> From<[&str; N]> for Line {
	fn from(tokens: [&str; N]) -> Self {
		Self(tokens.into_iter().map(String::from).collect())
	}
}

impl Display for Line {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (index, token) in self.0.iter().enumerate() {
			if index > 0 {
				write!(f, "{TOKEN_SEPARATOR}")?;
			}

			write!(f, "{token}")?;
		}

		Ok(())
	}
}

/// Trim the whole input and split it into lines of tokens.
///
/// Blank lines inside the input survive as a line holding one empty token, so
/// the number of lines always matches the trimmed input.
pub fn tokenize(input: &str) -> Vec<Line> {
	input.trim().split('\n').map(Line::parse).collect()
}
