use std::str::FromStr;

use crate::SchnipselError;
use crate::SchnipselResult;

/// An inclusive, 1-indexed range of lines, written as `START:END`.
///
/// Stands in for an editor selection: only the selected lines are converted.
/// Either side may be omitted (`:20`, `5:`) to select from the first or up to
/// the last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
	pub start: Option<usize>,
	pub end: Option<usize>,
}

impl Selection {
	/// The selected lines of `text`, joined with `\n`.
	pub fn apply(&self, text: &str) -> SchnipselResult<String> {
		let lines: Vec<&str> = text.lines().collect();
		let start = self.start.unwrap_or(1);
		let end = self.end.unwrap_or(lines.len());

		if end > lines.len() || start > end {
			return Err(SchnipselError::SelectionOutOfRange {
				start,
				end,
				lines: lines.len(),
			});
		}

		Ok(lines[start - 1..end].join("\n"))
	}
}

impl FromStr for Selection {
	type Err = SchnipselError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let invalid = || SchnipselError::InvalidSelection(value.to_string());
		let parse_bound = |bound: &str| -> SchnipselResult<Option<usize>> {
			let bound = bound.trim();

			if bound.is_empty() {
				return Ok(None);
			}

			match bound.parse::<usize>() {
				Ok(0) | Err(_) => Err(invalid()),
				Ok(line) => Ok(Some(line)),
			}
		};

		let (start, end) = match value.split_once(':') {
			Some((start, end)) => (parse_bound(start)?, parse_bound(end)?),
			None => {
				let line = parse_bound(value)?.ok_or_else(invalid)?;
				(Some(line), Some(line))
			}
		};

		Ok(Self { start, end })
	}
}
