use std::fmt::Display;

use crate::Language;
use crate::TabStop;
use crate::tokens::Line;

/// Right-hand sides of `const` bindings that always count as declarations.
const CONST_ARROW_PREFIX: &str = "(";
const CONST_ASYNC: &str = "async";

/// React factory calls that turn a `const` binding into a component-like
/// declaration.
const REACT_FACTORIES: [&str; 4] = ["createContext", "forwardRef", "memo", "lazy"];

/// Default imports with this name are never turned into tab stops.
const REACT_DEFAULT_IMPORT: &str = "React";

/// Declaration keywords in the order they are evaluated on every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
	Type,
	Interface,
	Function,
	Class,
	Const,
	Import,
}

impl Keyword {
	pub const ALL: [Keyword; 6] = [
		Self::Type,
		Self::Interface,
		Self::Function,
		Self::Class,
		Self::Const,
		Self::Import,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Type => "type",
			Self::Interface => "interface",
			Self::Function => "function",
			Self::Class => "class",
			Self::Const => "const",
			Self::Import => "import",
		}
	}

	/// The processor handling this keyword for `language`, if any.
	///
	/// Default imports are only templated in the React dialects, so `import`
	/// has no processor elsewhere.
	pub fn processor(self, language: Language) -> Option<&'static dyn Processor> {
		match self {
			Self::Type | Self::Interface => Some(&DeclarationProcessor),
			Self::Function => Some(&FunctionProcessor),
			Self::Class => Some(&ClassProcessor),
			Self::Const => Some(&ConstProcessor),
			Self::Import if language.is_react() => Some(&ImportProcessor),
			Self::Import => None,
		}
	}
}

impl Display for Keyword {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// What the parser should do with a processed tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
	/// Commit the tab stop id to the registry.
	Register,
	/// Not a declaration after all: roll the id back.
	Cancel,
}

/// Turns a detected declaration into a tab stop.
///
/// Implementations either rewrite `line[tab_stop.index]` and return
/// [`Disposition::Register`], or leave the line untouched, disable the tab
/// stop and return [`Disposition::Cancel`].
pub trait Processor: Sync {
	fn process(&self, line: &mut Line, tab_stop: &mut TabStop, language: Language)
	-> Disposition;
}

fn register(line: &mut Line, tab_stop: &TabStop) -> Disposition {
	line[tab_stop.index] = tab_stop.placeholder();
	Disposition::Register
}

fn cancel(tab_stop: &mut TabStop) -> Disposition {
	tab_stop.disable();
	Disposition::Cancel
}

/// Split `name` on the first `delimiter`, keep the base name on the tab stop
/// and render the placeholder with the remainder reattached.
fn register_with_suffix(line: &mut Line, tab_stop: &mut TabStop, delimiter: char) -> Disposition {
	let Some((base, rest)) = tab_stop.name.split_once(delimiter) else {
		return register(line, tab_stop);
	};

	let rest = rest.to_string();
	tab_stop.name = base.to_string();
	line[tab_stop.index] = format!("{}{delimiter}{rest}", tab_stop.placeholder());

	Disposition::Register
}

/// `type` and `interface` declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationProcessor;

impl Processor for DeclarationProcessor {
	fn process(&self, line: &mut Line, tab_stop: &mut TabStop, _: Language) -> Disposition {
		register(line, tab_stop)
	}
}

/// `function` declarations; the parameter list may be glued to the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionProcessor;

impl Processor for FunctionProcessor {
	fn process(&self, line: &mut Line, tab_stop: &mut TabStop, _: Language) -> Disposition {
		register_with_suffix(line, tab_stop, '(')
	}
}

/// `class` declarations; the opening brace may be glued to the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassProcessor;

impl Processor for ClassProcessor {
	fn process(&self, line: &mut Line, tab_stop: &mut TabStop, _: Language) -> Disposition {
		register_with_suffix(line, tab_stop, '{')
	}
}

/// `const` bindings. Only function-like right-hand sides are declarations:
/// `= (…) =>`, `= async …`, and in React dialects the factory calls
/// `createContext`, `forwardRef`, `memo` and `lazy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstProcessor;

impl ConstProcessor {
	fn is_function_like(line: &Line, index: usize, language: Language) -> bool {
		let Some((assignment_index, assignment)) = line.next_token(index + 1) else {
			return false;
		};

		if assignment != "=" {
			return false;
		}

		let Some((_, value)) = line.next_token(assignment_index + 1) else {
			return false;
		};

		value.starts_with(CONST_ARROW_PREFIX)
			|| value == CONST_ASYNC
			|| (language.is_react()
				&& REACT_FACTORIES
					.iter()
					.any(|factory| value.starts_with(factory)))
	}
}

impl Processor for ConstProcessor {
	fn process(&self, line: &mut Line, tab_stop: &mut TabStop, language: Language) -> Disposition {
		if Self::is_function_like(line, tab_stop.index, language) {
			register(line, tab_stop)
		} else {
			cancel(tab_stop)
		}
	}
}

/// Default imports in React dialects, e.g. `import Button from './Button'`.
///
/// Besides the name, the matching last segment of the module path is linked
/// to the same tab stop, so renaming the component renames the file it is
/// imported from.
///
/// [`Keyword::processor`] never hands `import` to this processor outside the
/// React dialects. Direct callers get the same rule: the processor cancels for
/// non-React languages itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportProcessor;

impl ImportProcessor {
	/// Rewrite the last path segment of `path` to `reference` when its stem
	/// equals `name`. Returns `None` when the segment does not match.
	fn rewrite_path(path: &str, name: &str, reference: &str) -> Option<String> {
		let segment_start = path
			.rfind('/')
			.or_else(|| path.find(['\'', '"', '`']))
			.map_or(0, |position| position + 1);
		let segment = &path[segment_start..];
		let stem_len = segment
			.find(|c: char| matches!(c, '.' | '\'' | '"' | '`' | ';' | ','))
			.unwrap_or(segment.len());

		if &segment[..stem_len] != name {
			return None;
		}

		Some(format!(
			"{}{reference}{}",
			&path[..segment_start],
			&segment[stem_len..]
		))
	}
}

impl Processor for ImportProcessor {
	fn process(&self, line: &mut Line, tab_stop: &mut TabStop, language: Language) -> Disposition {
		if !language.is_react()
			|| tab_stop.name == REACT_DEFAULT_IMPORT
			|| tab_stop.name.starts_with('{')
		{
			return cancel(tab_stop);
		}

		let Some((from_index, "from")) = line.next_token(tab_stop.index + 1) else {
			return cancel(tab_stop);
		};

		let path = line
			.next_token(from_index + 1)
			.and_then(|(path_index, path)| {
				Self::rewrite_path(path, &tab_stop.name, &tab_stop.value())
					.map(|path| (path_index, path))
			});

		if let Some((path_index, path)) = path {
			line[path_index] = path;
		}

		register(line, tab_stop)
	}
}
