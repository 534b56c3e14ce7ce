use std::fmt::Display;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::SchnipselError;
use crate::SchnipselResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"schnipsel.toml",
	".schnipsel.toml",
	".config/schnipsel.toml",
];

/// Options for a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	/// Render declarations as `${1:name}` instead of a bare `$1`.
	pub placeholder: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self { placeholder: true }
	}
}

/// Source dialects the declaration heuristics understand.
///
/// The React variants additionally recognize `createContext`, `forwardRef`,
/// `memo` and `lazy` factory calls, as well as default component imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	JavaScript,
	TypeScript,
	JavaScriptReact,
	TypeScriptReact,
}

impl Language {
	pub const ALL: [Language; 4] = [
		Self::JavaScript,
		Self::TypeScript,
		Self::JavaScriptReact,
		Self::TypeScriptReact,
	];

	/// The editor language identifier, e.g. `typescriptreact`.
	pub fn id(self) -> &'static str {
		match self {
			Self::JavaScript => "javascript",
			Self::TypeScript => "typescript",
			Self::JavaScriptReact => "javascriptreact",
			Self::TypeScriptReact => "typescriptreact",
		}
	}

	pub fn is_react(self) -> bool {
		matches!(self, Self::JavaScriptReact | Self::TypeScriptReact)
	}

	/// Resolve a language from a file extension (without the leading dot).
	pub fn from_extension(extension: &str) -> Option<Self> {
		match extension.to_ascii_lowercase().as_str() {
			"js" | "mjs" | "cjs" => Some(Self::JavaScript),
			"ts" | "mts" | "cts" => Some(Self::TypeScript),
			"jsx" => Some(Self::JavaScriptReact),
			"tsx" => Some(Self::TypeScriptReact),
			_ => None,
		}
	}

	/// Resolve a language from a file path's extension.
	pub fn from_path(path: &Path) -> Option<Self> {
		path.extension()
			.and_then(|extension| extension.to_str())
			.and_then(Self::from_extension)
	}
}

impl Display for Language {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.id())
	}
}

impl FromStr for Language {
	type Err = SchnipselError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();

		Self::ALL
			.into_iter()
			.find(|language| language.id().eq_ignore_ascii_case(value))
			.ok_or_else(|| SchnipselError::UnsupportedLanguage(value.to_string()))
	}
}

/// Configuration loaded from a `schnipsel.toml` file.
///
/// ```toml
/// # Render declarations as `${1:name}`; `false` renders a bare `$1`.
/// placeholder = true
///
/// # Fallback language when it cannot be inferred from a file extension.
/// language = "typescriptreact"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SchnipselConfig {
	/// Whether new declarations get a default text. Defaults to `true`.
	#[serde(default = "default_placeholder")]
	pub placeholder: bool,
	/// Language used when none is given and none can be inferred.
	#[serde(default)]
	pub language: Option<Language>,
}

fn default_placeholder() -> bool {
	true
}

impl Default for SchnipselConfig {
	fn default() -> Self {
		Self {
			placeholder: default_placeholder(),
			language: None,
		}
	}
}

impl SchnipselConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> SchnipselResult<Option<SchnipselConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;

		Ok(Some(config))
	}

	pub fn parse(content: &str) -> SchnipselResult<SchnipselConfig> {
		toml::from_str(content).map_err(|e| SchnipselError::ConfigParse(e.to_string()))
	}

	pub fn options(&self) -> Config {
		Config {
			placeholder: self.placeholder,
		}
	}
}
