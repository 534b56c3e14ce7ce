use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SchnipselError {
	#[error(transparent)]
	#[diagnostic(code(schnipsel::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(schnipsel::config_parse),
		help("check that schnipsel.toml is valid TOML with `placeholder` and/or `language` keys")
	)]
	ConfigParse(String),

	#[error("currently not supported: `{0}`")]
	#[diagnostic(
		code(schnipsel::unsupported_language),
		help("supported languages: javascript, typescript, javascriptreact, typescriptreact")
	)]
	UnsupportedLanguage(String),

	#[error("no language could be determined for the input")]
	#[diagnostic(
		code(schnipsel::missing_language),
		help("pass `--language <id>`, use a file with a known extension, or set `language` in schnipsel.toml")
	)]
	MissingLanguage,

	#[error("invalid line selection: `{0}`")]
	#[diagnostic(
		code(schnipsel::invalid_selection),
		help("use a 1-indexed inclusive range such as `3:10`")
	)]
	InvalidSelection(String),

	#[error("line selection `{start}:{end}` is outside the input ({lines} line(s))")]
	#[diagnostic(code(schnipsel::selection_out_of_range))]
	SelectionOutOfRange {
		start: usize,
		end: usize,
		lines: usize,
	},

	#[error("failed to serialize snippet: {0}")]
	#[diagnostic(code(schnipsel::serialize))]
	Serialize(#[from] serde_json::Error),
}

pub type SchnipselResult<T> = Result<T, SchnipselError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
