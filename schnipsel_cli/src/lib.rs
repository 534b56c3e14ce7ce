use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use schnipsel_core::Selection;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Turn a block of code into an editor snippet with linked tab stops.",
	long_about = "schnipsel converts JavaScript, TypeScript and their React dialects into \
	              editor snippets.\n\nDeclared names (types, interfaces, functions, classes, \
	              arrow-function constants and React default imports) become numbered tab \
	              stops, and every later reference to them is linked to the same number, so \
	              renaming the placeholder renames all occurrences.\n\nQuick start:\n  \
	              schnipsel convert Button.tsx           Print a snippet for the whole file\n  \
	              schnipsel convert Button.tsx -l 3:20   Only convert lines 3 to 20\n  \
	              schnipsel init                         Create a schnipsel.toml"
)]
pub struct SchnipselCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory searched for `schnipsel.toml`. Defaults to the current
	/// directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose (debug) logging on stderr.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Convert source code into a snippet.
	///
	/// Reads FILE (or stdin when omitted) and prints a snippet entry that can
	/// be pasted into an editor snippets file. The language is taken from
	/// `--language`, then from the file extension, then from the `language`
	/// key of `schnipsel.toml`.
	Convert(ConvertArgs),
	/// Create a sample `schnipsel.toml` in the project root.
	///
	/// If a config file already exists this command leaves it untouched and
	/// exits successfully.
	Init,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
	/// Source file to convert. Reads stdin when omitted.
	pub file: Option<PathBuf>,

	/// Language id: `javascript`, `typescript`, `javascriptreact` or
	/// `typescriptreact`.
	#[arg(long)]
	pub language: Option<String>,

	/// Only convert an inclusive, 1-indexed line range, e.g. `3:20`, `:20`
	/// or `5:`.
	#[arg(long, short)]
	pub lines: Option<Selection>,

	/// Snippet name. Defaults to `Snippet from <file stem>`.
	#[arg(long)]
	pub name: Option<String>,

	/// Snippet prefix. Defaults to the file stem.
	#[arg(long)]
	pub prefix: Option<String>,

	/// Print only the body as a JSON array instead of a full snippet entry.
	#[arg(long, default_value_t = false)]
	pub body_only: bool,

	/// Render declarations as bare `$1` instead of `${1:name}`.
	#[arg(long, default_value_t = false)]
	pub no_placeholder: bool,
}
