use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use schnipsel_cli::Commands;
use schnipsel_cli::ConvertArgs;
use schnipsel_cli::SchnipselCli;
use schnipsel_core::Config;
use schnipsel_core::Language;
use schnipsel_core::SchnipselConfig;
use schnipsel_core::SchnipselError;
use schnipsel_core::SchnipselResult;
use schnipsel_core::Snippet;
use schnipsel_core::parse_body;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const SUCCESS_MESSAGE: &str = "Snippet created! You can now paste it into your snippets file.";
const FAILURE_MESSAGE: &str = "Failed to create snippet.";
const NOT_SUPPORTED_MESSAGE: &str = "Currently not supported.";

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "SCHNIPSEL_LOG";

/// Name and prefix used when reading from stdin.
const DEFAULT_SNIPPET_NAME: &str = "snippet";

const SAMPLE_CONFIG: &str = "# schnipsel configuration\n\n# Render declarations as \
                             `${1:name}`. Set to false for a bare `$1`.\nplaceholder = \
                             true\n\n# Language used when it cannot be inferred from the file \
                             extension.\n# One of: javascript, typescript, javascriptreact, \
                             typescriptreact.\n# language = \"typescriptreact\"\n";

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = SchnipselCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_logging(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Convert(convert)) => run_convert(&args, convert),
		Some(Commands::Init) => run_init(&args),
		None => {
			eprintln!("No subcommand specified. Run `schnipsel --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		let converting = matches!(args.command, Some(Commands::Convert(_)));

		match e.downcast::<SchnipselError>() {
			Ok(error) => {
				if converting {
					eprintln!("{}", colored!(outcome_message(&error), red));
				}

				let report: miette::Report = (*error).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				if converting {
					eprintln!("{}", colored!(FAILURE_MESSAGE, red));
				}

				eprintln!("{} {e}", colored!("error:", red));
			}
		}

		process::exit(2);
	}
}

/// Install a stderr subscriber filtered by `SCHNIPSEL_LOG`, falling back to
/// `warn` (or `debug` with `--verbose`).
fn init_logging(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter_layer =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
	let fmt_layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(true)
		.compact();

	tracing_subscriber::registry()
		.with(filter_layer)
		.with(fmt_layer)
		.try_init()
		.ok();
}

fn outcome_message(error: &SchnipselError) -> &'static str {
	match error {
		SchnipselError::UnsupportedLanguage(_) | SchnipselError::MissingLanguage => {
			NOT_SUPPORTED_MESSAGE
		}
		_ => FAILURE_MESSAGE,
	}
}

fn resolve_root(args: &SchnipselCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run_convert(args: &SchnipselCli, convert: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = SchnipselConfig::load(&root)?.unwrap_or_default();
	let language = resolve_language(convert, &config)?;

	let mut source = read_source(convert.file.as_deref())?;
	if let Some(selection) = convert.lines {
		source = selection.apply(&source)?;
	}

	let options = Config {
		placeholder: config.placeholder && !convert.no_placeholder,
	};

	tracing::debug!(
		%language,
		placeholder = options.placeholder,
		root = %root.display(),
		"converting source"
	);

	let body = parse_body(&source, options, language);

	if convert.body_only {
		println!("{}", serde_json::to_string_pretty(&body)?);
	} else {
		let file_name = snippet_file_name(convert.file.as_deref());
		let mut snippet = Snippet::new(body, language, file_name);

		if let Some(name) = &convert.name {
			snippet = snippet.with_name(name.as_str());
		}

		if let Some(prefix) = &convert.prefix {
			snippet = snippet.with_prefix(prefix.as_str());
		}

		println!("{}", snippet.to_fragment()?);
	}

	eprintln!("{}", colored!(SUCCESS_MESSAGE, green));

	Ok(())
}

/// `--language` wins, then the file extension, then the config file.
fn resolve_language(convert: &ConvertArgs, config: &SchnipselConfig) -> SchnipselResult<Language> {
	if let Some(language) = &convert.language {
		return language.parse();
	}

	convert
		.file
		.as_deref()
		.and_then(Language::from_path)
		.or(config.language)
		.ok_or(SchnipselError::MissingLanguage)
}

fn read_source(file: Option<&Path>) -> SchnipselResult<String> {
	let Some(file) = file else {
		let mut source = String::new();
		std::io::stdin().read_to_string(&mut source)?;
		return Ok(source);
	};

	Ok(std::fs::read_to_string(file)?)
}

fn snippet_file_name(file: Option<&Path>) -> &str {
	file.and_then(Path::file_stem)
		.and_then(|stem| stem.to_str())
		.unwrap_or(DEFAULT_SNIPPET_NAME)
}

fn run_init(args: &SchnipselCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = SchnipselConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let config_path = root.join("schnipsel.toml");
	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created schnipsel.toml");

	println!();
	println!("Next steps:");
	println!("  1. Adjust {} to your project", config_path.display());
	println!("  2. Run `schnipsel convert <file>` to print a snippet");
	println!("  3. Paste the output into your editor snippets file");

	Ok(())
}
