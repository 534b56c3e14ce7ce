use crate::Config;
use crate::Disposition;
use crate::Keyword;
use crate::Language;
use crate::TabStop;
use crate::TabStopAllocator;
use crate::TabStopRegistry;
use crate::TabStopReplacer;
use crate::tokens::Line;
use crate::tokens::tokenize;

/// Converts source code into a snippet body, line by line.
///
/// For each line the parser
///
/// 1. splits it into tokens,
/// 2. substitutes references to already registered declarations,
/// 3. looks for declaration keywords (in [`Keyword::ALL`] order) and lets the
///    matching processor turn the declared name into a tab stop,
/// 4. joins the tokens back together and appends them to the body.
///
/// All state lives on the parser, so every conversion starts from a clean
/// registry and tab stop `1`.
#[derive(Debug)]
pub struct Parser {
	source: Vec<Line>,
	current: usize,
	config: Config,
	language: Language,
	allocator: TabStopAllocator,
	registry: TabStopRegistry,
	body: Vec<String>,
}

impl Parser {
	pub fn new(input: &str, config: Config, language: Language) -> Self {
		Self {
			source: tokenize(input),
			current: 0,
			config,
			language,
			allocator: TabStopAllocator::new(),
			registry: TabStopRegistry::new(),
			body: Vec::new(),
		}
	}

	/// Process every remaining line and return the snippet body.
	pub fn parse(mut self) -> Vec<String> {
		while let Some(line) = self.advance() {
			self.parse_line(line);
		}

		tracing::debug!(
			lines = self.body.len(),
			tab_stops = self.allocator.current(),
			language = %self.language,
			"parsed snippet body"
		);

		self.body
	}

	fn advance(&mut self) -> Option<Line> {
		let line = self.source.get_mut(self.current).map(std::mem::take)?;
		self.current += 1;
		Some(line)
	}

	fn parse_line(&mut self, mut line: Line) {
		TabStopReplacer::new(&self.registry).apply(&mut line);

		for keyword in Keyword::ALL {
			self.parse_declaration(&mut line, keyword);
		}

		self.body.push(line.to_string());
	}

	fn parse_declaration(&mut self, line: &mut Line, keyword: Keyword) {
		let Some(processor) = keyword.processor(self.language) else {
			return;
		};

		let Some(keyword_index) = line.position(keyword.as_str()) else {
			return;
		};

		let Some((index, name)) = line.next_token(keyword_index + 1) else {
			return;
		};

		let id = self.allocator.allocate();
		let mut tab_stop =
			TabStop::new(name, index, Some(id)).with_placeholder(self.config.placeholder);

		match processor.process(line, &mut tab_stop, self.language) {
			Disposition::Register if tab_stop.should_register() => {
				tracing::debug!(%keyword, name = %tab_stop.name, id, "registered tab stop");
				self.registry.register(&tab_stop);
			}
			Disposition::Register | Disposition::Cancel => {
				tracing::trace!(
					%keyword,
					name = %tab_stop.name,
					line = self.current,
					"declaration cancelled"
				);
				self.allocator.rollback();
			}
		}
	}
}

/// Convert `input` into a snippet body in one call.
pub fn parse_body(input: &str, config: Config, language: Language) -> Vec<String> {
	Parser::new(input, config, language).parse()
}
