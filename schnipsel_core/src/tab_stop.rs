use std::fmt::Display;

/// A candidate tab stop for a single declaration.
///
/// Created by the parser for every detected declaration and handed to exactly
/// one processor. The processor may shorten the `name` (e.g. `foo(` becomes
/// `foo`) and either keeps the `id`, meaning the tab stop should be registered,
/// or calls [`TabStop::disable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStop {
	/// The declared identifier.
	pub name: String,
	/// Position of the identifier token within its line.
	pub index: usize,
	/// Numeric tab stop id. `None` means "do not register".
	pub id: Option<usize>,
	/// Render new declarations as `${id:name}` rather than `$id`.
	pub with_placeholder: bool,
}

impl TabStop {
	pub fn new(name: impl Into<String>, index: usize, id: Option<usize>) -> Self {
		Self {
			name: name.into(),
			index,
			id,
			with_placeholder: true,
		}
	}

	#[must_use]
	pub fn with_placeholder(mut self, with_placeholder: bool) -> Self {
		self.with_placeholder = with_placeholder;
		self
	}

	/// The bare reference, e.g. `$1`. Empty when disabled.
	pub fn value(&self) -> String {
		self.id.map(|id| format!("${id}")).unwrap_or_default()
	}

	/// The declaration rendering, e.g. `${1:name}`. Empty when disabled.
	pub fn placeholder(&self) -> String {
		match self.id {
			None => String::new(),
			Some(id) if self.with_placeholder => format!("${{{id}:{}}}", self.name),
			Some(_) => self.value(),
		}
	}

	pub fn should_register(&self) -> bool {
		self.id.is_some()
	}

	pub fn disable(&mut self) {
		self.id = None;
	}
}

impl Display for TabStop {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.placeholder())
	}
}

/// Hands out contiguous tab stop ids.
///
/// The counter is advanced before a candidate is processed and rolled back
/// when the candidate is rejected, so accepted declarations are numbered
/// `1..=N` without gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabStopAllocator {
	current: usize,
}

impl TabStopAllocator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn allocate(&mut self) -> usize {
		self.current += 1;
		self.current
	}

	pub fn rollback(&mut self) {
		self.current = self.current.saturating_sub(1);
	}

	/// The last id handed out (`0` before the first allocation).
	pub fn current(&self) -> usize {
		self.current
	}
}

/// Maps registered identifiers to their reference text (`$id`).
///
/// Entries keep their insertion order, which is the order the substitution
/// engine tries them in. Registering a known name overwrites its reference in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStopRegistry {
	entries: Vec<(String, String)>,
}

impl TabStopRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, reference: impl Into<String>) {
		let name = name.into();
		let reference = reference.into();

		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some((_, existing)) => *existing = reference,
			None => self.entries.push((name, reference)),
		}
	}

	/// Record an accepted tab stop under its (possibly shortened) name.
	pub fn register(&mut self, tab_stop: &TabStop) {
		self.insert(tab_stop.name.clone(), tab_stop.value());
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, reference)| reference.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(name, reference)| (name.as_str(), reference.as_str()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<N, R> FromIterator<(N, R)> for TabStopRegistry
where
	N: Into<String>,
	R: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
		let mut registry = Self::new();

		for (name, reference) in iter {
			registry.insert(name, reference);
		}

		registry
	}
}
