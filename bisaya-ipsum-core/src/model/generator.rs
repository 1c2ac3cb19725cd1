use rand::Rng;

use crate::error::IpsumError;
use crate::words::WordBank;
use super::generate_options::GenerateOptions;

/// Characters accepted as the end of a sentence.
pub const TERMINALS: &[char] = &['.', '!', '?'];

/// Probability of closing an unpunctuated sentence with `!` instead of `.`.
const EXCLAIM_PROBABILITY: f64 = 0.2;

/// High-level generator composing sentences, paragraphs and documents.
///
/// # Responsibilities
/// - Pick a template family per sentence from the curse level weights
/// - Capitalize and punctuate each sentence
/// - Group sentences into paragraphs and paragraphs into documents
///
/// The generator only borrows an immutable word bank and takes the random
/// source as a parameter, so one instance can be shared across threads.
/// Generation never fails.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
	words: &'a WordBank<'a>,
}

impl Default for Generator<'static> {
	/// Generator over the built-in Bisaya word bank.
	fn default() -> Self {
		Self { words: WordBank::bisaya() }
	}
}

impl<'a> Generator<'a> {
	/// Creates a generator over a word bank.
	///
	/// # Errors
	/// Returns `IpsumError::EmptyCategory` if any category of the bank is empty.
	pub fn new(words: &'a WordBank<'a>) -> Result<Self, IpsumError> {
		words.validate()?;
		Ok(Self { words })
	}

	/// Returns the word bank used by this generator.
	pub fn words(&self) -> &'a WordBank<'a> {
		self.words
	}

	/// Generates one sentence.
	///
	/// # Behavior
	/// - Selects a template family from the weights of `options.curse_level`
	/// - Capitalizes the first character
	/// - Appends `!` (20%) or `.` (80%) if the sentence has no terminal yet
	pub fn generate_sentence<R: Rng + ?Sized>(&self, options: &GenerateOptions, rng: &mut R) -> String {
		let family = options.curse_level.weights().select(rng);
		log::trace!("sentence family {family} at curse level {}", options.curse_level);

		let mut sentence = capitalize(&family.render(self.words, rng));
		if !sentence.ends_with(TERMINALS) {
			sentence.push(if rng.random_bool(EXCLAIM_PROBABILITY) { '!' } else { '.' });
		}
		sentence
	}

	/// Generates the sentences of one paragraph.
	///
	/// The count is drawn uniformly in `options.sentences_per_paragraph`
	/// (inclusive), an inverted range being treated as `min..=min`.
	pub fn generate_sentences<R: Rng + ?Sized>(&self, options: &GenerateOptions, rng: &mut R) -> Vec<String> {
		let range = options.sentences_per_paragraph;
		if range.max < range.min {
			log::warn!("sentence range {}..{} is inverted, using {}", range.min, range.max, range.min);
		}
		let (min, max) = range.bounds();
		let count = rng.random_range(min..=max);
		(0..count).map(|_| self.generate_sentence(options, rng)).collect()
	}

	/// Generates one paragraph: sentences joined by single spaces.
	pub fn generate_paragraph<R: Rng + ?Sized>(&self, options: &GenerateOptions, rng: &mut R) -> String {
		self.generate_sentences(options, rng).join(" ")
	}

	/// Generates `options.paragraphs` paragraphs, in generation order.
	///
	/// # Notes
	/// - The paragraph count is not range-checked: 0 yields an empty vector.
	pub fn generate_ipsum<R: Rng + ?Sized>(&self, options: &GenerateOptions, rng: &mut R) -> Vec<String> {
		log::debug!(
			"generating {} paragraph(s) at curse level {}",
			options.paragraphs,
			options.curse_level
		);
		(0..options.paragraphs).map(|_| self.generate_paragraph(options, rng)).collect()
	}

	/// Generates a document: paragraphs separated by a blank line.
	pub fn generate_text<R: Rng + ?Sized>(&self, options: &GenerateOptions, rng: &mut R) -> String {
		self.generate_ipsum(options, rng).join("\n\n")
	}
}

/// Uppercases the first character (UTF-8 aware).
fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
