use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::IpsumError;
use crate::words::{WordBank, WordCategory};

/// Where a slot draws its phrase from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
	/// A word bank category.
	Category(WordCategory),
	/// Uniform over both categories, as if they were one list.
	Union(WordCategory, WordCategory),
	/// A category plus a few extra phrases, uniform over both.
	Extended(WordCategory, &'static [&'static str]),
	/// A fixed inline list.
	Fixed(&'static [&'static str]),
	/// A category phrase with its leading particle `from` replaced by `to`.
	///
	/// Objects are stored pre-marked ("og manok"); this yields the bare
	/// ("manok") or re-marked ("ang manok") form. Phrases without the
	/// particle are used unchanged.
	Swapped { category: WordCategory, from: &'static str, to: &'static str },
}

impl Source {
	/// Draws one phrase uniformly at random.
	///
	/// An empty source degrades to an empty token, which assembly drops.
	pub fn sample<R: Rng + ?Sized>(&self, words: &WordBank<'_>, rng: &mut R) -> String {
		match *self {
			Source::Category(category) => choose(words.get(category), rng),
			Source::Union(first, second) => {
				let (first, second) = (words.get(first), words.get(second));
				pick_across(first, second, rng)
			}
			Source::Extended(category, extra) => pick_across(words.get(category), extra, rng),
			Source::Fixed(phrases) => choose(phrases, rng),
			Source::Swapped { category, from, to } => {
				let phrase = choose(words.get(category), rng);
				match phrase.strip_prefix(from) {
					Some(rest) => format!("{to}{rest}"),
					None => phrase,
				}
			}
		}
	}
}

fn choose<R: Rng + ?Sized>(phrases: &[&str], rng: &mut R) -> String {
	phrases.choose(rng).map(|phrase| (*phrase).to_owned()).unwrap_or_default()
}

fn pick_across<R: Rng + ?Sized>(first: &[&str], second: &[&str], rng: &mut R) -> String {
	let len = first.len() + second.len();
	if len == 0 {
		return String::new();
	}
	let index = rng.random_range(0..len);
	match first.get(index) {
		Some(phrase) => (*phrase).to_owned(),
		None => second[index - first.len()].to_owned(),
	}
}

/// One position in a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
	/// Fixed text, emitted as-is.
	Literal(&'static str),
	/// A sampled phrase followed directly by `suffix` (e.g. "," or "!").
	Pick(Source, &'static str),
	/// A sampled phrase with probability `p`, otherwise nothing.
	Maybe(Source, f64),
}

impl Slot {
	fn fill<R: Rng + ?Sized>(&self, words: &WordBank<'_>, rng: &mut R) -> String {
		match *self {
			Slot::Literal(text) => text.to_owned(),
			Slot::Pick(source, suffix) => {
				let mut phrase = source.sample(words, rng);
				phrase.push_str(suffix);
				phrase
			}
			Slot::Maybe(source, p) => {
				if rng.random_bool(p) {
					source.sample(words, rng)
				} else {
					String::new()
				}
			}
		}
	}
}

pub const fn word(category: WordCategory) -> Slot {
	Slot::Pick(Source::Category(category), "")
}

pub const fn word_then(category: WordCategory, suffix: &'static str) -> Slot {
	Slot::Pick(Source::Category(category), suffix)
}

pub const fn from(source: Source) -> Slot {
	Slot::Pick(source, "")
}

pub const fn from_then(source: Source, suffix: &'static str) -> Slot {
	Slot::Pick(source, suffix)
}

pub const fn lit(text: &'static str) -> Slot {
	Slot::Literal(text)
}

pub const fn maybe(category: WordCategory, p: f64) -> Slot {
	Slot::Maybe(Source::Category(category), p)
}

/// A shape variant: the ordered slots of one sentence pattern.
pub type Shape = &'static [Slot];

/// Fills every slot of a shape and joins the non-empty tokens.
///
/// Tokens are joined with a single space, then whitespace runs are
/// collapsed and the ends trimmed.
pub fn assemble<R: Rng + ?Sized>(shape: &[Slot], words: &WordBank<'_>, rng: &mut R) -> String {
	let tokens: Vec<String> = shape
		.iter()
		.map(|slot| slot.fill(words, rng))
		.filter(|token| !token.is_empty())
		.collect();
	tokens.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// How a family produces its sentence.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
	/// One of `shapes`, chosen uniformly, with `terminal` appended.
	Shapes { shapes: &'static [Shape], terminal: &'static str },
	/// A meme phrase, sometimes addressed to someone.
	Meme,
}

/// Names appended to memes.
pub const MEME_NAMES: &[&str] = &["Jonathan", "Dodong", "Inday", "Noy", "Dong", "Day", "Pare", "Bay"];

/// Memes containing this are never addressed to a name.
pub const MEME_SELF_CONTAINED: &str = "dunk it";

const MEME_NAME_PROBABILITY: f64 = 0.5;

/// A named sentence-shape generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateFamily {
	Basic,
	Time,
	Adjective,
	Exclamation,
	Question,
	Negative,
	Future,
	Curse,
	Compound,
	Casual,
	Reaction,
	Location,
	Comparison,
	Story,
	Meme,
	Object,
	Reason,
	Connector,
	Intensifier,
	CurseAdj,
	ObjectQ,
	FutureTime,
	NegativeConn,
}

impl TemplateFamily {
	pub const COUNT: usize = 23;

	/// Every family, in the order the weight tables walk them.
	pub const ALL: [TemplateFamily; TemplateFamily::COUNT] = [
		TemplateFamily::Basic,
		TemplateFamily::Time,
		TemplateFamily::Adjective,
		TemplateFamily::Exclamation,
		TemplateFamily::Question,
		TemplateFamily::Negative,
		TemplateFamily::Future,
		TemplateFamily::Curse,
		TemplateFamily::Compound,
		TemplateFamily::Casual,
		TemplateFamily::Reaction,
		TemplateFamily::Location,
		TemplateFamily::Comparison,
		TemplateFamily::Story,
		TemplateFamily::Meme,
		TemplateFamily::Object,
		TemplateFamily::Reason,
		TemplateFamily::Connector,
		TemplateFamily::Intensifier,
		TemplateFamily::CurseAdj,
		TemplateFamily::ObjectQ,
		TemplateFamily::FutureTime,
		TemplateFamily::NegativeConn,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			TemplateFamily::Basic => "basic",
			TemplateFamily::Time => "time",
			TemplateFamily::Adjective => "adjective",
			TemplateFamily::Exclamation => "exclamation",
			TemplateFamily::Question => "question",
			TemplateFamily::Negative => "negative",
			TemplateFamily::Future => "future",
			TemplateFamily::Curse => "curse",
			TemplateFamily::Compound => "compound",
			TemplateFamily::Casual => "casual",
			TemplateFamily::Reaction => "reaction",
			TemplateFamily::Location => "location",
			TemplateFamily::Comparison => "comparison",
			TemplateFamily::Story => "story",
			TemplateFamily::Meme => "meme",
			TemplateFamily::Object => "object",
			TemplateFamily::Reason => "reason",
			TemplateFamily::Connector => "connector",
			TemplateFamily::Intensifier => "intensifier",
			TemplateFamily::CurseAdj => "curseAdj",
			TemplateFamily::ObjectQ => "objectQ",
			TemplateFamily::FutureTime => "futureTime",
			TemplateFamily::NegativeConn => "negativeConn",
		}
	}

	/// Produces one sentence of this family.
	///
	/// The result is not capitalized; families with a grammatical terminal
	/// (questions, exclamations) already carry it.
	pub fn render<R: Rng + ?Sized>(self, words: &WordBank<'_>, rng: &mut R) -> String {
		match self.pattern() {
			Pattern::Shapes { shapes, terminal } => {
				let mut sentence = match shapes.choose(rng) {
					Some(shape) => assemble(shape, words, rng),
					None => String::new(),
				};
				sentence.push_str(terminal);
				sentence
			}
			Pattern::Meme => render_meme(words, rng),
		}
	}
}

fn render_meme<R: Rng + ?Sized>(words: &WordBank<'_>, rng: &mut R) -> String {
	let meme = choose(words.get(WordCategory::Memes), rng);
	let address = rng.random_bool(MEME_NAME_PROBABILITY);
	if address && !meme.contains(MEME_SELF_CONTAINED) {
		format!("{meme}, {}", choose(MEME_NAMES, rng))
	} else {
		meme
	}
}

impl fmt::Display for TemplateFamily {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TemplateFamily {
	type Err = IpsumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TemplateFamily::ALL
			.into_iter()
			.find(|family| family.as_str() == s)
			.ok_or_else(|| IpsumError::InvalidOption(format!("unknown template family: {s}")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use crate::words::WordCategory::*;

	#[test]
	fn assemble_drops_empty_tokens_and_collapses_spaces() {
		let mut rng = StdRng::seed_from_u64(7);
		let shape = [lit("  mao  ni "), maybe(Subjects, 0.0), lit(""), lit("ang storya")];
		let sentence = assemble(&shape, WordBank::bisaya(), &mut rng);
		assert_eq!(sentence, "mao ni ang storya");
	}

	#[test]
	fn maybe_slot_always_included_at_probability_one() {
		let mut rng = StdRng::seed_from_u64(7);
		let shape = [lit("uy"), maybe(Slang, 1.0)];
		for _ in 0..50 {
			let sentence = assemble(&shape, WordBank::bisaya(), &mut rng);
			let tail = sentence.strip_prefix("uy ").unwrap();
			assert!(WordBank::bisaya().get(Slang).contains(&tail));
		}
	}

	#[test]
	fn suffix_sticks_to_its_phrase() {
		let mut rng = StdRng::seed_from_u64(3);
		let shape = [word_then(Exclamations, ","), lit("ang tanan")];
		let sentence = assemble(&shape, WordBank::bisaya(), &mut rng);
		assert!(sentence.ends_with(", ang tanan"));
	}

	#[test]
	fn swapped_source_strips_object_marker() {
		let mut rng = StdRng::seed_from_u64(11);
		let bare = Source::Swapped { category: Objects, from: "og ", to: "" };
		let marked = Source::Swapped { category: Objects, from: "og ", to: "ang " };
		for _ in 0..50 {
			assert!(!bare.sample(WordBank::bisaya(), &mut rng).starts_with("og "));
			assert!(marked.sample(WordBank::bisaya(), &mut rng).starts_with("ang "));
		}
	}

	#[test]
	fn swapped_source_keeps_unmarked_phrases() {
		let mut rng = StdRng::seed_from_u64(11);
		let subjects: &[&str] = &["si kuya"];
		let bank = WordBank::new([subjects; WordCategory::COUNT]);
		let source = Source::Swapped { category: Subjects, from: "ang ", to: "" };
		assert_eq!(source.sample(&bank, &mut rng), "si kuya");
	}

	#[test]
	fn union_reaches_both_categories() {
		let mut rng = StdRng::seed_from_u64(5);
		let source = Source::Union(Verbs, FutureVerbs);
		let bank = WordBank::bisaya();
		let (mut past, mut future) = (false, false);
		for _ in 0..500 {
			let phrase = source.sample(bank, &mut rng);
			past |= bank.get(Verbs).contains(&phrase.as_str());
			future |= bank.get(FutureVerbs).contains(&phrase.as_str());
		}
		assert!(past && future);
	}

	#[test]
	fn empty_source_degrades_to_nothing() {
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(Source::Fixed(&[]).sample(WordBank::bisaya(), &mut rng), "");
		assert_eq!(Source::Extended(Memes, &[]).sample(&WordBank::new([&[]; WordCategory::COUNT]), &mut rng), "");
	}

	#[test]
	fn questions_end_with_question_mark() {
		let mut rng = StdRng::seed_from_u64(21);
		for _ in 0..200 {
			assert!(TemplateFamily::Question.render(WordBank::bisaya(), &mut rng).ends_with('?'));
			assert!(TemplateFamily::ObjectQ.render(WordBank::bisaya(), &mut rng).ends_with('?'));
		}
	}

	#[test]
	fn exclamation_families_end_with_bang() {
		let mut rng = StdRng::seed_from_u64(22);
		let loud = [
			TemplateFamily::Exclamation,
			TemplateFamily::Curse,
			TemplateFamily::Casual,
			TemplateFamily::Intensifier,
			TemplateFamily::CurseAdj,
		];
		for family in loud {
			for _ in 0..100 {
				assert!(family.render(WordBank::bisaya(), &mut rng).ends_with('!'), "{family}");
			}
		}
	}

	#[test]
	fn self_contained_meme_is_never_addressed() {
		let memes: &[&str] = &["ang court, ang court of appeal, dunk it"];
		let bank = WordBank::new([memes; WordCategory::COUNT]);
		let mut rng = StdRng::seed_from_u64(9);
		for _ in 0..100 {
			assert_eq!(TemplateFamily::Meme.render(&bank, &mut rng), memes[0]);
		}
	}

	#[test]
	fn other_memes_are_sometimes_addressed() {
		let memes: &[&str] = &["banana man"];
		let bank = WordBank::new([memes; WordCategory::COUNT]);
		let mut rng = StdRng::seed_from_u64(9);
		let rendered: Vec<String> = (0..200).map(|_| TemplateFamily::Meme.render(&bank, &mut rng)).collect();
		assert!(rendered.iter().any(|meme| meme == "banana man"));
		assert!(rendered.iter().any(|meme| {
			meme.strip_prefix("banana man, ").is_some_and(|name| MEME_NAMES.contains(&name))
		}));
	}

	#[test]
	fn family_names_round_trip() {
		for family in TemplateFamily::ALL {
			assert_eq!(family.as_str().parse::<TemplateFamily>().unwrap(), family);
		}
		assert!("bogus".parse::<TemplateFamily>().is_err());
	}
}
