use crate::words::WordCategory::*;
use super::template::{Pattern, Shape, Source, TemplateFamily, from, from_then, lit, maybe, word, word_then};

// "Ang tawo nagkaon og pagkaon sa balay"
const BASIC: &[Shape] = &[
	&[word(Subjects), word(Verbs), word(Objects), maybe(Locations, 0.6)],
	&[word(Subjects), word(Verbs), word(Objects), word(Intensifiers)],
	&[word_then(Locations, ","), word(Subjects), word(Verbs), word(Objects)],
	&[word(Subjects), word(Verbs), maybe(Locations, 0.7)],
];

// "Gahapon ang bata natulog sa kwarto"
const TIME: &[Shape] = &[
	&[word(TimeExpressions), word(Subjects), word(Verbs), word(Objects)],
	&[word(Subjects), word(Verbs), word(Objects), word(TimeExpressions)],
	&[word(TimeExpressions), word(Subjects), word(Verbs), word(Locations)],
];

const ADJECTIVE: &[Shape] = &[
	&[word(Subjects), word(Adjectives), word(Intensifiers)],
	&[word(Adjectives), word(Intensifiers), word(Subjects)],
	&[word(Subjects), word(Adjectives), word(Intensifiers), word(Locations)],
];

const EXCLAIMED_SUBJECTS: Source = Source::Extended(
	Subjects,
	&["ang pagkaon", "ang lugar", "ang panahon", "ang problema", "ang trabaho"],
);

// "Ay sus, ang pagkaon lami kaayo!"
const EXCLAMATION: &[Shape] = &[
	&[word_then(Exclamations, ","), from(EXCLAIMED_SUBJECTS), word(Adjectives), word(Intensifiers)],
	&[word_then(Exclamations, "!"), from(EXCLAIMED_SUBJECTS), word(Adjectives)],
	&[word_then(Exclamations, ","), word(Adjectives), word(Intensifiers), lit("ang tanan")],
];

const BARE_OBJECT: Source = Source::Swapped { category: Objects, from: "og ", to: "" };

// "Ngano ang lalaki naghilak?"
const QUESTION: &[Shape] = &[
	&[word(QuestionWords), word(Subjects), from(Source::Union(Verbs, FutureVerbs))],
	&[word(QuestionWords), word(Subjects), word(Verbs), word(Objects)],
	&[word(QuestionWords), word(Subjects), word(Adjectives), word(Intensifiers)],
	&[word(QuestionWords), word(Verbs), word(Subjects), word(Locations)],
	&[word(QuestionWords), lit("ang"), from(BARE_OBJECT)],
];

// "Ang driver dili molakaw kay hubog"
const NEGATIVE: &[Shape] = &[
	&[word(Subjects), word(NegativeVerbs), word(Reasons)],
	&[word(Subjects), word(NegativeVerbs), word(Locations)],
	&[word(NegativeVerbs), word(Subjects), word(Reasons)],
	&[word(TimeExpressions), word(Subjects), word(NegativeVerbs)],
];

// "Ugma mokaon ko og manok sa merkado"
const FUTURE: &[Shape] = &[
	&[word(TimeExpressions), word(FutureVerbs), lit("ko"), word(Objects), word(Locations)],
	&[word(FutureVerbs), lit("ko"), word(Objects), word(TimeExpressions)],
	&[word(Subjects), word(FutureVerbs), word(Objects), word(TimeExpressions)],
	&[word(TimeExpressions), word(Subjects), word(FutureVerbs), word(Locations)],
];

// Demonstrative-marked nouns: "ning tawhana"
const CURSED_THINGS: &[&str] = &["tawhana", "lugara", "butanga", "trabahoa"];
const CURSED_THINGS_SHORT: &[&str] = &["tawhana", "butanga", "lugara"];

// "Yawa! Ang init init kaayo!"
const CURSE: &[Shape] = &[
	&[word_then(CurseWords, "!"), word(Subjects), word(Adjectives), word(Intensifiers)],
	&[word(CurseWords), lit("ning"), from_then(Source::Fixed(CURSED_THINGS), ","), word(CurseAdjectives), word(Intensifiers)],
	&[word_then(CurseWords, ","), word(Subjects), word(Verbs), lit("na pud")],
	&[lit("mao ning"), word_then(CurseWords, ","), word(NegativeVerbs), word(Intensifiers)],
	&[word(CurseWords), lit("ka!"), word(Subjects), word(CurseAdjectives)],
	&[word_then(CurseWords, "!"), word(CurseAdjectives), word(Intensifiers), lit("ning"), from(Source::Fixed(CURSED_THINGS_SHORT))],
	&[word_then(Exclamations, ","), word(CurseWords), word_then(Intensifiers, "!"), word(Subjects), word(CurseAdjectives)],
];

const COMPOUND: &[Shape] = &[
	&[word(Subjects), word(Verbs), word(Connectors), word(Subjects), word(NegativeVerbs)],
	&[word(Subjects), word(Verbs), word(Objects), word(Connectors), word(NegativeVerbs), word(Reasons)],
	&[word(Subjects), word(Adjectives), word(Connectors), word(Subjects), word(Adjectives)],
	&[word(TimeExpressions), word(Subjects), word(Verbs), word(Connectors), lit("karon"), word(NegativeVerbs)],
];

const CALLS: &[&str] = &["uy", "oy", "hoy", "ay"];
const CALLS_SHORT: &[&str] = &["uy", "oy", "hoy"];
const CASUAL_SUBJECTS: &[&str] = &[
	"ang party", "ang event", "ang storya", "ang vibes", "ang food", "ang lugar", "ang music", "ang tropa",
];
const CASUAL_ADJECTIVES: Source = Source::Extended(Adjectives, &["chada", "kuyaw", "grabe"]);

// "Uy bay, chada kaayo ang party gahapon!"
const CASUAL: &[Shape] = &[
	&[from(Source::Fixed(CALLS)), word_then(Slang, ","), from(CASUAL_ADJECTIVES), word(Intensifiers), from(Source::Fixed(CASUAL_SUBJECTS))],
	&[word_then(Slang, ","), word(Reactions), word(Intensifiers)],
	&[from(Source::Fixed(CALLS_SHORT)), word_then(Slang, ","), word(Subjects), word(Adjectives), word(Intensifiers)],
	&[word_then(Slang, "!"), word_then(Exclamations, ","), from(Source::Fixed(CASUAL_SUBJECTS)), word(Adjectives)],
];

// "Mao na, sige lang bay"
const REACTION: &[Shape] = &[
	&[word_then(Reactions, ","), word(Reactions), word(Slang)],
	&[word_then(Reactions, ","), word(Exclamations), word(Intensifiers)],
	&[word(Reactions), word_then(Slang, ","), word(Reactions)],
	&[word_then(Exclamations, ","), word(Reactions), word(Intensifiers)],
];

// "Sa merkado, ang tindero nagbaligya og isda"
const LOCATION: &[Shape] = &[
	&[word_then(Locations, ","), word(Subjects), word(Verbs), word(Objects)],
	&[word(Subjects), word(Verbs), word(Locations), word(TimeExpressions)],
	&[word(Locations), word(Adjectives), word(Intensifiers), word(TimeExpressions)],
];

const COMPARISON: &[Shape] = &[
	&[lit("mas"), word(Adjectives), lit("pa"), word(Subjects), lit("kaysa"), word(Subjects)],
	&[word(Subjects), lit("mas"), word(Adjectives), lit("kaysa"), word(Locations)],
	&[lit("mas"), word(Adjectives), word(Subjects), word(Connectors), word(Subjects), word(Adjectives)],
];

const STORY: &[Shape] = &[
	&[
		from(Source::Fixed(&["mao ni", "mao to", "mura nig", "pareha rag"])),
		from_then(Source::Fixed(&["ang storya", "ang nahitabo", "ang problema", "ang tinuod"]), ","),
		word(Subjects),
		word(Verbs),
		word(Objects),
	],
	&[
		from(Source::Fixed(&["mao ni", "mao to"])),
		from_then(Source::Fixed(&["ang storya", "ang problema"]), ":"),
		word(Subjects),
		word(NegativeVerbs),
		word(Reasons),
	],
];

const OBJECT: &[Shape] = &[
	&[word(Subjects), lit("nagdala"), word(Objects), word(Locations)],
	&[lit("naa koy"), from(BARE_OBJECT), word(Locations)],
	&[word(Subjects), lit("nagpalit"), word(Objects), word(TimeExpressions)],
	&[lit("asa ang"), from_then(BARE_OBJECT, "?")],
	&[word(Subjects), lit("nagkuha"), word(Objects), lit("para"), word(Subjects)],
];

const REASON: &[Shape] = &[
	&[word(Subjects), word(Verbs), word(Reasons)],
	&[word(NegativeVerbs), word(Subjects), word(Reasons)],
	&[word_then(Reasons, ","), word(Subjects), word(NegativeVerbs)],
	&[word_then(Exclamations, ","), word(Reasons), word(Intensifiers)],
];

const CONNECTOR: &[Shape] = &[
	&[word(Subjects), word(Verbs), word(Connectors), word(Subjects), word(Verbs), word(Connectors), word(Adjectives)],
	&[word(Connectors), word(Subjects), word_then(Verbs, ","), word(Subjects), word(NegativeVerbs)],
	&[word(Subjects), word(Adjectives), word(Connectors), word(NegativeVerbs), word(Reasons)],
];

const INTENSIFIER: &[Shape] = &[
	&[word(Subjects), word(Adjectives), word(Intensifiers), word(Intensifiers)],
	&[word_then(Exclamations, ","), word(Adjectives), word(Intensifiers), word(Intensifiers), word(Subjects)],
	&[word(Subjects), word(Verbs), word(Intensifiers), word(Intensifiers), word(Locations)],
];

const CURSE_ADJ: &[Shape] = &[
	&[word(Subjects), word(CurseAdjectives), word(Intensifiers)],
	&[word_then(CurseWords, "!"), word(CurseAdjectives), lit("kaayo"), word(Subjects)],
	&[lit("ning"), from_then(Source::Swapped { category: Subjects, from: "ang ", to: "" }, ","), word(CurseAdjectives), word(Intensifiers)],
	&[word_then(Exclamations, ","), word(Subjects), word(CurseAdjectives), word(Reasons)],
];

const OBJECT_Q: &[Shape] = &[
	&[word(QuestionWords), word(Subjects), word(Verbs), word(Objects)],
	&[lit("asa"), from(Source::Swapped { category: Objects, from: "og ", to: "ang " })],
	&[word(QuestionWords), word(Subjects), word(FutureVerbs), word(Objects)],
	&[lit("kinsa"), word(Verbs), word(Objects), word(Locations)],
];

const FUTURE_TIME: &[Shape] = &[
	&[word(TimeExpressions), word(Subjects), word(FutureVerbs), word(Objects), word(Locations)],
	&[word(Subjects), word(FutureVerbs), word(Locations), word(TimeExpressions)],
	&[lit("kung"), word_then(TimeExpressions, ","), word(Subjects), word(FutureVerbs), word(Objects)],
];

const NEGATIVE_CONN: &[Shape] = &[
	&[word(Subjects), word(NegativeVerbs), word(Connectors), word(Reasons)],
	&[word(Connectors), word(Subjects), word_then(NegativeVerbs, ","), word(Subjects), word(Verbs)],
	&[word(Subjects), word(Verbs), word(Connectors), word(NegativeVerbs)],
];

const fn plain(shapes: &'static [Shape]) -> Pattern {
	Pattern::Shapes { shapes, terminal: "" }
}

const fn ending(shapes: &'static [Shape], terminal: &'static str) -> Pattern {
	Pattern::Shapes { shapes, terminal }
}

impl TemplateFamily {
	/// Returns the shapes (or the meme rule) behind this family.
	pub fn pattern(self) -> Pattern {
		match self {
			TemplateFamily::Basic => plain(BASIC),
			TemplateFamily::Time => plain(TIME),
			TemplateFamily::Adjective => plain(ADJECTIVE),
			TemplateFamily::Exclamation => ending(EXCLAMATION, "!"),
			TemplateFamily::Question => ending(QUESTION, "?"),
			TemplateFamily::Negative => plain(NEGATIVE),
			TemplateFamily::Future => plain(FUTURE),
			TemplateFamily::Curse => ending(CURSE, "!"),
			TemplateFamily::Compound => plain(COMPOUND),
			TemplateFamily::Casual => ending(CASUAL, "!"),
			TemplateFamily::Reaction => plain(REACTION),
			TemplateFamily::Location => plain(LOCATION),
			TemplateFamily::Comparison => plain(COMPARISON),
			TemplateFamily::Story => plain(STORY),
			TemplateFamily::Meme => Pattern::Meme,
			TemplateFamily::Object => plain(OBJECT),
			TemplateFamily::Reason => plain(REASON),
			TemplateFamily::Connector => plain(CONNECTOR),
			TemplateFamily::Intensifier => ending(INTENSIFIER, "!"),
			TemplateFamily::CurseAdj => ending(CURSE_ADJ, "!"),
			TemplateFamily::ObjectQ => ending(OBJECT_Q, "?"),
			TemplateFamily::FutureTime => plain(FUTURE_TIME),
			TemplateFamily::NegativeConn => plain(NEGATIVE_CONN),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::words::{WordBank, WordCategory};
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use super::super::template::Slot;

	fn shapes(family: TemplateFamily) -> &'static [Shape] {
		match family.pattern() {
			Pattern::Shapes { shapes, .. } => shapes,
			Pattern::Meme => &[],
		}
	}

	#[test]
	fn every_family_has_two_to_seven_shapes() {
		for family in TemplateFamily::ALL {
			if family == TemplateFamily::Meme {
				continue;
			}
			let count = shapes(family).len();
			assert!((2..=7).contains(&count), "{family} has {count} shapes");
		}
	}

	#[test]
	fn maybe_probabilities_are_valid() {
		for family in TemplateFamily::ALL {
			for shape in shapes(family) {
				for slot in shape.iter() {
					if let Slot::Maybe(_, p) = slot {
						assert!((0.0..=1.0).contains(p), "{family}");
					}
				}
			}
		}
	}

	#[test]
	fn every_family_renders_non_empty_text() {
		let mut rng = StdRng::seed_from_u64(42);
		for family in TemplateFamily::ALL {
			for _ in 0..50 {
				let sentence = family.render(WordBank::bisaya(), &mut rng);
				assert!(!sentence.trim().is_empty(), "{family}");
				assert!(!sentence.contains("  "), "{family}: {sentence}");
				assert_eq!(sentence, sentence.trim());
			}
		}
	}

	#[test]
	fn bare_object_question_has_no_marker() {
		// Only the "asa ang" shape ends in "?" inside the Object family.
		let mut rng = StdRng::seed_from_u64(8);
		let mut seen = false;
		for _ in 0..300 {
			let sentence = TemplateFamily::Object.render(WordBank::bisaya(), &mut rng);
			if let Some(rest) = sentence.strip_prefix("asa ang ") {
				seen = true;
				assert!(!rest.starts_with("og "));
				assert!(rest.ends_with('?'));
			}
		}
		assert!(seen);
	}

	#[test]
	fn every_category_is_referenced() {
		let mut referenced = Vec::new();
		for family in TemplateFamily::ALL {
			for shape in shapes(family) {
				for slot in shape.iter() {
					let source = match slot {
						Slot::Pick(source, _) | Slot::Maybe(source, _) => *source,
						Slot::Literal(_) => continue,
					};
					match source {
						Source::Category(category)
						| Source::Extended(category, _)
						| Source::Swapped { category, .. } => referenced.push(category),
						Source::Union(first, second) => referenced.extend([first, second]),
						Source::Fixed(_) => {}
					}
				}
			}
		}
		referenced.push(WordCategory::Memes);
		for category in WordCategory::ALL {
			assert!(referenced.contains(&category), "{category} is never used");
		}
	}
}
