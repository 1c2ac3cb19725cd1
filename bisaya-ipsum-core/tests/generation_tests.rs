//! Generation behavior over the built-in word bank.

use bisaya_ipsum_core::error::IpsumError;
use bisaya_ipsum_core::model::curse_level::CurseLevel;
use bisaya_ipsum_core::model::generate_options::{GenerateOptions, SentenceRange};
use bisaya_ipsum_core::model::generator::{Generator, TERMINALS};
use bisaya_ipsum_core::words::{WordBank, WordCategory};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Builds a large corpus of long paragraphs, lowercased for matching.
fn corpus(level: CurseLevel, paragraphs: usize, seed: u64) -> String {
	let generator = Generator::default();
	let mut rng = StdRng::seed_from_u64(seed);
	let options = GenerateOptions {
		paragraphs,
		curse_level: level,
		sentences_per_paragraph: SentenceRange::new(10, 15),
	};
	generator.generate_text(&options, &mut rng).to_lowercase()
}

#[test]
fn five_medium_paragraphs() {
	let generator = Generator::default();
	let mut rng = StdRng::seed_from_u64(2024);
	let options = GenerateOptions { paragraphs: 5, curse_level: CurseLevel::Medium, ..GenerateOptions::default() };

	let paragraphs = generator.generate_ipsum(&options, &mut rng);

	assert_eq!(paragraphs.len(), 5);
	for paragraph in &paragraphs {
		assert!(!paragraph.is_empty());
		assert!(paragraph.contains(TERMINALS));
	}
}

#[test]
fn zero_paragraphs_at_the_core_is_empty() {
	let generator = Generator::default();
	let options = GenerateOptions { paragraphs: 0, ..GenerateOptions::default() };
	assert!(generator.generate_ipsum(&options, &mut StdRng::seed_from_u64(1)).is_empty());
}

#[test]
fn bogus_category_is_not_found() {
	assert_eq!(
		WordBank::bisaya().lookup("bogusCategory").unwrap_err(),
		IpsumError::NotFound("bogusCategory".to_owned())
	);
}

#[test]
fn yawa_text_curses_more_than_low_text() {
	let count_curses = |text: &str| {
		WordBank::bisaya()
			.get(WordCategory::CurseWords)
			.iter()
			.map(|word| text.matches(&word.to_lowercase()).count())
			.sum::<usize>()
	};
	let low = count_curses(&corpus(CurseLevel::Low, 20, 10));
	let yawa = count_curses(&corpus(CurseLevel::Yawa, 20, 11));
	assert!(yawa > low, "yawa {yawa} vs low {low}");
}

#[test]
fn yawa_corpus_covers_every_category() {
	let text = corpus(CurseLevel::Yawa, 600, 12);
	for (category, phrases) in WordBank::bisaya().iter() {
		let found = phrases.iter().filter(|phrase| text.contains(&phrase.to_lowercase())).count();
		let coverage = found as f64 / phrases.len() as f64;
		assert!(coverage >= 0.7, "{category} coverage {found}/{}", phrases.len());
	}
}

#[test]
fn paragraphs_contain_no_line_breaks() {
	let text = corpus(CurseLevel::High, 10, 13);
	for paragraph in text.split("\n\n") {
		assert!(!paragraph.contains('\n'));
		assert!(!paragraph.contains("  "));
	}
}
