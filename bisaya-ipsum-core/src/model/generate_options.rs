use serde::{Deserialize, Serialize};

use crate::error::IpsumError;
use super::curse_level::CurseLevel;

/// Smallest paragraph count accepted at the HTTP boundary.
pub const MIN_PARAGRAPHS: usize = 1;

/// Largest paragraph count accepted at the HTTP boundary.
pub const MAX_PARAGRAPHS: usize = 50;

/// Inclusive bounds on the number of sentences in a paragraph.
///
/// Missing fields take their default when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceRange {
	pub min: usize,
	pub max: usize,
}

impl Default for SentenceRange {
	fn default() -> Self {
		Self { min: 4, max: 7 }
	}
}

impl SentenceRange {
	pub fn new(min: usize, max: usize) -> Self {
		Self { min, max }
	}

	/// Effective inclusive bounds.
	///
	/// A `max` below `min` is raised to `min`, so the range is never empty.
	pub fn bounds(&self) -> (usize, usize) {
		(self.min, self.max.max(self.min))
	}
}

/// Input parameters for a generation request.
///
/// Every field has a default, so a partial JSON object deserializes to
/// the defaults merged with whatever was supplied.
///
/// # Notes
/// - `paragraphs` is not range-checked here: use `validate_paragraphs` or
///   `clamp_paragraphs` at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
	/// Number of paragraphs produced by `generate_ipsum`.
	pub paragraphs: usize,

	/// Vulgarity skew of the sentence families.
	pub curse_level: CurseLevel,

	/// Sentence count bounds of each paragraph.
	pub sentences_per_paragraph: SentenceRange,
}

impl Default for GenerateOptions {
	fn default() -> Self {
		Self {
			paragraphs: 3,
			curse_level: CurseLevel::default(),
			sentences_per_paragraph: SentenceRange::default(),
		}
	}
}

impl GenerateOptions {
	/// Default options at the given curse level.
	pub fn with_curse_level(curse_level: CurseLevel) -> Self {
		Self { curse_level, ..Self::default() }
	}
}

/// Checks a requested paragraph count against `[MIN_PARAGRAPHS, MAX_PARAGRAPHS]`.
///
/// # Errors
/// Returns `IpsumError::InvalidOption` if the count is out of range.
pub fn validate_paragraphs(paragraphs: i64) -> Result<usize, IpsumError> {
	match usize::try_from(paragraphs) {
		Ok(n) if (MIN_PARAGRAPHS..=MAX_PARAGRAPHS).contains(&n) => Ok(n),
		_ => Err(IpsumError::InvalidOption(format!(
			"Paragraphs must be between {MIN_PARAGRAPHS} and {MAX_PARAGRAPHS}, bay!"
		))),
	}
}

/// Forces a requested paragraph count into `[MIN_PARAGRAPHS, MAX_PARAGRAPHS]`.
pub fn clamp_paragraphs(paragraphs: i64) -> usize {
	paragraphs.clamp(MIN_PARAGRAPHS as i64, MAX_PARAGRAPHS as i64) as usize
}
