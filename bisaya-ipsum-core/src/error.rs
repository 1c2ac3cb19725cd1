use thiserror::Error;

use crate::words::WordCategory;

/// Errors surfaced by the generator library.
///
/// Generation itself never fails: these only come from lookups, option
/// parsing and startup validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IpsumError {
	/// Unknown word category name.
	#[error("unknown word category: {0}")]
	NotFound(String),
	/// Out-of-range or malformed generation option.
	#[error("invalid option: {0}")]
	InvalidOption(String),
	/// A word bank category has no phrases.
	#[error("word category '{0}' is empty")]
	EmptyCategory(WordCategory),
}
