//! Bisaya "lorem ipsum" generation library.
//!
//! This crate provides a randomized Cebuano/Bisaya filler text generator:
//! - Static word lists grouped by grammatical role
//! - Sentence template families assembled from those lists
//! - Curse-level weighted selection of the family of each sentence
//! - Sentence, paragraph and multi-paragraph composition
//!
//! Randomness is always passed in by the caller, so a seeded RNG gives
//! reproducible output.

/// Core sentence templates, weighting and composition.
pub mod model;

/// Word bank: categorized phrase lists.
pub mod words;

/// Library error type.
pub mod error;
