//! Top-level module for the sentence generation system.
//!
//! This module provides a template-driven Bisaya text generator, including:
//! - Curse levels and their family weight tables (`CurseLevel`, `WeightTable`)
//! - Sentence template families and their shapes (`TemplateFamily`)
//! - Generation parameters (`GenerateOptions`)
//! - A high-level generation interface (`Generator`)

/// High-level interface composing sentences, paragraphs and documents.
///
/// Exposes sentence capitalization/punctuation and paragraph grouping
/// with an injected random source.
pub mod generator;

/// Generation parameters with their defaults and boundary checks.
pub mod generate_options;

/// Curse level knob mapping to a weight table.
pub mod curse_level;

/// Weighted template family selection.
///
/// Holds the four fixed weight tables and the cumulative-subtraction walk.
pub mod weights;

/// Template families, slot sources and the shape assembler.
pub mod template;

/// Shape data of every template family.
///
/// Pure data: the assembly logic lives in `template`.
mod families;
