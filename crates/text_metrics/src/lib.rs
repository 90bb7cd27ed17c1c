//! # Text Metrics
//!
//! This crate provides the text post-processing used to turn a raw speech
//! transcript into a cleaner, more readable body of text: filler-word
//! stripping, sentence tokenization, sentence-length filtering, extractive
//! summarization and Flesch reading-ease scoring.
//!
//! Everything here is a pure function over string slices so the pipeline
//! layer stays independently testable.

mod clarity;
mod fillers;
mod readability;
mod sentences;
mod summary;

pub use clarity::{improve_clarity, MAX_SENTENCE_WORDS, MIN_SENTENCE_WORDS};
pub use fillers::strip_fillers;
pub use readability::{flesch_reading_ease, round2};
pub use sentences::split_sentences;
pub use summary::{summarize, DEFAULT_MAX_SENTENCES};
