//! Word-gram-based text generation library.
//!
//! This crate is the text-generation subsystem of a generative-art tool
//! that overlays sentences onto fractal images. It provides:
//! - Corpus resolution and loading from a flat corpus directory
//! - A first-order word-transition model (word-grams)
//! - Markov sentence synthesis via a bounded random walk
//! - Model-free literal sentence sampling
//!
//! The image and CLI layers only call the [`generate_text`] facade and
//! treat the returned sentence as an opaque string.

/// Core word-gram model and generation logic.
///
/// Exposes the word-gram builder, the Markov sentence generator and the
/// literal sentence selector.
pub mod model;

/// Corpus directory resolution and loading.
///
/// Maps a corpus identifier (built-in name or filename prefix) to a file
/// and reads it into a single-line text blob.
pub mod corpus;

/// Error taxonomy shared by the whole subsystem.
pub mod error;

/// High-level facade dispatching between generation modes.
pub mod generate;

pub use error::TextGenError;
pub use generate::{generate_text, generate_text_with};
