use rand::Rng;
use rand::prelude::IndexedRandom;

use super::word_grams::WordGramModel;
use crate::error::TextGenError;

/// Strategy used to select the starting word of a generated sentence.
///
/// # Variants
/// - `Random`: pick a uniformly random token from the corpus token
///   sequence (not from the model keys, so frequent words are more
///   likely seeds).
/// - `Custom(&str)`: use the provided word as the starting word.
#[derive(PartialEq)]
pub enum Seed<'a> {
	Random,
	Custom(&'a str),
}

/// Synthesizes sentences by a bounded random walk over a word-gram model.
///
/// # Responsibilities
/// - Keep the corpus token sequence for seed selection
/// - Build the word-gram model from the same text, once per generator
/// - Walk the model and normalize trailing punctuation
///
/// # Invariants
/// - `words` and `grams` are built from the same text, so every word
///   reached during a walk has a model entry
/// - The model is first-order: the next-word distribution depends only
///   on the current word
pub struct MarkovGenerator {
	/// The corpus token sequence, case preserved.
	words: Vec<String>,
	/// Successor model keyed by lowercased word.
	grams: WordGramModel,
}

impl MarkovGenerator {
	/// Builds a generator from a corpus text blob.
	///
	/// The model is rebuilt on every construction; nothing is cached
	/// across generation requests.
	pub fn new(text: &str) -> Self {
		Self {
			words: text.split_whitespace().map(str::to_owned).collect(),
			grams: WordGramModel::from_text(text),
		}
	}

	/// Generates a sentence of at most `size` words beyond the seed.
	///
	/// The seed's first letter is capitalized, then the walk repeatedly
	/// looks up the lowercased current word and appends one of its
	/// successors at random, separated by a single space. An empty
	/// successor list ends the walk early; that is a normal stop, not an
	/// error. Punctuation stays attached to words; the only normalization
	/// is dropping a trailing ',', ' ' or '!' before terminating with a
	/// period.
	///
	/// # Errors
	/// [`TextGenError::EmptyCorpus`] if `Seed::Random` is requested on a
	/// corpus with no words.
	pub fn generate<R: Rng + ?Sized>(&self, seed: Seed, size: usize, rng: &mut R) -> Result<String, TextGenError> {
		let mut current = match seed {
			Seed::Random => self.words.choose(rng).ok_or(TextGenError::EmptyCorpus)?.clone(),
			Seed::Custom(word) => word.to_owned(),
		};

		let mut result = capitalize(&current);
		for _ in 0..size {
			// Every corpus word has an entry by construction; only a
			// custom seed absent from the corpus misses here
			let Some(possibilities) = self.grams.successors(&current) else {
				break;
			};
			let Some(next_word) = possibilities.choose(rng) else {
				break;
			};

			result.push(' ');
			result.push_str(next_word);
			current = next_word.clone();
		}

		// Ensure we end in a period
		if result.ends_with([',', ' ', '!']) {
			result.pop();
		}
		result.push('.');

		Ok(result)
	}
}

/// Uppercases the first letter of a word, leaving the rest untouched.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
