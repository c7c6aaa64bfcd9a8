use std::path::Path;

use rand::Rng;

use crate::corpus;
use crate::error::TextGenError;
use crate::model::markov::{MarkovGenerator, Seed};
use crate::model::sentence::select_sentence;

/// Generates a sentence from a corpus directory, with an injected RNG.
///
/// Resolves `corpus` (a built-in name or an arbitrary filename prefix)
/// inside `corpus_folder` and loads the file once. With `use_model` set,
/// a fresh word-gram model is built and walked, appending up to `size`
/// words after the random seed word; otherwise a literal sentence is
/// sampled from the corpus. Nothing is cached between calls.
///
/// The returned sentence is never empty and always ends with a period
/// (the degenerate "." from sampling an empty segment counts as
/// non-empty).
///
/// # Errors
/// - [`TextGenError::MissingCorpusFolder`] if the corpus directory is absent.
/// - [`TextGenError::UnknownCorpus`] if no file matches the prefix.
/// - [`TextGenError::CorpusRead`] if the resolved file cannot be read.
/// - [`TextGenError::EmptyCorpus`] if `use_model` is set on a wordless corpus.
pub fn generate_text_with<P, R>(
	corpus_folder: P,
	corpus: &str,
	use_model: bool,
	size: usize,
	rng: &mut R,
) -> Result<String, TextGenError>
where
	P: AsRef<Path>,
	R: Rng + ?Sized,
{
	let filename = corpus::resolve_corpus(corpus_folder, corpus)?;
	let text = corpus::load_corpus(&filename)?;

	if use_model {
		MarkovGenerator::new(&text).generate(Seed::Random, size, rng)
	} else {
		Ok(select_sentence(&text, rng))
	}
}

/// Same as [`generate_text_with`], drawing from the process-wide RNG.
///
/// Runs through this entry point are not reproducible; callers needing
/// determinism should pass a seeded generator to [`generate_text_with`].
pub fn generate_text<P: AsRef<Path>>(
	corpus_folder: P,
	corpus: &str,
	use_model: bool,
	size: usize,
) -> Result<String, TextGenError> {
	generate_text_with(corpus_folder, corpus, use_model, size, &mut rand::rng())
}
