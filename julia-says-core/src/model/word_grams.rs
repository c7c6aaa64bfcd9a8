use std::collections::HashMap;

/// Represents a first-order word-transition model.
///
/// The `WordGramModel` maps each lowercased corpus word to the ordered
/// sequence of raw (case-preserved) words observed immediately following
/// it anywhere in the corpus. Successor order follows first occurrence.
///
/// # Responsibilities
/// - Build the mapping from a whitespace-tokenized text blob
/// - Answer successor lookups for the random walk
///
/// # Invariants
/// - Every word of the source text has an entry, including the final
///   word (whose successor list may be empty)
/// - Keys are lowercased; successor values keep their original case
/// - The concatenation of all successor lists has length token count - 1
#[derive(Clone, Debug, PartialEq)]
pub struct WordGramModel {
	grams: HashMap<String, Vec<String>>,
}

impl WordGramModel {
	/// Builds the model from a text blob.
	///
	/// Tokens are whitespace-delimited; punctuation stays attached and no
	/// normalization happens beyond lowercasing the lookup keys. The
	/// build is a pure function of `text`: identical input always yields
	/// an identical mapping.
	///
	/// # Notes
	/// - A zero- or one-token text yields at most one entry with an empty
	///   successor list.
	pub fn from_text(text: &str) -> Self {
		let words: Vec<&str> = text.split_whitespace().collect();
		let mut grams: HashMap<String, Vec<String>> = HashMap::new();

		// For each adjacent pair, record the raw successor under the
		// lowercased predecessor
		for pair in words.windows(2) {
			grams.entry(pair[0].to_lowercase()).or_default().push(pair[1].to_owned());
		}

		// The last word potentially has nothing following it
		if let Some(last) = words.last() {
			grams.entry(last.to_lowercase()).or_default();
		}

		Self { grams }
	}

	/// Returns the observed successors of `word`.
	///
	/// The lookup key is lowercased to match stored entries. `None` means
	/// the word never occurred in the source text; an empty slice means
	/// it only occurred as the final token.
	pub fn successors(&self, word: &str) -> Option<&[String]> {
		self.grams.get(&word.to_lowercase()).map(Vec::as_slice)
	}

	/// Number of distinct lowercased words in the model.
	pub fn len(&self) -> usize {
		self.grams.len()
	}

	/// True when the source text had no words at all.
	pub fn is_empty(&self) -> bool {
		self.grams.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn one_entry_per_distinct_lowercase_word() {
		let model = WordGramModel::from_text("the cat sat. the dog ran.");
		// the, cat, sat., dog, ran.
		assert_eq!(model.len(), 5);
	}

	#[test]
	fn successors_follow_first_occurrence_order() {
		let model = WordGramModel::from_text("the cat sat. the dog ran.");
		let expected: &[String] = &["cat".to_owned(), "dog".to_owned()];
		assert_eq!(model.successors("the"), Some(expected));
	}

	#[test]
	fn final_word_has_an_entry_with_no_successors() {
		let model = WordGramModel::from_text("one two three");
		let empty: &[String] = &[];
		assert_eq!(model.successors("three"), Some(empty));
	}

	#[test]
	fn successor_totals_match_adjacent_pair_count() {
		let model = WordGramModel::from_text("a b c a b d e");
		let total: usize = ["a", "b", "c", "d", "e"]
			.iter()
			.map(|word| model.successors(word).unwrap().len())
			.sum();
		assert_eq!(total, 6);
	}

	#[test]
	fn lookup_is_lowercased_but_values_keep_case() {
		let model = WordGramModel::from_text("Hello World hello Rust");
		let expected: &[String] = &["World".to_owned(), "Rust".to_owned()];
		assert_eq!(model.successors("HELLO"), Some(expected));
	}

	#[test]
	fn unknown_word_has_no_entry() {
		let model = WordGramModel::from_text("a b c");
		assert_eq!(model.successors("zebra"), None);
	}

	#[test]
	fn empty_and_single_word_texts() {
		assert!(WordGramModel::from_text("").is_empty());

		let model = WordGramModel::from_text("word");
		let empty: &[String] = &[];
		assert_eq!(model.len(), 1);
		assert_eq!(model.successors("word"), Some(empty));
	}

	#[test]
	fn building_twice_yields_the_same_mapping() {
		let text = "the quick brown fox jumps over the lazy dog";
		assert_eq!(WordGramModel::from_text(text), WordGramModel::from_text(text));
	}
}
