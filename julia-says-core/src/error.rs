use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the text-generation subsystem.
///
/// Every variant is a misconfiguration the operator must fix; nothing in
/// this crate retries. Running out of successors during a random walk is
/// a normal early stop and never surfaces here.
#[derive(Debug, Error)]
pub enum TextGenError {
	/// The configured corpus directory does not exist.
	#[error("missing corpus folder {}", .0.display())]
	MissingCorpusFolder(PathBuf),

	/// No file in the corpus directory starts with the requested prefix.
	#[error("cannot find corpus file with prefix {0}")]
	UnknownCorpus(String),

	/// A resolved corpus path vanished or could not be read.
	#[error("cannot read {}", .path.display())]
	CorpusRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The corpus contains no words, so no seed can start a random walk.
	#[error("corpus has no words to seed a sentence")]
	EmptyCorpus,
}
