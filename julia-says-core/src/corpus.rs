use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::TextGenError;

/// Resolves a corpus identifier to a concrete file in `folder`.
///
/// Scans the directory entries and returns the path of the first regular
/// file whose name starts with `prefix` (an extension is not required to
/// match). The scan follows the directory listing order, which is
/// platform-dependent; callers must not rely on a specific file winning
/// when several share a prefix.
///
/// Emits an informational notice naming the resolved file.
///
/// # Errors
/// - [`TextGenError::MissingCorpusFolder`] if `folder` is not an existing directory.
/// - [`TextGenError::UnknownCorpus`] if no entry matches the prefix.
pub fn resolve_corpus<P: AsRef<Path>>(folder: P, prefix: &str) -> Result<PathBuf, TextGenError> {
	let folder = folder.as_ref();
	if !folder.is_dir() {
		return Err(TextGenError::MissingCorpusFolder(folder.to_path_buf()));
	}

	let entries = fs::read_dir(folder).map_err(|source| TextGenError::CorpusRead {
		path: folder.to_path_buf(),
		source,
	})?;

	for entry in entries {
		let entry = entry.map_err(|source| TextGenError::CorpusRead {
			path: folder.to_path_buf(),
			source,
		})?;

		let path = entry.path();
		if !path.is_file() {
			continue;
		}

		let name = entry.file_name().to_string_lossy().to_string();
		if name.starts_with(prefix) {
			info!("Found corpus file {}", name);
			return Ok(path);
		}
	}

	Err(TextGenError::UnknownCorpus(prefix.to_owned()))
}

/// Loads a resolved corpus file into a single-line text blob.
///
/// The whole file is read into memory at once; there is no streaming
/// path. Every newline and carriage return is removed with no
/// substitution character, so words split across lines without a
/// trailing space become mechanically concatenated.
///
/// # Errors
/// [`TextGenError::CorpusRead`] if the path vanished since resolution or
/// cannot be read; the message names the missing path.
pub fn load_corpus<P: AsRef<Path>>(filename: P) -> Result<String, TextGenError> {
	let path = filename.as_ref();
	let contents = fs::read_to_string(path).map_err(|source| TextGenError::CorpusRead {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(contents.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
}
