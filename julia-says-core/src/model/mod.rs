//! Top-level module for the word-gram generation system.
//!
//! This module provides a first-order word-level text generator:
//! - A word-transition model (`WordGramModel`)
//! - Markov sentence synthesis (`MarkovGenerator`)
//! - Model-free literal sentence sampling (`select_sentence`)

/// First-order mapping from a lowercased word to the ordered sequence of
/// raw words observed immediately after it in the corpus.
pub mod word_grams;

/// Random-walk sentence synthesis over a word-gram model.
///
/// Handles seed selection, the bounded walk, and trailing-punctuation
/// normalization.
pub mod markov;

/// Literal sentence sampling from the raw corpus text.
///
/// No model is built on this path; the corpus is split on periods and
/// one segment is chosen at random.
pub mod sentence;
