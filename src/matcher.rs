//! Longest-match scanning for emoji sequences.
//!
//! Many emoji are made of shorter emoji followed by modifiers. `👨🏽‍⚖️` for
//! example starts with `👨` and `👨🏽`, both of which are emoji on their own.
//! The matcher always picks the longest known sequence starting at a position,
//! so composed emoji are never split into a shorter emoji and leftover
//! modifier characters.

use std::cmp::Reverse;

use aho_corasick::{AhoCorasick, MatchKind};
use log::{debug, warn};

use crate::{parse, Error, Result};

fn is_joiner_or_selector(c: char) -> bool {
    matches!(c, '\u{200d}' | '\u{fe0e}' | '\u{fe0f}')
}

/// Whether a sequence can stand on its own as a pattern.
///
/// Sequences consisting only of zero width joiners and variation selectors
/// would match the glue inside other emoji.
fn is_compilable(sequence: &str) -> bool {
    !sequence.is_empty() && !sequence.chars().all(is_joiner_or_selector)
}

/// A single match of a known sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    sequence: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// The matched part of the text.
    pub fn sequence(&self) -> &'t str {
        self.sequence
    }

    /// Byte offset of the first byte of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset right after the last byte of the match.
    pub fn end(&self) -> usize {
        self.end
    }
}

/// Iterator over the matches in a text, created by [`Matcher::scan`].
pub struct Matches<'m, 't> {
    inner: aho_corasick::FindIter<'m, 't>,
    text: &'t str,
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.inner.next()?;
        Some(Match {
            sequence: &self.text[found.range()],
            start: found.start(),
            end: found.end(),
        })
    }
}

/// A set of sequences compiled into an automaton.
///
/// The matcher holds no state between scans and can be shared freely.
#[derive(Debug, Clone)]
pub struct Matcher {
    automaton: AhoCorasick,
    /// Indexed by pattern id, longest first.
    patterns: Vec<String>,
    skipped: usize,
}

impl Matcher {
    /// Compile a set of sequences.
    ///
    /// If `tolerant` is set, sequences that can't be compiled are skipped with
    /// a warning. Otherwise, they cause an [`Error::UncompilableSequence`].
    /// Compilation fails with [`Error::NothingToMatch`] if no sequence is left.
    pub fn compile<I, S>(sequences: I, tolerant: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = vec![];
        let mut skipped = 0;
        for sequence in sequences {
            let sequence = sequence.as_ref();
            if is_compilable(sequence) {
                patterns.push(sequence.to_string());
            } else if tolerant {
                warn!("Skipping uncompilable sequence {}", parse::escape(sequence));
                skipped += 1;
            } else {
                return Err(Error::UncompilableSequence(sequence.to_string()));
            }
        }

        // Equal byte lengths at the same offset mean equal sequences, so this
        // order leaves no ties between distinct patterns.
        patterns.sort_unstable_by(|a, b| (Reverse(a.len()), a).cmp(&(Reverse(b.len()), b)));
        patterns.dedup();

        if patterns.is_empty() {
            return Err(Error::NothingToMatch);
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)?;

        debug!(
            "Compiled {} sequences into matcher ({skipped} skipped)",
            patterns.len()
        );
        Ok(Self {
            automaton,
            patterns,
            skipped,
        })
    }

    /// Number of compiled sequences.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of sequences skipped during compilation.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The compiled sequences, longest first.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.as_str())
    }

    /// Find all non-overlapping matches from left to right.
    ///
    /// At every position, the longest matching sequence wins. Scanning
    /// continues after the end of each match.
    pub fn scan<'m, 't>(&'m self, text: &'t str) -> Matches<'m, 't> {
        Matches {
            inner: self.automaton.find_iter(text),
            text,
        }
    }

    /// Whether the text contains any known sequence.
    pub fn is_match(&self, text: &str) -> bool {
        self.automaton.is_match(text)
    }

    /// Replace every match in a single pass.
    ///
    /// Replacements are never scanned again.
    pub fn replace_all<F, R>(&self, text: &str, mut replacement: F) -> String
    where
        F: FnMut(Match<'_>) -> R,
        R: AsRef<str>,
    {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for found in self.scan(text) {
            out.push_str(&text[cursor..found.start]);
            out.push_str(replacement(found).as_ref());
            cursor = found.end;
        }
        out.push_str(&text[cursor..]);
        out
    }
}
