//! All emoji known to the library and their descriptions.

use std::collections::hash_map::{self, HashMap};

use jiff::Timestamp;

use crate::{parse, Error, Result};

const EMOJI_RAW: &str = include_str!("emoji-test.txt");

/// Version of the unicode.org emoji registry the bundled data is taken from.
pub const EMOJI_VERSION: &str = "16.0";

/// Where the registry of [`EMOJI_VERSION`] can be downloaded.
pub const URL: &str = "https://unicode.org/Public/emoji/16.0/emoji-test.txt";

/// When the bundled data was captured.
pub const BUNDLED_TIMESTAMP: Timestamp = Timestamp::constant(1_725_926_400, 0);

/// A single emoji sequence and its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmojiEntry {
    sequence: String,
    description: String,
}

impl EmojiEntry {
    pub fn new<S: Into<String>, D: Into<String>>(sequence: S, description: D) -> Self {
        Self {
            sequence: sequence.into(),
            description: description.into(),
        }
    }

    /// The code points making up the emoji, e.g. `"🔥"`.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The description, e.g. `"fire"`.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A map from emoji sequences to their descriptions.
///
/// A catalog never contains an empty sequence. It can't be modified after it
/// was created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog(HashMap<String, String>);

impl Catalog {
    /// Build a catalog from entries.
    ///
    /// If a sequence appears more than once, the last entry wins.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = EmojiEntry>,
    {
        let mut codes = HashMap::new();
        for entry in entries {
            if entry.sequence.is_empty() {
                return Err(Error::EmptySequence(entry.description));
            }
            codes.insert(entry.sequence, entry.description);
        }
        Ok(Self(codes))
    }

    /// Parse registry text in the `emoji-test.txt` format.
    ///
    /// Malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        // Parsed sequences are never empty
        let codes = parse::parse_emoji_test(text)
            .into_iter()
            .map(|e| (e.sequence, e.description))
            .collect();
        Self(codes)
    }

    /// The catalog compiled into the library.
    pub fn bundled() -> Self {
        Self::parse(EMOJI_RAW)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the description of a sequence.
    pub fn get(&self, sequence: &str) -> Option<&str> {
        self.0.get(sequence).map(|d| d.as_str())
    }

    pub fn contains(&self, sequence: &str) -> bool {
        self.0.contains_key(sequence)
    }

    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> CatalogIter<'_> {
        CatalogIter(self.0.iter())
    }

    /// Find the sequence for a description, ignoring case.
    ///
    /// Some descriptions belong to multiple sequences, usually a fully
    /// qualified sequence and its unqualified variant. In that case, the
    /// longest sequence is returned.
    pub fn find_by_description(&self, description: &str) -> Option<&str> {
        self.0
            .iter()
            .filter(|(_, d)| caseless::default_caseless_match_str(d, description))
            .map(|(s, _)| s.as_str())
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))
    }

    pub(crate) fn into_map(self) -> HashMap<String, String> {
        self.0
    }
}

/// Iterator over `(sequence, description)` pairs of a [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogIter<'a>(hash_map::Iter<'a, String, String>);

impl<'a> Iterator for CatalogIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(s, d)| (s.as_str(), d.as_str()))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = (&'a str, &'a str);
    type IntoIter = CatalogIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
