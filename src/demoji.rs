use std::collections::HashMap;

use jiff::Timestamp;

use crate::error::Unavailable;
use crate::{Catalog, Config, Error, Matcher, Result};

/// A catalog and the matcher compiled from it.
///
/// Build it once and reuse it for as many texts as needed. All text
/// operations are read-only, so a `Demoji` can be shared between threads.
#[derive(Debug, Clone)]
pub struct Demoji {
    catalog: Catalog,
    matcher: Matcher,
    timestamp: Option<Timestamp>,
}

impl Demoji {
    /// Load the configured source and compile its sequences.
    pub fn new(config: &Config) -> Result<Self> {
        let dataset = config.source.load()?;
        let mut demoji = Self::from_catalog(dataset.catalog, config.tolerant)?;
        demoji.timestamp = dataset.timestamp;
        Ok(demoji)
    }

    /// Compile an already loaded catalog.
    ///
    /// An empty catalog is rejected with [`Error::DataUnavailable`] since it
    /// would silently never find anything.
    pub fn from_catalog(catalog: Catalog, tolerant: bool) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::DataUnavailable(Unavailable::Empty));
        }
        let matcher = Matcher::compile(catalog.sequences(), tolerant)?;
        Ok(Self {
            catalog,
            matcher,
            timestamp: None,
        })
    }

    /// Build from the data compiled into the library.
    pub fn bundled() -> Result<Self> {
        Self::new(&Config::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// When the loaded data was captured, if known.
    pub fn last_downloaded_timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }

    fn description(&self, sequence: &str) -> Option<&str> {
        // The matcher only knows sequences from the catalog
        self.catalog.get(sequence)
    }

    /// Whether the text contains any known emoji.
    pub fn has_emoji(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Find the distinct emoji in a text, mapped to their descriptions.
    pub fn find_unique<'s, 't>(&'s self, text: &'t str) -> HashMap<&'t str, &'s str> {
        self.matcher
            .scan(text)
            .filter_map(|m| Some((m.sequence(), self.description(m.sequence())?)))
            .collect()
    }

    /// Find every emoji occurrence in a text, in order.
    ///
    /// Returns the descriptions if `descriptions` is set, the emoji
    /// themselves otherwise.
    pub fn find_all<'a>(&'a self, text: &'a str, descriptions: bool) -> Vec<&'a str> {
        let matches = self.matcher.scan(text);
        if descriptions {
            matches
                .filter_map(|m| self.description(m.sequence()))
                .collect()
        } else {
            matches.map(|m| m.sequence()).collect()
        }
    }

    /// Replace every emoji with `replacement`.
    pub fn strip(&self, text: &str, replacement: &str) -> String {
        self.matcher.replace_all(text, |_| replacement)
    }

    /// Remove every emoji.
    pub fn remove(&self, text: &str) -> String {
        self.strip(text, "")
    }

    /// Replace every emoji with its description surrounded by `sep`.
    ///
    /// The text is scanned once, so descriptions that happen to contain emoji
    /// are left alone.
    pub fn replace_with_description(&self, text: &str, sep: &str) -> String {
        self.matcher
            .replace_all(text, |m| match self.description(m.sequence()) {
                Some(desc) => format!("{sep}{desc}{sep}"),
                None => m.sequence().to_string(),
            })
    }

    /// Replace every emoji with its description surrounded by colons, e.g.
    /// `🔥` with `:fire:`.
    pub fn demojize(&self, text: &str) -> String {
        self.replace_with_description(text, ":")
    }

    /// Find the emoji with a description, ignoring case.
    pub fn emoji_for(&self, description: &str) -> Option<&str> {
        self.catalog.find_by_description(description)
    }
}
