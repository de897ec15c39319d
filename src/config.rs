use crate::Source;

/// How a [`Demoji`](crate::Demoji) is built.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Where the emoji data is loaded from.
    pub source: Source,
    /// Skip sequences that can't be compiled instead of failing.
    ///
    /// Skipped sequences are logged as warnings. Compilation still fails if
    /// every sequence is skipped.
    pub tolerant: bool,
}

impl Config {
    /// A tolerant config loading from `source`.
    pub fn new(source: Source) -> Self {
        Self {
            source,
            tolerant: true,
        }
    }

    /// Fail on uncompilable sequences instead of skipping them.
    pub fn strict(mut self) -> Self {
        self.tolerant = false;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Source::Bundled)
    }
}
