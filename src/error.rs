//! Error handling.

use std::{fmt, io};

/// Why no [`Catalog`](crate::Catalog) could be produced.
#[derive(Debug)]
pub enum Unavailable {
    /// The data file is missing or could not be read.
    Io(io::Error),

    /// The snapshot file exists but is not a valid snapshot.
    MalformedSnapshot(serde_json::Error),

    /// The source contained no usable entries.
    Empty,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::MalformedSnapshot(err) => write!(f, "malformed snapshot: {err}"),
            Self::Empty => write!(f, "source contains no emoji"),
        }
    }
}

/// Possible errors while loading emoji data or building a matcher.
#[derive(Debug)]
pub enum Error {
    /// No emoji data could be loaded.
    ///
    /// Every text operation fails with this error if the data it depends on
    /// is missing. An empty result is never returned in its place.
    DataUnavailable(Unavailable),

    /// An entry with an empty sequence was offered to a catalog.
    ///
    /// The string is the entry's description.
    EmptySequence(String),

    /// A sequence can't be used as a literal pattern.
    ///
    /// This only occurs when compiling without
    /// [`Config::tolerant`](crate::Config::tolerant).
    UncompilableSequence(String),

    /// Every sequence was skipped during compilation.
    NothingToMatch,

    /// The automaton could not be built.
    Build(aho_corasick::BuildError),
}

impl Error {
    /// Whether no emoji data could be loaded at all.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataUnavailable(cause) => write!(f, "emoji data unavailable: {cause}"),
            Self::EmptySequence(desc) => write!(f, "entry {desc:?} has an empty sequence"),
            Self::UncompilableSequence(seq) => {
                write!(f, "sequence {} can't be compiled", crate::parse::escape(seq))
            }
            Self::NothingToMatch => write!(f, "no sequence could be compiled"),
            Self::Build(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Unavailable> for Error {
    fn from(cause: Unavailable) -> Self {
        Self::DataUnavailable(cause)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::DataUnavailable(Unavailable::Io(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::DataUnavailable(Unavailable::MalformedSnapshot(err))
    }
}

impl From<aho_corasick::BuildError> for Error {
    fn from(err: aho_corasick::BuildError) -> Self {
        Self::Build(err)
    }
}

/// An alias of [`Result`](std::result::Result) for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
