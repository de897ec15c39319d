//! Where emoji data comes from.

use std::fs;
use std::path::PathBuf;

use jiff::Timestamp;
use log::debug;

use crate::error::Unavailable;
use crate::{Catalog, EmojiEntry, Error, Result, Snapshot, BUNDLED_TIMESTAMP};

/// A source of emoji data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    /// The registry data compiled into the library.
    #[default]
    Bundled,

    /// A JSON file written by [`Snapshot::save`].
    Snapshot(PathBuf),

    /// A local copy of a unicode.org `emoji-test.txt` file.
    EmojiTest(PathBuf),

    /// Entries provided by the caller.
    Entries(Vec<EmojiEntry>),
}

/// A catalog and, if known, the time its data was captured.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub catalog: Catalog,
    pub timestamp: Option<Timestamp>,
}

impl Source {
    /// Load the data.
    ///
    /// Fails with [`Error::DataUnavailable`] if the data can't be read or
    /// contains no entries.
    pub fn load(&self) -> Result<Dataset> {
        let dataset = match self {
            Self::Bundled => Dataset {
                catalog: Catalog::bundled(),
                timestamp: Some(BUNDLED_TIMESTAMP),
            },
            Self::Snapshot(path) => {
                let snapshot = Snapshot::load(path)?;
                let timestamp = snapshot.timestamp;
                Dataset {
                    catalog: snapshot.into_catalog()?,
                    timestamp: Some(timestamp),
                }
            }
            Self::EmojiTest(path) => Dataset {
                catalog: Catalog::parse(&fs::read_to_string(path)?),
                timestamp: None,
            },
            Self::Entries(entries) => Dataset {
                catalog: Catalog::from_entries(entries.iter().cloned())?,
                timestamp: None,
            },
        };

        if dataset.catalog.is_empty() {
            return Err(Error::DataUnavailable(Unavailable::Empty));
        }

        debug!("Loaded {} emoji from {self:?}", dataset.catalog.len());
        Ok(dataset)
    }
}
