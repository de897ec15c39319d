//! Persisted emoji data.
//!
//! A snapshot is a JSON object with the capture time in seconds since the
//! unix epoch and the sequence-to-description map:
//!
//! ```json
//! {"timestamp":1626638245,"codes":{"🔥":"fire"}}
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Catalog, EmojiEntry, Result};

/// Emoji data together with the time it was captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the data was captured.
    #[serde(with = "jiff::fmt::serde::timestamp::second::required")]
    pub timestamp: Timestamp,
    /// Map from emoji sequences to their descriptions.
    pub codes: HashMap<String, String>,
}

impl Snapshot {
    /// Capture a catalog right now.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            timestamp: Timestamp::now(),
            codes: catalog.into_map(),
        }
    }

    /// Capture registry text in the `emoji-test.txt` format right now, for
    /// example a freshly downloaded copy of [`URL`](crate::URL).
    pub fn from_emoji_test(text: &str) -> Self {
        Self::new(Catalog::parse(text))
    }

    /// Read a snapshot from a file.
    ///
    /// Fails with [`Error::DataUnavailable`](crate::Error::DataUnavailable) if
    /// the file can't be read or doesn't contain a snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot: Self = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded snapshot from {} with {} entries captured at {}",
            path.display(),
            snapshot.codes.len(),
            snapshot.timestamp
        );
        Ok(snapshot)
    }

    /// Write the snapshot to a file, replacing its previous contents.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        debug!("Wrote {} entries to {}", self.codes.len(), path.display());
        Ok(())
    }

    pub fn into_catalog(self) -> Result<Catalog> {
        Catalog::from_entries(
            self.codes
                .into_iter()
                .map(|(sequence, description)| EmojiEntry::new(sequence, description)),
        )
    }
}

#[cfg(test)]
mod test {
    use jiff::Timestamp;

    use super::Snapshot;
    use crate::error::Unavailable;
    use crate::{Catalog, EmojiEntry, Error};

    fn catalog() -> Catalog {
        Catalog::from_entries([
            EmojiEntry::new("🔥", "fire"),
            EmojiEntry::new("🌋", "volcano"),
        ])
        .unwrap()
    }

    #[test]
    fn serialized_format() {
        let mut snapshot = Snapshot::new(catalog());
        snapshot.codes.remove("🌋");
        snapshot.timestamp = Timestamp::from_second(1_626_638_245).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"timestamp":1626638245,"codes":{"🔥":"fire"}}"#);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");

        let snapshot = Snapshot::new(catalog());
        snapshot.save(&path).unwrap();
        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded.timestamp.as_second(), snapshot.timestamp.as_second());
        assert_eq!(loaded.into_catalog().unwrap(), catalog());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Snapshot::load(&dir.path().join("missing.json"));
        assert!(matches!(
            result,
            Err(Error::DataUnavailable(Unavailable::Io(_)))
        ));
    }

    #[test]
    fn load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        std::fs::write(&path, r#"{"codes":{"🔥":"fire"}}"#).unwrap();
        let result = Snapshot::load(&path);
        assert!(matches!(
            result,
            Err(Error::DataUnavailable(Unavailable::MalformedSnapshot(_)))
        ));
    }

    #[test]
    fn from_emoji_test() {
        let before = Timestamp::now();
        let snapshot = Snapshot::from_emoji_test("1F525 ; fully-qualified # 🔥 E0.6 fire\n");
        assert!(snapshot.timestamp >= before);
        assert_eq!(snapshot.codes.get("🔥").map(|d| d.as_str()), Some("fire"));
    }

    #[test]
    fn into_catalog_rejects_empty_sequence() {
        let mut snapshot = Snapshot::new(catalog());
        snapshot.codes.insert(String::new(), "nothing".to_string());
        assert!(matches!(
            snapshot.into_catalog(),
            Err(Error::EmptySequence(_))
        ));
    }
}
