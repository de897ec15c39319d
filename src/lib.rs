//! Find, remove and describe emoji in text.
//!
//! Emoji are recognized using the [unicode.org emoji registry][0]. Sequences
//! made of multiple code points, like skin tone variants or zero width joiner
//! sequences, are always matched as a whole.
//!
//! ```
//! let demoji = demoji::Demoji::bundled()?;
//! assert_eq!(demoji.demojize("Hi 🌓!"), "Hi :first quarter moon:!");
//! assert_eq!(demoji.find_all("a🔥b🌋c🔥", false), vec!["🔥", "🌋", "🔥"]);
//! assert_eq!(demoji.remove("a🔥b🌋c🔥"), "abc");
//! # Ok::<(), demoji::Error>(())
//! ```
//!
//! [0]: https://unicode.org/Public/emoji/16.0/emoji-test.txt

mod config;
mod demoji;
mod emoji;
mod error;
mod lazy;
pub mod matcher;
pub mod parse;
mod snapshot;
mod source;

pub use crate::{
    config::*, demoji::*, emoji::*, error::*, lazy::*, matcher::Matcher, snapshot::*, source::*,
};
