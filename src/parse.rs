//! Parsing of the unicode.org [`emoji-test.txt`][0] format.
//!
//! Data lines look like this:
//!
//! ```text
//! 1F468 1F3FD 200D 2696 FE0F ; fully-qualified # 👨🏽‍⚖️ E4.0 man judge: medium skin tone
//! ```
//!
//! [0]: https://unicode.org/Public/emoji/16.0/emoji-test.txt

use std::fmt;

use log::warn;

use crate::EmojiEntry;

/// Reasons a single data line can't be turned into entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line has no `;` separating code points and status.
    MissingStatus,
    /// The line has no `#` introducing the comment.
    MissingComment,
    /// The comment has no description.
    MissingDescription,
    /// A code point is not valid hex or not a unicode scalar value.
    InvalidCodePoint(String),
    /// The code point field is empty.
    EmptySequence,
    /// A `START..END` range ends before it starts.
    InvertedRange,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStatus => write!(f, "missing ';'"),
            Self::MissingComment => write!(f, "missing '#'"),
            Self::MissingDescription => write!(f, "missing description"),
            Self::InvalidCodePoint(cp) => write!(f, "invalid code point {cp:?}"),
            Self::EmptySequence => write!(f, "empty code point field"),
            Self::InvertedRange => write!(f, "range ends before it starts"),
        }
    }
}

fn parse_code_point(hex: &str) -> Result<char, LineError> {
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| LineError::InvalidCodePoint(hex.to_string()))
}

/// Turn a whitespace-separated list of hex code points into the string they
/// spell out, e.g. `"1F525"` into `"🔥"`.
pub fn parse_sequence(hex: &str) -> Result<String, LineError> {
    let sequence = hex
        .split_whitespace()
        .map(parse_code_point)
        .collect::<Result<String, _>>()?;

    if sequence.is_empty() {
        return Err(LineError::EmptySequence);
    }
    Ok(sequence)
}

/// Expand an inclusive `START..END` hex range into one single-code-point
/// string per value.
///
/// Values that are not unicode scalar values (surrogates) are left out.
pub fn parse_range(range: &str) -> Result<Vec<String>, LineError> {
    let (start, end) = range.split_once("..").ok_or(LineError::EmptySequence)?;
    let start = start.trim();
    let end = end.trim();
    let parse = |hex: &str| {
        u32::from_str_radix(hex, 16).map_err(|_| LineError::InvalidCodePoint(hex.to_string()))
    };
    let (start, end) = (parse(start)?, parse(end)?);
    if end < start {
        return Err(LineError::InvertedRange);
    }

    Ok((start..=end)
        .filter_map(char::from_u32)
        .map(String::from)
        .collect())
}

/// Render a sequence as space-separated `U+XXXX` code points.
///
/// Many sequences contain invisible characters, so this is used whenever one
/// ends up in a log message.
pub fn escape(sequence: &str) -> String {
    sequence
        .chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a single line.
///
/// Returns `Ok(None)` for comments and blank lines.
pub fn parse_line(line: &str) -> Result<Option<Vec<EmojiEntry>>, LineError> {
    let line = line.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (codes, rest) = line.split_once(';').ok_or(LineError::MissingStatus)?;
    let (_, comment) = rest.split_once('#').ok_or(LineError::MissingComment)?;
    // The comment is " <emoji> <version> <description>", and the description
    // itself may contain spaces.
    let description = comment.splitn(4, ' ').last().unwrap_or_default().trim();
    if description.is_empty() {
        return Err(LineError::MissingDescription);
    }

    let codes = codes.trim();
    let sequences = if codes.contains("..") {
        parse_range(codes)?
    } else {
        vec![parse_sequence(codes)?]
    };

    let entries = sequences
        .into_iter()
        .map(|sequence| EmojiEntry::new(sequence, description.to_string()))
        .collect();
    Ok(Some(entries))
}

/// Parse a whole file, skipping and logging malformed lines.
pub fn parse_emoji_test(text: &str) -> Vec<EmojiEntry> {
    let mut entries = vec![];
    for (i, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(parsed)) => entries.extend(parsed),
            Ok(None) => {}
            Err(err) => warn!("Skipping line {}: {err}", i + 1),
        }
    }
    entries
}

#[cfg(test)]
mod test {
    use super::{escape, parse_emoji_test, parse_line, parse_range, parse_sequence, LineError};

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("1F525"), Ok("🔥".to_string()));
        assert_eq!(parse_sequence("0023 FE0F 20E3"), Ok("#\u{fe0f}\u{20e3}".to_string()));
        assert_eq!(
            parse_sequence("1F468 1F3FD 200D 2696 FE0F"),
            Ok("👨🏽\u{200d}⚖\u{fe0f}".to_string())
        );
        assert_eq!(parse_sequence("  1f525  "), Ok("🔥".to_string()));
        assert_eq!(parse_sequence(""), Err(LineError::EmptySequence));
        assert_eq!(
            parse_sequence("1F525 XYZ"),
            Err(LineError::InvalidCodePoint("XYZ".to_string()))
        );
        assert_eq!(
            parse_sequence("D800"),
            Err(LineError::InvalidCodePoint("D800".to_string()))
        );
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_range("1F31D..1F31E"),
            Ok(vec!["🌝".to_string(), "🌞".to_string()])
        );
        assert_eq!(parse_range("1F525..1F525"), Ok(vec!["🔥".to_string()]));
        assert_eq!(parse_range("1F31E..1F31D"), Err(LineError::InvertedRange));
    }

    #[test]
    fn test_parse_line_skips_comments() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# group: Smileys & Emotion"), Ok(None));
        assert_eq!(parse_line("#EOF"), Ok(None));
    }

    #[test]
    fn test_parse_line() {
        let entries = parse_line("1F525  ; fully-qualified  # 🔥 E0.6 fire")
            .unwrap()
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sequence(), "🔥");
        assert_eq!(entries[0].description(), "fire");

        let entries = parse_line(
            "1F468 1F3FD 200D 2696 FE0F ; fully-qualified # 👨🏽‍⚖️ E4.0 man judge: medium skin tone\r",
        )
        .unwrap()
        .unwrap();
        assert_eq!(entries[0].description(), "man judge: medium skin tone");

        // The sequence itself contains the comment marker
        let entries = parse_line("0023 FE0F 20E3 ; fully-qualified # #️⃣ E0.6 keycap: #")
            .unwrap()
            .unwrap();
        assert_eq!(entries[0].sequence(), "#\u{fe0f}\u{20e3}");
        assert_eq!(entries[0].description(), "keycap: #");
    }

    #[test]
    fn test_parse_line_range() {
        let entries = parse_line("1F31D..1F31E ; fully-qualified # 🌝 E1.0 sun faces")
            .unwrap()
            .unwrap();
        let sequences = entries.iter().map(|e| e.sequence()).collect::<Vec<_>>();
        assert_eq!(sequences, vec!["🌝", "🌞"]);
        assert!(entries.iter().all(|e| e.description() == "sun faces"));
    }

    #[test]
    fn test_parse_line_malformed() {
        assert_eq!(parse_line("1F525 fully-qualified"), Err(LineError::MissingStatus));
        assert_eq!(parse_line("1F525 ; fully-qualified"), Err(LineError::MissingComment));
        assert_eq!(
            parse_line("1F525 ; fully-qualified #"),
            Err(LineError::MissingDescription)
        );
        assert_eq!(
            parse_line(" ; fully-qualified # x E0.6 nothing"),
            Err(LineError::EmptySequence)
        );
    }

    #[test]
    fn test_parse_emoji_test_skips_malformed() {
        let text = "\
# group: Travel & Places
1F525 ; fully-qualified # 🔥 E0.6 fire
this line is broken
1F30B ; fully-qualified # 🌋 E0.6 volcano
";
        let entries = parse_emoji_test(text);
        let pairs = entries
            .iter()
            .map(|e| (e.sequence(), e.description()))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![("🔥", "fire"), ("🌋", "volcano")]);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("🔥"), "U+1F525");
        assert_eq!(escape("#\u{fe0f}\u{20e3}"), "U+0023 U+FE0F U+20E3");
        assert_eq!(escape(""), "");
    }
}
