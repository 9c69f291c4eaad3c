use std::collections::BTreeMap;

use crate::image_pipeline::common::error::{ConversionError, Result};

const FRAME_COUNT_KEY: &str = "number of frames";

/// Parsed `.inf` sidecar: one `key = value` pair per line.
#[derive(Debug, Clone, Default)]
pub struct SidecarInfo {
    entries: BTreeMap<String, String>,
}

impl SidecarInfo {
    /// Parses sidecar text. Every non-empty line must contain exactly one
    /// `=` separator; keys and values are trimmed.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if line.matches('=').count() != 1 {
                return Err(ConversionError::SidecarParseError(line.to_string()));
            }
            // Exactly one '=', so split_once cannot fail here
            let (key, value) = line.split_once('=').unwrap();
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The declared frame count of the paired raw stack.
    pub fn frame_count(&self) -> Result<usize> {
        let value = self
            .get(FRAME_COUNT_KEY)
            .ok_or(ConversionError::MissingKeyError(FRAME_COUNT_KEY))?;
        value
            .parse()
            .map_err(|_| ConversionError::InvalidValueError {
                key: FRAME_COUNT_KEY,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_lines() {
        let info = SidecarInfo::parse(
            "number of frames = 40\nframe size = 2048 x 2048\n\nexposure time = 0.01\n",
        )
        .unwrap();

        assert_eq!(info.get("number of frames"), Some("40"));
        assert_eq!(info.get("frame size"), Some("2048 x 2048"));
        assert_eq!(info.get("exposure time"), Some("0.01"));
        assert_eq!(info.get("missing"), None);
    }

    #[test]
    fn round_trips_trimmed_key_and_value() {
        let info = SidecarInfo::parse("  camera id =  back left  ").unwrap();
        assert_eq!(info.get("camera id"), Some("back left"));
    }

    #[test]
    fn rejects_line_without_separator() {
        let result = SidecarInfo::parse("number of frames = 40\nno separator here\n");
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::SidecarParseError(line) if line == "no separator here"
        ));
    }

    #[test]
    fn rejects_line_with_two_separators() {
        let result = SidecarInfo::parse("a = b = c\n");
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::SidecarParseError(_)
        ));
    }

    #[test]
    fn frame_count_parses_integer() {
        let info = SidecarInfo::parse("number of frames = 3").unwrap();
        assert_eq!(info.frame_count().unwrap(), 3);
    }

    #[test]
    fn frame_count_missing_key() {
        let info = SidecarInfo::parse("frame rate = 100").unwrap();
        assert!(matches!(
            info.frame_count().unwrap_err(),
            ConversionError::MissingKeyError("number of frames")
        ));
    }

    #[test]
    fn frame_count_rejects_non_numeric() {
        let info = SidecarInfo::parse("number of frames = forty").unwrap();
        assert!(matches!(
            info.frame_count().unwrap_err(),
            ConversionError::InvalidValueError { key: "number of frames", value } if value == "forty"
        ));
    }
}
