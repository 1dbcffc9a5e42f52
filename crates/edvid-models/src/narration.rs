//! Narration script models.
//!
//! A narration script is an ordered list of (timestamp, dialogue) pairs
//! produced by the vision model. Order is playback order; timestamps are
//! seconds into the source video and are not required to be strictly
//! increasing.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One scripted line of narration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationLine {
    /// Target start time in seconds of source-video time.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub timestamp: f64,
    /// Spoken text. May be empty; empty lines are skipped during synthesis.
    #[serde(default)]
    pub dialogue: String,
}

impl NarrationLine {
    pub fn new(timestamp: f64, dialogue: impl Into<String>) -> Self {
        Self {
            timestamp,
            dialogue: dialogue.into(),
        }
    }
}

/// A full narration script as returned by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrationScript {
    /// Lines in playback order.
    pub narration: Vec<NarrationLine>,
}

impl NarrationScript {
    /// Number of lines with non-empty dialogue after trimming.
    pub fn spoken_line_count(&self) -> usize {
        self.narration
            .iter()
            .filter(|l| !l.dialogue.trim().is_empty())
            .count()
    }
}

/// Accept timestamps as JSON numbers or numeric strings.
///
/// Models occasionally emit `"timestamp": "12.5"`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid timestamp: {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let json = r#"{"narration": [
            {"timestamp": 0, "dialogue": "Hello"},
            {"timestamp": 10.5, "dialogue": "World"}
        ]}"#;
        let script: NarrationScript = serde_json::from_str(json).unwrap();
        assert_eq!(script.narration.len(), 2);
        assert_eq!(script.narration[0].dialogue, "Hello");
        assert!((script.narration[1].timestamp - 10.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_string_timestamp() {
        let json = r#"{"timestamp": "3.25", "dialogue": "hi"}"#;
        let line: NarrationLine = serde_json::from_str(json).unwrap();
        assert!((line.timestamp - 3.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_fields_default() {
        let line: NarrationLine = serde_json::from_str("{}").unwrap();
        assert_eq!(line.timestamp, 0.0);
        assert!(line.dialogue.is_empty());
    }

    #[test]
    fn test_spoken_line_count_skips_blank() {
        let script = NarrationScript {
            narration: vec![
                NarrationLine::new(0.0, "Hello"),
                NarrationLine::new(5.0, "   "),
                NarrationLine::new(10.0, ""),
            ],
        };
        assert_eq!(script.spoken_line_count(), 1);
    }
}
