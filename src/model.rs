// Core structs: TimeSample, CodeSample, TrigramPair, Interpretation
use serde::Serialize;
use thiserror::Error;

/// Snapshot of a clock reading in fixed UTC+8, taken once per derivation pass.
/// Hour is already normalized so that midnight counts as 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl TimeSample {
    /// Sum of year, month and day as used by time-mode casting.
    pub fn date_sum(&self) -> i64 {
        self.year as i64 + self.month as i64 + self.day as i64
    }
}

/// A validated stock code: all decimal digits, left-padded to at least 6.
/// Codes longer than 6 digits are kept as-is; the head/tail split then takes
/// the first and last three digits of the full string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    digits: String,
}

impl CodeSample {
    pub fn parse(raw: &str) -> Result<Self, CastError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(CastError::InvalidCode(raw.to_string()));
        }
        let digits = if trimmed.len() < 6 {
            format!("{:0>6}", trimmed)
        } else {
            trimmed.to_string()
        };
        Ok(Self { digits })
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Digit sum of the leading triplet.
    pub fn head_sum(&self) -> u32 {
        self.digits[..3].chars().filter_map(|c| c.to_digit(10)).sum()
    }

    /// Digit sum of the trailing triplet.
    pub fn tail_sum(&self) -> u32 {
        let tail_start = self.digits.len() - 3;
        self.digits[tail_start..].chars().filter_map(|c| c.to_digit(10)).sum()
    }
}

/// Hexagram coordinates: both trigram numbers always land in [1,8] via the
/// 0→8 wraparound, the change line in [1,6] via 0→6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrigramPair {
    pub upper: u8,
    pub lower: u8,
    pub change_line: Option<u8>,
}

/// Classical five elements, resolved from a trigram number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

/// Closed sentiment tag. Display colors are the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

/// Full classification result for one hexagram. Determined entirely by the
/// element pair of (upper, lower); identical inputs yield identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub label: String,
    pub sentiment: Sentiment,
    pub commentary: String,
    pub advice: String,
    pub score: i32,
}

/// Composite comparison of two independently classified readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelativeStrength {
    Leading,
    Lagging,
    Synchronized,
}

#[derive(Debug, Error)]
pub enum CastError {
    #[error("invalid code format: {0:?} is not a sequence of decimal digits")]
    InvalidCode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
