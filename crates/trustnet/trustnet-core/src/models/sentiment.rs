use std::fmt;

use serde::{Deserialize, Serialize};

/// Polarity label of a piece of endorsement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Label for a signed magnitude, treating `[-band, band]` as neutral.
    pub fn from_magnitude(magnitude: f64, neutral_band: f64) -> Self {
        if magnitude > neutral_band {
            Self::Positive
        } else if magnitude < -neutral_band {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier output: a label plus a signed magnitude in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: SentimentLabel,
    pub magnitude: f64,
}

impl SentimentScore {
    /// The score used for empty text and for every degraded record.
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            magnitude: 0.0,
        }
    }

    /// Score from a magnitude, clamped into `[-1, 1]` and labelled by `neutral_band`.
    pub fn from_magnitude(magnitude: f64, neutral_band: f64) -> Self {
        let magnitude = if magnitude.is_nan() {
            0.0
        } else {
            magnitude.clamp(-1.0, 1.0)
        };
        Self {
            label: SentimentLabel::from_magnitude(magnitude, neutral_band),
            magnitude,
        }
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}
