//! Deterministic word-list classifier.
//!
//! Each known word carries a valence in `[-4, 4]`. Intensifiers scale the
//! next sentiment word, negators within three tokens flip and dampen it.
//! The summed valence is squashed into `[-1, 1]` with `s / sqrt(s² + α)`.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use trustnet_core::config::defaults::DEFAULT_NEUTRAL_BAND;
use trustnet_core::errors::TrustNetResult;
use trustnet_core::models::SentimentScore;
use trustnet_core::traits::ISentimentClassifier;

const NORMALIZATION_ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;
const NEGATION_WINDOW: usize = 3;
const INTENSIFIER_SCALAR: f64 = 1.5;

const POSITIVE: &[(&str, f64)] = &[
    ("amazing", 3.0),
    ("awesome", 3.0),
    ("brilliant", 3.0),
    ("excellent", 3.0),
    ("exceptional", 3.0),
    ("outstanding", 3.0),
    ("fantastic", 3.0),
    ("superb", 3.0),
    ("great", 2.5),
    ("love", 2.5),
    ("best", 2.5),
    ("trustworthy", 2.5),
    ("reliable", 2.0),
    ("helpful", 2.0),
    ("honest", 2.0),
    ("good", 1.9),
    ("skilled", 2.0),
    ("talented", 2.0),
    ("expert", 2.0),
    ("recommend", 2.0),
    ("recommended", 2.0),
    ("impressive", 2.5),
    ("professional", 1.5),
    ("solid", 1.5),
    ("responsive", 1.5),
    ("dedicated", 1.8),
    ("knowledgeable", 1.8),
    ("friendly", 1.8),
    ("thanks", 1.5),
    ("thank", 1.5),
    ("nice", 1.8),
    ("happy", 2.0),
    ("pleasure", 2.0),
    ("smooth", 1.2),
    ("fast", 1.0),
    ("clean", 1.0),
    ("legit", 1.8),
    ("valuable", 2.0),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("scam", -3.5),
    ("scammer", -3.5),
    ("fraud", -3.5),
    ("terrible", -3.0),
    ("awful", -3.0),
    ("horrible", -3.0),
    ("worst", -3.0),
    ("malicious", -3.0),
    ("dishonest", -2.8),
    ("untrustworthy", -2.8),
    ("bad", -2.5),
    ("poor", -2.0),
    ("unreliable", -2.2),
    ("rude", -2.0),
    ("lazy", -1.8),
    ("slow", -1.2),
    ("buggy", -1.8),
    ("broken", -1.8),
    ("disappointing", -2.2),
    ("disappointed", -2.2),
    ("avoid", -2.0),
    ("fake", -2.5),
    ("spam", -2.2),
    ("useless", -2.5),
    ("incompetent", -2.5),
    ("hate", -2.7),
    ("problem", -1.2),
    ("issues", -1.0),
    ("late", -1.0),
    ("sloppy", -1.8),
    ("rug", -3.0),
    ("rugged", -3.0),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "cannot", "without",
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "highly",
    "incredibly",
    "super",
    "truly",
    "so",
    "absolutely",
    "totally",
];

static SHARED: LazyLock<Arc<LexiconClassifier>> =
    LazyLock::new(|| Arc::new(LexiconClassifier::new()));

/// Word-list sentiment classifier. Immutable once built.
#[derive(Debug)]
pub struct LexiconClassifier {
    valences: HashMap<&'static str, f64>,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        let valences = POSITIVE.iter().chain(NEGATIVE).copied().collect();
        tracing::debug!(words = POSITIVE.len() + NEGATIVE.len(), "lexicon loaded");
        Self { valences }
    }

    /// The process-wide instance, built on first use.
    pub fn shared() -> Arc<LexiconClassifier> {
        Arc::clone(&SHARED)
    }

    /// Signed magnitude in `[-1, 1]`. Text without sentiment words scores 0.
    pub fn magnitude(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut total = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.valences.get(token.as_str()) else {
                continue;
            };
            let mut value = valence;
            if i > 0 && INTENSIFIERS.contains(&tokens[i - 1].as_str()) {
                value *= INTENSIFIER_SCALAR;
            }
            let window = &tokens[i.saturating_sub(NEGATION_WINDOW)..i];
            if window.iter().any(|t| is_negator(t)) {
                value *= NEGATION_SCALAR;
            }
            total += value;
        }
        if total == 0.0 {
            return 0.0;
        }
        (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ISentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> TrustNetResult<SentimentScore> {
        Ok(SentimentScore::from_magnitude(
            self.magnitude(text),
            DEFAULT_NEUTRAL_BAND,
        ))
    }

    fn name(&self) -> &str {
        "lexicon"
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}
