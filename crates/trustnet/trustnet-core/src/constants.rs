/// TrustNet version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of every published score.
pub const MIN_SCORE: f64 = 0.0;

/// Upper bound of every published score.
pub const MAX_SCORE: f64 = 100.0;

/// Tolerance used when asserting that rank mass sums to one.
pub const RANK_MASS_TOLERANCE: f64 = 1e-6;

/// Component names used in degradation events and log fields.
pub const COMPONENT_SENTIMENT: &str = "sentiment";
pub const COMPONENT_RANKING: &str = "ranking";

/// Fallback recorded when the sentiment classifier cannot be used.
pub const FALLBACK_NEUTRAL: &str = "neutral";
