// Single source of truth for all default values.

// --- Graph ---
pub const DEFAULT_COLLABORATION_WEIGHT: f64 = 1.0;
pub const DEFAULT_ENDORSEMENT_WEIGHT: f64 = 1.0;
pub const DEFAULT_PROFILE_WEIGHT: f64 = 0.1;
pub const DEFAULT_OTHER_WEIGHT: f64 = 0.1;
pub const DEFAULT_MAX_WEIGHT_HINT: f64 = 1e6;

// --- Ranking ---
pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_TOLERANCE: f64 = 1e-8;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4_096;

// --- Sentiment ---
pub const DEFAULT_SENTIMENT_ENABLED: bool = true;
pub const DEFAULT_NEUTRAL_BAND: f64 = 0.05;
pub const DEFAULT_SENTIMENT_BATCH_SIZE: usize = 256;

// --- Scoring ---
pub const DEFAULT_BOOST_SCALE: f64 = 20.0;
pub const DEFAULT_BOOST_CAP: f64 = 15.0;
pub const DEFAULT_UNIFORM_MIDPOINT: f64 = 50.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
