use serde::{Deserialize, Serialize};

use super::defaults;

/// Hybrid score configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points of boost per unit of mean endorsement magnitude.
    pub boost_scale: f64,
    /// Absolute bound on the sentiment boost.
    pub boost_cap: f64,
    /// Score given to every node when all ranks are identical.
    pub uniform_midpoint: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            boost_scale: defaults::DEFAULT_BOOST_SCALE,
            boost_cap: defaults::DEFAULT_BOOST_CAP,
            uniform_midpoint: defaults::DEFAULT_UNIFORM_MIDPOINT,
        }
    }
}
