pub mod defaults;
mod graph_config;
mod observability_config;
mod ranking_config;
mod scoring_config;
mod sentiment_config;

pub use graph_config::GraphConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
pub use scoring_config::ScoringConfig;
pub use sentiment_config::SentimentConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TrustNetError, TrustNetResult};
use crate::interaction::InteractionKind;

/// Top-level configuration for a scoring run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustNetConfig {
    pub graph: GraphConfig,
    pub ranking: RankingConfig,
    pub sentiment: SentimentConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl TrustNetConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> TrustNetResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| TrustNetError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> TrustNetResult<()> {
        let ranking = &self.ranking;
        if !(ranking.damping > 0.0 && ranking.damping < 1.0) {
            return Err(config_error(format!(
                "ranking.damping must be in (0, 1), got {}",
                ranking.damping
            )));
        }
        if !(ranking.tolerance.is_finite() && ranking.tolerance > 0.0) {
            return Err(config_error(format!(
                "ranking.tolerance must be positive, got {}",
                ranking.tolerance
            )));
        }
        if ranking.max_iterations == 0 {
            return Err(config_error("ranking.max_iterations must be at least 1"));
        }

        let max_hint = self.graph.max_weight_hint;
        if !(max_hint.is_finite() && max_hint > 0.0) {
            return Err(config_error(format!(
                "graph.max_weight_hint must be positive, got {max_hint}"
            )));
        }
        for kind in InteractionKind::ALL {
            let weight = self.graph.base_weight(kind);
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(config_error(format!(
                    "graph.{kind}_weight must be a non-negative number, got {weight}"
                )));
            }
            if weight > max_hint {
                return Err(config_error(format!(
                    "graph.{kind}_weight must not exceed graph.max_weight_hint ({max_hint}), got {weight}"
                )));
            }
        }

        let sentiment = &self.sentiment;
        if !(0.0..1.0).contains(&sentiment.neutral_band) {
            return Err(config_error(format!(
                "sentiment.neutral_band must be in [0, 1), got {}",
                sentiment.neutral_band
            )));
        }
        if sentiment.batch_size == 0 {
            return Err(config_error("sentiment.batch_size must be at least 1"));
        }

        let scoring = &self.scoring;
        if !(scoring.boost_scale.is_finite() && scoring.boost_scale >= 0.0) {
            return Err(config_error(format!(
                "scoring.boost_scale must be non-negative, got {}",
                scoring.boost_scale
            )));
        }
        if !(scoring.boost_cap.is_finite() && scoring.boost_cap >= 0.0) {
            return Err(config_error(format!(
                "scoring.boost_cap must be non-negative, got {}",
                scoring.boost_cap
            )));
        }
        if !(0.0..=100.0).contains(&scoring.uniform_midpoint) {
            return Err(config_error(format!(
                "scoring.uniform_midpoint must be in [0, 100], got {}",
                scoring.uniform_midpoint
            )));
        }
        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> TrustNetError {
    TrustNetError::ConfigError(message.into())
}
