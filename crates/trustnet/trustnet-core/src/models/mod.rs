mod degradation_event;
mod graph_stats;
mod run_report;
mod score_record;
mod score_view;
mod sentiment;

pub use degradation_event::DegradationEvent;
pub use graph_stats::GraphStats;
pub use run_report::RunReport;
pub use score_record::ScoreRecord;
pub use score_view::{EndorsementQuality, NetworkAnalysis, ScoreBreakdown, ScoreView};
pub use sentiment::{SentimentLabel, SentimentScore};
