use chrono::Utc;
use trustnet_core::models::{DegradationEvent, GraphStats, RunReport};
use trustnet_observability::{DegradationTracker, RecoveryStatus, RunMetrics};

fn event(component: &str, affected: usize) -> DegradationEvent {
    DegradationEvent {
        component: component.to_string(),
        failure: "classifier unavailable".to_string(),
        fallback_used: "neutral".to_string(),
        affected,
        timestamp: Utc::now(),
    }
}

fn report(run_id: &str, degradations: Vec<DegradationEvent>) -> RunReport {
    RunReport {
        run_id: run_id.to_string(),
        snapshot_digest: String::new(),
        started_at: Utc::now(),
        duration_ms: 0,
        input_count: 0,
        accepted_count: 0,
        rejected: Vec::new(),
        graph: GraphStats::default(),
        iterations: 0,
        converged: true,
        residual: 0.0,
        degradations,
    }
}

#[test]
fn clean_run_recovers_degraded_component() {
    let mut tracker = DegradationTracker::new();
    tracker.observe(&report("run-1", vec![event("sentiment", 3)]));
    assert!(tracker.is_degraded("sentiment"));
    assert_eq!(tracker.active_degradations().len(), 1);

    tracker.observe(&report("run-2", Vec::new()));
    assert!(!tracker.is_degraded("sentiment"));
    let entry = tracker.entries().next().unwrap();
    assert_eq!(entry.run_id, "run-1");
    assert_eq!(entry.recovery_status, RecoveryStatus::Recovered);
    assert!(entry.recovered_at.is_some());
}

#[test]
fn repeated_degradation_stays_active() {
    let mut tracker = DegradationTracker::new();
    tracker.observe(&report("run-1", vec![event("sentiment", 1)]));
    tracker.observe(&report("run-2", vec![event("sentiment", 2)]));
    assert_eq!(tracker.len(), 2);
    assert_eq!(tracker.active_degradations().len(), 2);
    assert!(!tracker.is_degraded("ranking"));
}

#[test]
fn history_is_bounded_and_drops_recovered_first() {
    let mut tracker = DegradationTracker::with_capacity(3);
    tracker.observe(&report("run-0", vec![event("ranking", 1)]));
    tracker.observe(&report("run-1", vec![event("sentiment", 1)]));
    tracker.observe(&report("run-2", vec![event("sentiment", 1)]));
    // run-0's ranking entry was recovered by run-1, so it is evicted first
    tracker.observe(&report("run-3", vec![event("sentiment", 1)]));
    let runs: Vec<&str> = tracker.entries().map(|t| t.run_id.as_str()).collect();
    assert_eq!(runs, vec!["run-1", "run-2", "run-3"]);

    for i in 4..50 {
        tracker.observe(&report(&format!("run-{i}"), vec![event("sentiment", 1)]));
    }
    assert_eq!(tracker.len(), tracker.capacity());
    let runs: Vec<&str> = tracker.entries().map(|t| t.run_id.as_str()).collect();
    assert_eq!(runs, vec!["run-47", "run-48", "run-49"]);
}

#[test]
fn zero_capacity_still_keeps_latest() {
    let mut tracker = DegradationTracker::with_capacity(0);
    tracker.observe(&report("run-1", vec![event("sentiment", 1)]));
    tracker.observe(&report("run-2", vec![event("sentiment", 1)]));
    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.entries().next().unwrap().run_id, "run-2");
}

#[test]
fn run_metrics_records_phases_in_order() {
    let mut metrics = RunMetrics::start();
    metrics.enter("validation");
    metrics.enter("sentiment");
    metrics.enter("ranking");
    let phases: Vec<String> = metrics.finish().iter().map(|p| p.phase.clone()).collect();
    assert_eq!(phases, vec!["validation", "sentiment", "ranking"]);
    // finishing twice does not duplicate the last phase
    assert_eq!(metrics.finish().len(), 3);
}
