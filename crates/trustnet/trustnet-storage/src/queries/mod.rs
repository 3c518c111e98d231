//! SQL for each table. Functions take a borrowed connection so they can run
//! inside a caller's transaction.

pub mod interaction_ops;
pub mod run_ops;
pub mod score_ops;
