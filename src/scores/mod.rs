//! Score persistence module.
//!
//! Every accepted submission becomes one row of an append-only CSV log.
//!
//! # Components
//!
//! - `score_record`: data structures for score submissions
//! - `score_log`: mutex-guarded append-only CSV writer

pub mod score_log;
pub mod score_record;

pub use score_log::{load_scores, LoadedScore, ScoreLog};
pub use score_record::{ScoreRecord, ScoreValue};
