//! Pipeline components: context, walk, per-file task, fan-out, result collection.

pub mod collector;
pub mod context;
pub mod error_handler;
pub mod fan_out;
pub mod orchestrator;
pub mod report;
pub mod task;
pub mod walk;

pub use collector::ResultCollector;
pub use context::PipelineContext;
pub use error_handler::check_for_skipped_paths;
pub use fan_out::execute;
pub use orchestrator::{run, run_pipeline};
pub use report::{Reporter, report_result, write_result};
pub use task::run_task;
pub use walk::{WalkOutcome, check_root, match_files, run_walk_loop, to_outcome_walkdir};
