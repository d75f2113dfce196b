//! Progress notification port
//!
//! Defines the interface for reporting progress while answers are submitted.

use survey_domain::QuestionId;

/// Callback for progress updates during submission
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, etc.)
pub trait SubmitProgressNotifier: Send + Sync {
    /// Called once before the writes are issued
    fn on_submit_start(&self, total_writes: usize);

    /// Called as each write settles
    fn on_answer_saved(&self, question_id: &QuestionId, success: bool);

    /// Called after every write has settled
    fn on_submit_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmitProgressNotifier for NoProgress {
    fn on_submit_start(&self, _total_writes: usize) {}
    fn on_answer_saved(&self, _question_id: &QuestionId, _success: bool) {}
    fn on_submit_complete(&self, _success: bool) {}
}
