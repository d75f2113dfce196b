//! Run Survey use case.
//!
//! [`SurveyController`] drives one survey session: it fetches the questions
//! once, feeds user gestures into the [`SessionState`] machine one at a time,
//! and on submit writes every collected answer back to the store.
//!
//! Submission fans out one write per answer and joins them. Any failure is
//! reported as a whole and leaves the session exactly as it was (confirmation
//! still open), so the user can retry. Writes that already landed are not
//! rolled back. On success the session is discarded and the questions are
//! fetched again.

use crate::ports::progress::SubmitProgressNotifier;
use crate::ports::question_store::{QuestionStore, StoreError};
use crate::ports::session_logger::{NoSessionLogger, SessionEvent, SessionLogger};
use std::sync::Arc;
use survey_domain::{
    AnswerValue, FlowEvent, FlowPhase, FlowRejection, QuestionId, SessionState,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// One write that failed during submission.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteFailure {
    pub question_id: QuestionId,
    pub error: StoreError,
}

/// Errors that can occur during submission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Answers can only be submitted from the confirmation panel")]
    NotConfirming,

    #[error("{} of {attempted} answer writes failed", .failures.len())]
    WriteFailed {
        attempted: usize,
        failures: Vec<WriteFailure>,
    },
}

/// Result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Number of answers written
    pub saved: usize,
    /// Number of questions in the fresh session
    pub reloaded: usize,
}

/// Flow controller for a single survey.
///
/// Holds `None` while loading; afterwards every gesture replaces the current
/// snapshot with the one produced by [`SessionState::apply`].
pub struct SurveyController {
    store: Arc<dyn QuestionStore>,
    session_logger: Arc<dyn SessionLogger>,
    state: Option<SessionState>,
}

impl SurveyController {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self {
            store,
            session_logger: Arc::new(NoSessionLogger),
            state: None,
        }
    }

    /// Create with a session logger.
    pub fn with_session_logger(mut self, logger: Arc<dyn SessionLogger>) -> Self {
        self.session_logger = logger;
        self
    }

    pub fn phase(&self) -> FlowPhase {
        self.state
            .as_ref()
            .map(SessionState::phase)
            .unwrap_or(FlowPhase::Loading)
    }

    /// Current snapshot, `None` while questions are loading.
    pub fn snapshot(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Fetch the questions and start a fresh session.
    ///
    /// On failure the session is started with no questions (nothing is
    /// rendered) and the error is returned for display. No retry.
    pub async fn load_questions(&mut self) -> Result<usize, StoreError> {
        self.state = None;

        match self.store.list_questions().await {
            Ok(questions) => {
                let count = questions.len();
                info!("Loaded {} questions", count);
                self.session_logger.log(SessionEvent::new(
                    "questions_loaded",
                    serde_json::json!({
                        "count": count,
                        "ids": questions.iter().map(|q| q.id.as_str()).collect::<Vec<_>>(),
                    }),
                ));
                self.state = Some(SessionState::new(questions));
                Ok(count)
            }
            Err(e) => {
                warn!("Could not load questions: {}", e);
                self.session_logger.log(SessionEvent::new(
                    "questions_load_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
                self.state = Some(SessionState::empty());
                Err(e)
            }
        }
    }

    /// Apply one gesture. A rejected gesture leaves the session unchanged.
    pub fn dispatch(&mut self, event: FlowEvent) -> Result<(), FlowRejection> {
        let Some(state) = self.state.as_ref() else {
            debug!("Ignoring {} while loading", event.name());
            return Err(FlowRejection::NoQuestions);
        };

        let name = event.name();
        let payload = match &event {
            FlowEvent::AnswerChanged { question_id, value } => serde_json::json!({
                "question_id": question_id.as_str(),
                "value": value,
            }),
            _ => serde_json::json!({ "from": state.position() }),
        };

        match state.apply(event) {
            Ok(next) => {
                debug!(
                    "{}: position {} -> {}, {} answers",
                    name,
                    state.position(),
                    next.position(),
                    next.answers().len()
                );
                let event_type = match name {
                    "answer_changed" => "answer_recorded",
                    "open_confirmation" => "confirmation_opened",
                    "close_confirmation" => "confirmation_closed",
                    _ => "navigated",
                };
                let mut payload = payload;
                if let Some(map) = payload.as_object_mut() {
                    map.insert("action".to_string(), name.into());
                    map.insert("position".to_string(), next.position().into());
                }
                self.session_logger.log(SessionEvent::new(event_type, payload));
                self.state = Some(next);
                Ok(())
            }
            Err(rejection) => {
                debug!("Rejected {}: {}", name, rejection);
                Err(rejection)
            }
        }
    }

    /// Overwrite the answer for `question_id`.
    pub fn record_answer(
        &mut self,
        question_id: QuestionId,
        value: AnswerValue,
    ) -> Result<(), FlowRejection> {
        self.dispatch(FlowEvent::AnswerChanged { question_id, value })
    }

    /// "Continue": move to the next question if the current one is answered.
    pub fn advance(&mut self) -> Result<(), FlowRejection> {
        self.dispatch(FlowEvent::Advance)
    }

    /// "Back": move to the previous question. The answers for the question
    /// left and the question returned to are both cleared.
    pub fn retreat(&mut self) -> Result<(), FlowRejection> {
        self.dispatch(FlowEvent::Retreat)
    }

    pub fn open_confirmation(&mut self) -> Result<(), FlowRejection> {
        self.dispatch(FlowEvent::OpenConfirmation)
    }

    pub fn close_confirmation(&mut self) -> Result<(), FlowRejection> {
        self.dispatch(FlowEvent::CloseConfirmation)
    }

    pub fn is_current_answer_complete(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(SessionState::is_current_answer_complete)
    }

    /// Write every answer to the store, concurrently, and wait for all.
    pub async fn submit(
        &mut self,
        progress: &dyn SubmitProgressNotifier,
    ) -> Result<SubmitOutcome, SubmitError> {
        let answers: Vec<(QuestionId, AnswerValue)> = match self.state.as_ref() {
            Some(state) if state.is_confirming() => state
                .answers()
                .iter()
                .map(|(id, value)| (id.clone(), value.clone()))
                .collect(),
            _ => return Err(SubmitError::NotConfirming),
        };

        let attempted = answers.len();
        info!("Submitting {} answers", attempted);
        progress.on_submit_start(attempted);

        let store = &self.store;
        let writes = answers.iter().map(|(id, value)| async move {
            let result = store.save_answer(id, value).await;
            progress.on_answer_saved(id, result.is_ok());
            (id, result)
        });
        let results = futures::future::join_all(writes).await;

        let failures: Vec<WriteFailure> = results
            .into_iter()
            .filter_map(|(id, result)| {
                result.err().map(|error| WriteFailure {
                    question_id: id.clone(),
                    error,
                })
            })
            .collect();

        if !failures.is_empty() {
            for failure in &failures {
                error!(
                    "Error submitting answer for {}: {}",
                    failure.question_id, failure.error
                );
            }
            self.session_logger.log(SessionEvent::new(
                "submit_failed",
                serde_json::json!({
                    "attempted": attempted,
                    "failed": failures
                        .iter()
                        .map(|f| serde_json::json!({
                            "question_id": f.question_id.as_str(),
                            "error": f.error.to_string(),
                        }))
                        .collect::<Vec<_>>(),
                }),
            ));
            progress.on_submit_complete(false);
            return Err(SubmitError::WriteFailed {
                attempted,
                failures,
            });
        }

        progress.on_submit_complete(true);
        self.session_logger.log(SessionEvent::new(
            "submit_succeeded",
            serde_json::json!({ "saved": attempted }),
        ));
        info!("Submitted {} answers, starting a fresh session", attempted);

        // Fetch failures are already logged and leave an empty session.
        let reloaded = self.load_questions().await.unwrap_or(0);

        Ok(SubmitOutcome {
            saved: attempted,
            reloaded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use std::collections::{HashSet, VecDeque};
    use std::sync::Mutex;
    use survey_domain::{AnswerFormat, Question};

    // ==================== Test Mocks ====================

    struct MockStore {
        lists: Mutex<VecDeque<Result<Vec<Question>, StoreError>>>,
        failing_ids: HashSet<QuestionId>,
        saved: Mutex<Vec<(QuestionId, AnswerValue)>>,
        list_calls: Mutex<usize>,
    }

    impl MockStore {
        fn new(lists: Vec<Result<Vec<Question>, StoreError>>) -> Self {
            Self {
                lists: Mutex::new(VecDeque::from(lists)),
                failing_ids: HashSet::new(),
                saved: Mutex::new(Vec::new()),
                list_calls: Mutex::new(0),
            }
        }

        fn failing_on(mut self, id: &str) -> Self {
            self.failing_ids.insert(QuestionId::new(id));
            self
        }

        fn saved(&self) -> Vec<(QuestionId, AnswerValue)> {
            let mut saved = self.saved.lock().unwrap().clone();
            saved.sort_by(|a, b| a.0.cmp(&b.0));
            saved
        }

        fn list_calls(&self) -> usize {
            *self.list_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl QuestionStore for MockStore {
        async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
            *self.list_calls.lock().unwrap() += 1;
            self.lists
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(StoreError::Fetch("no more lists".to_string())))
        }

        async fn save_answer(
            &self,
            id: &QuestionId,
            value: &AnswerValue,
        ) -> Result<(), StoreError> {
            if self.failing_ids.contains(id) {
                return Err(StoreError::Write {
                    id: id.clone(),
                    reason: "rejected".to_string(),
                });
            }
            self.saved.lock().unwrap().push((id.clone(), value.clone()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        started: Mutex<Option<usize>>,
        saved: Mutex<Vec<(String, bool)>>,
        completed: Mutex<Option<bool>>,
    }

    impl SubmitProgressNotifier for RecordingProgress {
        fn on_submit_start(&self, total_writes: usize) {
            *self.started.lock().unwrap() = Some(total_writes);
        }

        fn on_answer_saved(&self, question_id: &QuestionId, success: bool) {
            self.saved
                .lock()
                .unwrap()
                .push((question_id.to_string(), success));
        }

        fn on_submit_complete(&self, success: bool) {
            *self.completed.lock().unwrap() = Some(success);
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl SessionLogger for RecordingLogger {
        fn log(&self, event: SessionEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::new("1", "Your name", AnswerFormat::Text),
            Question::new("2", "Movies per month", AnswerFormat::Number),
        ]
    }

    /// Controller loaded with two questions, answered `{"1": "hello", "2": 5}`,
    /// with the confirmation panel open.
    async fn confirming(store: Arc<MockStore>) -> SurveyController {
        let mut controller = SurveyController::new(store);
        controller.load_questions().await.unwrap();
        controller
            .record_answer(QuestionId::new("1"), AnswerValue::text("hello"))
            .unwrap();
        controller.advance().unwrap();
        controller
            .record_answer(QuestionId::new("2"), AnswerValue::Number(5.0))
            .unwrap();
        controller.open_confirmation().unwrap();
        controller
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_starts_loading() {
        let store = Arc::new(MockStore::new(vec![Ok(questions())]));
        let mut controller = SurveyController::new(store);
        assert_eq!(controller.phase(), FlowPhase::Loading);
        assert!(controller.snapshot().is_none());
        assert_eq!(controller.advance(), Err(FlowRejection::NoQuestions));

        assert_eq!(controller.load_questions().await.unwrap(), 2);
        assert_eq!(controller.phase(), FlowPhase::Active);
        assert_eq!(controller.snapshot().unwrap().position(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_renders_nothing() {
        let store = Arc::new(MockStore::new(vec![Err(StoreError::Fetch(
            "unauthenticated".to_string(),
        ))]));
        let mut controller = SurveyController::new(store);

        assert!(controller.load_questions().await.is_err());
        let snapshot = controller.snapshot().unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.current_question().is_none());
        assert_eq!(controller.retreat(), Err(FlowRejection::NoQuestions));
    }

    #[tokio::test]
    async fn test_advance_and_retreat() {
        let store = Arc::new(MockStore::new(vec![Ok(questions())]));
        let mut controller = SurveyController::new(store);
        controller.load_questions().await.unwrap();

        assert_eq!(controller.advance(), Err(FlowRejection::AnswerIncomplete));
        controller
            .record_answer(QuestionId::new("1"), AnswerValue::text("hello"))
            .unwrap();
        assert!(controller.is_current_answer_complete());
        controller.advance().unwrap();
        assert_eq!(controller.snapshot().unwrap().position(), 1);

        controller
            .record_answer(QuestionId::new("2"), AnswerValue::Number(3.0))
            .unwrap();
        controller.retreat().unwrap();
        let snapshot = controller.snapshot().unwrap();
        assert_eq!(snapshot.position(), 0);
        assert!(snapshot.answers().is_empty());
        assert!(!controller.is_current_answer_complete());
        assert_eq!(controller.advance(), Err(FlowRejection::AnswerIncomplete));
    }

    #[tokio::test]
    async fn test_submit_requires_confirmation() {
        let store = Arc::new(MockStore::new(vec![Ok(questions())]));
        let mut controller = SurveyController::new(store.clone());
        controller.load_questions().await.unwrap();

        let result = controller.submit(&NoProgress).await;
        assert_eq!(result, Err(SubmitError::NotConfirming));
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn test_submit_success_writes_all_and_resets() {
        let store = Arc::new(MockStore::new(vec![Ok(questions()), Ok(questions())]));
        let mut controller = confirming(store.clone()).await;
        let progress = RecordingProgress::default();

        let outcome = controller.submit(&progress).await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome {
                saved: 2,
                reloaded: 2
            }
        );

        assert_eq!(
            store.saved(),
            vec![
                (QuestionId::new("1"), AnswerValue::text("hello")),
                (QuestionId::new("2"), AnswerValue::Number(5.0)),
            ]
        );
        assert_eq!(store.list_calls(), 2);

        let snapshot = controller.snapshot().unwrap();
        assert_eq!(snapshot.position(), 0);
        assert!(snapshot.answers().is_empty());
        assert!(!snapshot.is_confirming());

        assert_eq!(*progress.started.lock().unwrap(), Some(2));
        assert_eq!(progress.saved.lock().unwrap().len(), 2);
        assert_eq!(*progress.completed.lock().unwrap(), Some(true));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_session() {
        let store = Arc::new(MockStore::new(vec![Ok(questions())]).failing_on("2"));
        let mut controller = confirming(store.clone()).await;
        let before = controller.snapshot().unwrap().clone();

        let err = controller.submit(&NoProgress).await.unwrap_err();
        match err {
            SubmitError::WriteFailed {
                attempted,
                failures,
            } => {
                assert_eq!(attempted, 2);
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].question_id, QuestionId::new("2"));
            }
            other => panic!("Expected WriteFailed, got {:?}", other),
        }

        assert_eq!(controller.snapshot().unwrap(), &before);
        assert_eq!(controller.phase(), FlowPhase::Confirming);
        // The write that landed is not rolled back, and no refetch happened.
        assert_eq!(store.saved().len(), 1);
        assert_eq!(store.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_retry_after_failure() {
        let store = Arc::new(MockStore::new(vec![Ok(questions())]).failing_on("2"));
        let mut controller = confirming(store).await;
        assert!(controller.submit(&NoProgress).await.is_err());
        // Second attempt fails the same way and still keeps the answers.
        assert!(controller.submit(&NoProgress).await.is_err());
        assert_eq!(controller.snapshot().unwrap().answers().len(), 2);
    }

    #[tokio::test]
    async fn test_reload_failure_after_submit_leaves_empty_session() {
        let store = Arc::new(MockStore::new(vec![Ok(questions())]));
        let mut controller = confirming(store).await;

        let outcome = controller.submit(&NoProgress).await.unwrap();
        assert_eq!(outcome.saved, 2);
        assert_eq!(outcome.reloaded, 0);
        assert!(controller.snapshot().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_session_events_logged() {
        let store = Arc::new(MockStore::new(vec![Ok(questions()), Ok(questions())]));
        let logger = Arc::new(RecordingLogger::default());
        let mut controller = SurveyController::new(store).with_session_logger(logger.clone());
        controller.load_questions().await.unwrap();
        controller
            .record_answer(QuestionId::new("1"), AnswerValue::text("a"))
            .unwrap();
        controller.advance().unwrap();
        // Rejected gestures are not logged.
        let _ = controller.open_confirmation();
        controller
            .record_answer(QuestionId::new("2"), AnswerValue::Number(1.0))
            .unwrap();
        controller.open_confirmation().unwrap();
        controller.close_confirmation().unwrap();
        controller.open_confirmation().unwrap();
        controller.submit(&NoProgress).await.unwrap();

        assert_eq!(
            *logger.events.lock().unwrap(),
            vec![
                "questions_loaded",
                "answer_recorded",
                "navigated",
                "answer_recorded",
                "confirmation_opened",
                "confirmation_closed",
                "confirmation_opened",
                "submit_succeeded",
                "questions_loaded",
            ]
        );
    }
}
