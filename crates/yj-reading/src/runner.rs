//! Drives a session from question to completed reading.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::entropy::{RandomSource, fetch_exact};
use crate::error::{ReadingError, ReadingResult};
use crate::generator::TextGenerator;
use crate::interpretation::Interpreter;
use crate::persistence::{ReadingStore, SavedReading, StoreError, UserId, require_user};
use crate::session::{ReadingSession, SessionStep};

/// Result of persisting a completed reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    /// The reading's id; the session id when the save was not durable.
    pub id: Uuid,
    /// Whether the store accepted the reading.
    pub durable: bool,
}

/// Runs sessions against a random source, an interpreter and an optional store.
pub struct ReadingRunner<R, G> {
    source: R,
    interpreter: Interpreter<G>,
    store: Option<Arc<dyn ReadingStore>>,
}

impl<R: RandomSource, G: TextGenerator> ReadingRunner<R, G> {
    /// Create a runner without a store.
    pub fn new(source: R, interpreter: Interpreter<G>) -> Self {
        Self {
            source,
            interpreter,
            store: None,
        }
    }

    /// Persist completed readings to `store`.
    pub fn with_store(mut self, store: Arc<dyn ReadingStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// The random source.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Advance `session` until it is complete.
    ///
    /// The session must have a question. Entropy for all outstanding lines
    /// is fetched in one request; if that fails the session moves to
    /// `Error` and [`ReadingError::RandomSourceFailure`] is returned. The
    /// interpretation step cannot fail. If the session's token is cancelled
    /// first, [`ReadingError::Cancelled`] is returned and the session is left
    /// where it stopped.
    pub async fn run(&self, session: &mut ReadingSession) -> ReadingResult<()> {
        let cancel = session.cancel_token();

        if session.step() == SessionStep::Loading {
            let needed = session.entropy_needed();
            debug!(session = %session.id(), needed, source = self.source.name(), "fetching entropy");
            let values = if needed == 0 {
                Vec::new()
            } else {
                let fetched = tokio::select! {
                    biased;
                    () = cancel.cancelled() => return Err(ReadingError::Cancelled),
                    fetched = fetch_exact(&self.source, needed) => fetched,
                };
                match fetched {
                    Ok(values) => values,
                    Err(err) => {
                        warn!(session = %session.id(), error = %err, "random source failed");
                        session.fail(err.clone())?;
                        return Err(ReadingError::RandomSourceFailure(err));
                    }
                }
            };
            session.provide_entropy(values)?;
        }

        if session.step() == SessionStep::Casting {
            session.cast_remaining()?;
            debug!(
                session = %session.id(),
                primary = session.primary().map(|p| p.hexagram.number),
                relating = session.relating().map(|r| r.hexagram.number),
                "lines cast"
            );
        }

        if session.step() == SessionStep::Interpretation {
            let ctx = session.interpretation_context()?;
            let result = self.interpreter.interpret(&ctx, &cancel).await;
            if cancel.is_cancelled() {
                debug!(session = %session.id(), "session torn down during interpretation");
                return Err(ReadingError::Cancelled);
            }
            info!(
                session = %session.id(),
                hexagram = ctx.primary.hexagram.number,
                source = %result.source,
                "reading complete"
            );
            session.complete(result)?;
        }

        match session.step() {
            SessionStep::Complete => Ok(()),
            from => Err(ReadingError::InvalidTransition { from, action: "run" }),
        }
    }

    /// Save a completed reading for `user`.
    ///
    /// Missing authentication is returned to the caller. Any other store
    /// failure is logged and the reading keeps the session id, reported as
    /// not durable.
    pub async fn persist(
        &self,
        session: &ReadingSession,
        user: Option<&UserId>,
    ) -> ReadingResult<SaveOutcome> {
        let user = require_user(user)?;
        if session.is_cancelled() {
            return Err(ReadingError::Cancelled);
        }
        let record = SavedReading::from_session(session, user.clone())?;

        let Some(store) = &self.store else {
            return Ok(SaveOutcome {
                id: session.id(),
                durable: false,
            });
        };

        match store.save(Some(user), &record).await {
            Ok(id) => {
                info!(reading = %id, user = %user, "reading saved");
                Ok(SaveOutcome { id, durable: true })
            }
            Err(StoreError::AuthenticationRequired) => {
                Err(ReadingError::Store(StoreError::AuthenticationRequired))
            }
            Err(err) => {
                warn!(reading = %session.id(), error = %err, "saving reading failed, keeping local copy");
                Ok(SaveOutcome {
                    id: session.id(),
                    durable: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;
    use crate::entropy::{FailingSource, ScriptedSource, SeededSource};
    use crate::generator::{CompletionRequest, GenerationError, OfflineGenerator};
    use crate::interpretation::{DetailLevel, InterpretationSource, ResponseFormat};
    use crate::persistence::MemoryStore;
    use async_trait::async_trait;
    use std::time::Duration;
    use yj_core::CastingMethod;

    fn offline() -> Interpreter<OfflineGenerator> {
        Interpreter::new(OfflineGenerator, DetailLevel::Detailed, ResponseFormat::V2)
    }

    fn asked(method: CastingMethod) -> ReadingSession {
        let mut session = ReadingSession::new(method);
        session.submit_question("What lies ahead?").unwrap();
        session
    }

    #[tokio::test]
    async fn all_heads_reading_end_to_end() {
        let source = Arc::new(ScriptedSource::new([0; 18]));
        let runner = ReadingRunner::new(source.clone(), offline());
        let mut session = asked(CastingMethod::ThreeCoin);

        runner.run(&mut session).await.unwrap();

        assert_eq!(session.step(), SessionStep::Complete);
        assert_eq!(source.requests(), 1);
        let primary = session.primary().unwrap();
        assert_eq!(primary.hexagram.number, 1);
        assert_eq!(primary.pattern().to_bools(), [true; 6]);
        assert_eq!(primary.changing_lines, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(session.relating().unwrap().hexagram.number, 2);
        assert_eq!(session.interpretation().unwrap().source, InterpretationSource::Static);
    }

    #[tokio::test]
    async fn yarrow_uses_six_values_in_one_request() {
        let source = Arc::new(ScriptedSource::new([8; 6]));
        let runner = ReadingRunner::new(source.clone(), offline());
        let mut session = asked(CastingMethod::YarrowStalk);
        runner.run(&mut session).await.unwrap();
        assert_eq!(source.requests(), 1);
        // 8 mod 16 is a stable yang line
        assert_eq!(session.primary().unwrap().hexagram.number, 1);
        assert!(session.relating().is_none());
    }

    #[tokio::test]
    async fn entropy_failure_moves_session_to_error() {
        let runner = ReadingRunner::new(FailingSource::new("qrng offline"), offline());
        let mut session = asked(CastingMethod::ThreeCoin);
        let err = runner.run(&mut session).await.unwrap_err();
        assert!(matches!(err, ReadingError::RandomSourceFailure(_)));
        assert_eq!(session.step(), SessionStep::Error);
        assert!(session.lines().is_empty());
    }

    #[tokio::test]
    async fn retry_after_failure_completes() {
        let mut session = asked(CastingMethod::ThreeCoin);
        let failing = ReadingRunner::new(FailingSource::new("down"), offline());
        assert!(failing.run(&mut session).await.is_err());

        session.retry().unwrap();
        let working = ReadingRunner::new(SeededSource::new(7), offline());
        working.run(&mut session).await.unwrap();
        assert_eq!(session.step(), SessionStep::Complete);
        assert_eq!(session.lines().len(), 6);
    }

    #[tokio::test]
    async fn seeded_runs_are_reproducible() {
        let a_runner = ReadingRunner::new(SeededSource::new(2024), offline());
        let b_runner = ReadingRunner::new(SeededSource::new(2024), offline());
        let mut a = asked(CastingMethod::ThreeCoin);
        let mut b = asked(CastingMethod::ThreeCoin);
        a_runner.run(&mut a).await.unwrap();
        b_runner.run(&mut b).await.unwrap();
        assert_eq!(a.lines(), b.lines());
    }

    #[tokio::test]
    async fn run_requires_a_question() {
        let runner = ReadingRunner::new(SeededSource::new(1), offline());
        let mut session = ReadingSession::new(CastingMethod::ThreeCoin);
        let err = runner.run(&mut session).await.unwrap_err();
        assert!(matches!(
            err,
            ReadingError::InvalidTransition { from: SessionStep::Question, action: "run" }
        ));
    }

    /// Never answers until cancelled.
    struct Hanging;

    #[async_trait]
    impl TextGenerator for Hanging {
        async fn complete(
            &self,
            _request: CompletionRequest,
            cancel: &CancelToken,
        ) -> Result<String, GenerationError> {
            cancel.cancelled().await;
            Err(GenerationError::Cancelled)
        }
    }

    #[tokio::test]
    async fn teardown_aborts_interpretation() {
        let runner = ReadingRunner::new(
            SeededSource::new(3),
            Interpreter::new(Hanging, DetailLevel::Detailed, ResponseFormat::V2),
        );
        let mut session = asked(CastingMethod::ThreeCoin);
        let token = session.cancel_token();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let err = tokio::time::timeout(Duration::from_secs(2), runner.run(&mut session))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, ReadingError::Cancelled));
        assert_eq!(session.step(), SessionStep::Interpretation);
        assert!(session.interpretation().is_none());
    }

    #[tokio::test]
    async fn persist_saves_to_store() {
        let store = Arc::new(MemoryStore::new());
        let runner = ReadingRunner::new(SeededSource::new(5), offline()).with_store(store.clone());
        let mut session = asked(CastingMethod::YarrowStalk);
        runner.run(&mut session).await.unwrap();

        let user = UserId::new("ann").unwrap();
        let outcome = runner.persist(&session, Some(&user)).await.unwrap();
        assert_eq!(outcome, SaveOutcome { id: session.id(), durable: true });
        assert_eq!(store.load_history(Some(&user)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn persist_requires_authentication() {
        let runner = ReadingRunner::new(SeededSource::new(5), offline())
            .with_store(Arc::new(MemoryStore::new()));
        let mut session = asked(CastingMethod::ThreeCoin);
        runner.run(&mut session).await.unwrap();
        let err = runner.persist(&session, None).await.unwrap_err();
        assert!(matches!(err, ReadingError::Store(StoreError::AuthenticationRequired)));
    }

    struct BrokenStore;

    #[async_trait]
    impl ReadingStore for BrokenStore {
        async fn save(&self, _user: Option<&UserId>, _reading: &SavedReading) -> Result<Uuid, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }

        async fn load_history(&self, _user: Option<&UserId>) -> Result<Vec<SavedReading>, StoreError> {
            Ok(Vec::new())
        }

        async fn delete(&self, _user: Option<&UserId>, id: Uuid) -> Result<(), StoreError> {
            Err(StoreError::NotFound(id))
        }
    }

    #[tokio::test]
    async fn store_failure_keeps_local_reading() {
        let runner = ReadingRunner::new(SeededSource::new(9), offline()).with_store(Arc::new(BrokenStore));
        let mut session = asked(CastingMethod::ThreeCoin);
        runner.run(&mut session).await.unwrap();

        let user = UserId::new("ann").unwrap();
        let outcome = runner.persist(&session, Some(&user)).await.unwrap();
        assert_eq!(outcome, SaveOutcome { id: session.id(), durable: false });
        assert_eq!(session.step(), SessionStep::Complete);
        assert!(session.interpretation().is_some());
    }

    #[tokio::test]
    async fn incomplete_session_is_not_persisted() {
        let runner = ReadingRunner::new(SeededSource::new(1), offline());
        let session = asked(CastingMethod::ThreeCoin);
        let user = UserId::new("ann").unwrap();
        assert!(runner.persist(&session, Some(&user)).await.is_err());
    }
}
