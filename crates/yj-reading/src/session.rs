//! The reading session state machine.
//!
//! A session moves `Question → Loading → Casting → Interpretation →
//! Complete`, with `Error` reachable while entropy or interpretation is
//! outstanding. Every transition checks the current step; anything else is
//! a [`ReadingError::InvalidTransition`].

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use yj_core::{
    CastHexagram, CastingMethod, Line, LINES_PER_HEXAGRAM, Reading, cast_hexagram, cast_line,
    derive_relating,
};

use crate::cancel::CancelToken;
use crate::config::{MIN_QUESTION_LEN, ReadingConfig};
use crate::entropy::EntropyError;
use crate::error::{ReadingError, ReadingResult};
use crate::interpretation::{InterpretationResult, ReadingContext};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStep {
    /// Waiting for a question.
    Question,
    /// Waiting for entropy.
    Loading,
    /// Casting lines bottom to top.
    Casting,
    /// Six lines cast; waiting for the interpretation.
    Interpretation,
    /// Interpretation attached.
    Complete,
    /// Entropy could not be obtained.
    Error,
}

impl std::fmt::Display for SessionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Question => write!(f, "question"),
            Self::Loading => write!(f, "loading"),
            Self::Casting => write!(f, "casting"),
            Self::Interpretation => write!(f, "interpretation"),
            Self::Complete => write!(f, "complete"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One divination, from question to interpretation.
///
/// Dropping the session cancels its [`CancelToken`], which aborts any
/// interpretation request still in flight.
#[derive(Debug)]
pub struct ReadingSession {
    id: Uuid,
    question: String,
    method: CastingMethod,
    step: SessionStep,
    entropy: VecDeque<u64>,
    cast_lines: Vec<Line>,
    primary: Option<CastHexagram>,
    relating: Option<CastHexagram>,
    interpretation: Option<InterpretationResult>,
    failure: Option<EntropyError>,
    created_at: DateTime<Utc>,
    cancel: CancelToken,
    min_question_len: usize,
}

impl ReadingSession {
    /// Start a session for `method`.
    pub fn new(method: CastingMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: String::new(),
            method,
            step: SessionStep::Question,
            entropy: VecDeque::new(),
            cast_lines: Vec::with_capacity(LINES_PER_HEXAGRAM),
            primary: None,
            relating: None,
            interpretation: None,
            failure: None,
            created_at: Utc::now(),
            cancel: CancelToken::new(),
            min_question_len: MIN_QUESTION_LEN,
        }
    }

    /// Start a session with the method and question rule from `config`.
    ///
    /// The configured minimum can only raise [`MIN_QUESTION_LEN`].
    pub fn from_config(config: &ReadingConfig) -> Self {
        let mut session = Self::new(config.method);
        session.min_question_len = config.min_question_len.max(MIN_QUESTION_LEN);
        session
    }

    fn expect_step(&self, step: SessionStep, action: &'static str) -> ReadingResult<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(ReadingError::InvalidTransition {
                from: self.step,
                action,
            })
        }
    }

    // --- Transitions ---

    /// Accept the question and move to `Loading`.
    ///
    /// A question shorter than the minimum once trimmed leaves the session
    /// in `Question`.
    pub fn submit_question(&mut self, question: &str) -> ReadingResult<()> {
        self.expect_step(SessionStep::Question, "submit a question")?;
        let trimmed = question.trim();
        let got = trimmed.chars().count();
        if got < self.min_question_len {
            return Err(ReadingError::QuestionTooShort {
                min: self.min_question_len,
                got,
            });
        }
        self.question = trimmed.to_string();
        self.step = SessionStep::Loading;
        Ok(())
    }

    /// How many random values the next entropy request must supply.
    ///
    /// Covers only the lines not yet cast, less anything already buffered.
    /// Zero outside `Loading`.
    pub fn entropy_needed(&self) -> usize {
        if self.step != SessionStep::Loading {
            return 0;
        }
        let remaining = LINES_PER_HEXAGRAM - self.cast_lines.len();
        (remaining * self.method.entropy_per_line()).saturating_sub(self.entropy.len())
    }

    /// Hand over prefetched entropy and move to `Casting`.
    ///
    /// Fewer values than [`entropy_needed`](Self::entropy_needed) is a
    /// random source failure and moves the session to `Error`.
    pub fn provide_entropy(&mut self, values: Vec<u64>) -> ReadingResult<()> {
        self.expect_step(SessionStep::Loading, "provide entropy")?;
        let needed = self.entropy_needed();
        if values.len() < needed {
            let err = EntropyError::ShortRead {
                requested: needed,
                got: values.len(),
            };
            self.fail(err.clone())?;
            return Err(ReadingError::RandomSourceFailure(err));
        }
        self.entropy.extend(values);
        self.step = SessionStep::Casting;
        Ok(())
    }

    /// Cast the next line from the buffered entropy.
    ///
    /// The sixth line resolves the primary and relating hexagram and moves
    /// the session to `Interpretation`.
    pub fn cast_next_line(&mut self) -> ReadingResult<Line> {
        self.expect_step(SessionStep::Casting, "cast a line")?;
        let per_line = self.method.entropy_per_line();
        let draws: Vec<u64> = self
            .entropy
            .drain(..per_line.min(self.entropy.len()))
            .collect();
        let position = self.cast_lines.len() as u8 + 1;
        let line = cast_line(self.method, position, &draws)?;
        self.cast_lines.push(line);

        if let Ok(lines) = <[Line; LINES_PER_HEXAGRAM]>::try_from(self.cast_lines.as_slice()) {
            self.primary = Some(cast_hexagram(&lines));
            self.relating = derive_relating(&lines);
            self.step = SessionStep::Interpretation;
        }
        Ok(line)
    }

    /// Cast every remaining line.
    pub fn cast_remaining(&mut self) -> ReadingResult<()> {
        self.expect_step(SessionStep::Casting, "cast remaining lines")?;
        while self.step == SessionStep::Casting {
            self.cast_next_line()?;
        }
        Ok(())
    }

    /// Context for the interpretation request.
    pub fn interpretation_context(&self) -> ReadingResult<ReadingContext> {
        self.expect_step(SessionStep::Interpretation, "build interpretation context")?;
        let reading = self.reading().ok_or(ReadingError::InvalidTransition {
            from: self.step,
            action: "build interpretation context",
        })?;
        Ok(ReadingContext::new(&*self.question, self.method, &reading))
    }

    /// Attach the interpretation and move to `Complete`.
    pub fn complete(&mut self, result: InterpretationResult) -> ReadingResult<()> {
        self.expect_step(SessionStep::Interpretation, "complete")?;
        self.interpretation = Some(result);
        self.step = SessionStep::Complete;
        Ok(())
    }

    /// Record an unrecoverable failure and move to `Error`.
    pub fn fail(&mut self, failure: EntropyError) -> ReadingResult<()> {
        match self.step {
            SessionStep::Loading | SessionStep::Casting | SessionStep::Interpretation => {
                self.failure = Some(failure);
                self.step = SessionStep::Error;
                Ok(())
            }
            from => Err(ReadingError::InvalidTransition { from, action: "fail" }),
        }
    }

    /// Leave `Error`.
    ///
    /// With all six lines cast the session returns to `Interpretation`;
    /// otherwise it returns to `Loading`, keeping the lines already cast.
    pub fn retry(&mut self) -> ReadingResult<()> {
        self.expect_step(SessionStep::Error, "retry")?;
        self.failure = None;
        self.step = if self.cast_lines.len() == LINES_PER_HEXAGRAM {
            SessionStep::Interpretation
        } else {
            SessionStep::Loading
        };
        Ok(())
    }

    /// Discard the session, aborting outstanding work.
    pub fn teardown(self) {
        tracing::debug!(session = %self.id, step = %self.step, "session torn down");
        // Drop cancels the token.
    }

    // --- Accessors ---

    /// Session identifier, also the local id of an unsaved reading.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The trimmed question, empty before submission.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Casting method.
    pub fn method(&self) -> CastingMethod {
        self.method
    }

    /// Current step.
    pub fn step(&self) -> SessionStep {
        self.step
    }

    /// Lines cast so far, bottom first.
    pub fn lines(&self) -> &[Line] {
        &self.cast_lines
    }

    /// The primary hexagram, once six lines exist.
    pub fn primary(&self) -> Option<&CastHexagram> {
        self.primary.as_ref()
    }

    /// The relating hexagram, if any line changed.
    pub fn relating(&self) -> Option<&CastHexagram> {
        self.relating.as_ref()
    }

    /// Primary and relating hexagram together.
    pub fn reading(&self) -> Option<Reading> {
        self.primary.as_ref().map(|primary| Reading {
            primary: primary.clone(),
            relating: self.relating.clone(),
        })
    }

    /// The attached interpretation.
    pub fn interpretation(&self) -> Option<&InterpretationResult> {
        self.interpretation.as_ref()
    }

    /// Why the session is in `Error`.
    pub fn failure(&self) -> Option<&EntropyError> {
        self.failure.as_ref()
    }

    /// When the session was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// A handle that tears down this session's outstanding work when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Whether the session has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ReadingSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Holds the one live session of a user context.
///
/// Beginning a new reading replaces, and tears down, the previous one.
#[derive(Debug, Default)]
pub struct SessionSlot {
    current: Option<ReadingSession>,
}

impl SessionSlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `session` the live session, tearing down any previous one.
    pub fn begin(&mut self, session: ReadingSession) -> &mut ReadingSession {
        if let Some(previous) = self.current.take() {
            previous.teardown();
        }
        self.current.insert(session)
    }

    /// The live session.
    pub fn current(&self) -> Option<&ReadingSession> {
        self.current.as_ref()
    }

    /// The live session, mutably.
    pub fn current_mut(&mut self) -> Option<&mut ReadingSession> {
        self.current.as_mut()
    }

    /// Leave the reading flow, discarding the live session.
    pub fn end(&mut self) {
        if let Some(session) = self.current.take() {
            session.teardown();
        }
    }
}
