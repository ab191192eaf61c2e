//! Durable storage of completed readings.
//!
//! Every operation is scoped to an authenticated user. Stores take the
//! user as `Option<&UserId>` and reject `None` with
//! [`StoreError::AuthenticationRequired`] instead of guessing.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use yj_core::{CastingMethod, LINES_PER_HEXAGRAM, Line, Reading, read};

use crate::error::{ReadingError, ReadingResult};
use crate::interpretation::InterpretationResult;
use crate::session::{ReadingSession, SessionStep};

/// Persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No authenticated user was supplied.
    #[error("authentication required")]
    AuthenticationRequired,

    /// The user id cannot be used as a storage key.
    #[error("invalid user id: {0:?}")]
    InvalidUser(String),

    /// The reading belongs to a different user than the one saving it.
    #[error("reading {0} belongs to another user")]
    UserMismatch(Uuid),

    /// No reading with this id exists for the user.
    #[error("reading {0} not found")]
    NotFound(Uuid),

    /// Filesystem failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be encoded or decoded.
    #[error("storage format error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// An authenticated user's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate a user id: 1 to 64 ASCII letters, digits, `-`, `_` or `.`,
    /// not starting with a dot.
    pub fn new(id: impl Into<String>) -> Result<Self, StoreError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id.len() <= 64
            && !id.starts_with('.')
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if valid {
            Ok(Self(id))
        } else {
            Err(StoreError::InvalidUser(id))
        }
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unwrap the authenticated user or fail.
pub fn require_user(user: Option<&UserId>) -> Result<&UserId, StoreError> {
    user.ok_or(StoreError::AuthenticationRequired)
}

/// A completed reading as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedReading {
    /// Reading id; the id of the session that produced it.
    pub id: Uuid,
    /// Owner.
    pub user: UserId,
    /// The question asked.
    pub question: String,
    /// Casting method used.
    pub method: CastingMethod,
    /// When the reading was started.
    pub created_at: DateTime<Utc>,
    /// The six cast lines, bottom first.
    pub lines: [Line; LINES_PER_HEXAGRAM],
    /// King Wen number of the primary hexagram.
    pub primary: u8,
    /// King Wen number of the relating hexagram, if any.
    pub relating: Option<u8>,
    /// Positions of the changing lines.
    pub changing_lines: Vec<u8>,
    /// The interpretation attached to the reading.
    pub interpretation: InterpretationResult,
}

impl SavedReading {
    /// Snapshot a completed session for `user`.
    pub fn from_session(session: &ReadingSession, user: UserId) -> ReadingResult<Self> {
        let not_complete = || ReadingError::InvalidTransition {
            from: session.step(),
            action: "save",
        };
        if session.step() != SessionStep::Complete {
            return Err(not_complete());
        }
        let lines = <[Line; LINES_PER_HEXAGRAM]>::try_from(session.lines())
            .map_err(|_| not_complete())?;
        let primary = session.primary().ok_or_else(not_complete)?;
        let interpretation = session.interpretation().ok_or_else(not_complete)?;

        Ok(Self {
            id: session.id(),
            user,
            question: session.question().to_string(),
            method: session.method(),
            created_at: session.created_at(),
            lines,
            primary: primary.hexagram.number,
            relating: session.relating().map(|r| r.hexagram.number),
            changing_lines: primary.changing_lines.clone(),
            interpretation: interpretation.clone(),
        })
    }

    /// Re-derive the primary and relating hexagram from the stored lines.
    pub fn reading(&self) -> Reading {
        read(&self.lines)
    }
}

/// Storage of completed readings.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Store a reading and return its id.
    async fn save(&self, user: Option<&UserId>, reading: &SavedReading) -> Result<Uuid, StoreError>;

    /// All readings of `user`, newest first.
    async fn load_history(&self, user: Option<&UserId>) -> Result<Vec<SavedReading>, StoreError>;

    /// Delete one of `user`'s readings.
    async fn delete(&self, user: Option<&UserId>, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: ReadingStore + ?Sized> ReadingStore for std::sync::Arc<T> {
    async fn save(&self, user: Option<&UserId>, reading: &SavedReading) -> Result<Uuid, StoreError> {
        (**self).save(user, reading).await
    }

    async fn load_history(&self, user: Option<&UserId>) -> Result<Vec<SavedReading>, StoreError> {
        (**self).load_history(user).await
    }

    async fn delete(&self, user: Option<&UserId>, id: Uuid) -> Result<(), StoreError> {
        (**self).delete(user, id).await
    }
}

/// Check that `reading` belongs to the authenticated user.
pub(crate) fn owned_by<'a>(
    user: Option<&'a UserId>,
    reading: &SavedReading,
) -> Result<&'a UserId, StoreError> {
    let user = require_user(user)?;
    if reading.user != *user {
        return Err(StoreError::UserMismatch(reading.id));
    }
    Ok(user)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn user_ids_are_validated() {
        assert!(UserId::new("alice").is_ok());
        assert!(UserId::new("user-42_x.y").is_ok());
        let long = "x".repeat(65);
        for bad in ["", "../etc", ".hidden", "a/b", "with space", long.as_str()] {
            assert!(UserId::new(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn user_id_deserialization_validates() {
        assert!(serde_json::from_str::<UserId>("\"bob\"").is_ok());
        assert!(serde_json::from_str::<UserId>("\"../bob\"").is_err());
    }

    #[test]
    fn require_user_rejects_anonymous() {
        assert!(matches!(require_user(None), Err(StoreError::AuthenticationRequired)));
    }

    #[test]
    fn saved_reading_snapshots_session() {
        let session = complete_session("Where next?", vec![0; 18]);
        let saved = SavedReading::from_session(&session, UserId::new("ann").unwrap()).unwrap();
        assert_eq!(saved.id, session.id());
        assert_eq!(saved.question, "Where next?");
        assert_eq!(saved.primary, 1);
        assert_eq!(saved.relating, Some(2));
        assert_eq!(saved.changing_lines, vec![1, 2, 3, 4, 5, 6]);

        let reading = saved.reading();
        assert_eq!(reading.primary.hexagram.number, saved.primary);
        assert_eq!(reading.relating.map(|r| r.hexagram.number), saved.relating);
    }

    #[test]
    fn incomplete_session_cannot_be_saved() {
        let mut session = ReadingSession::new(CastingMethod::ThreeCoin);
        session.submit_question("Is it time?").unwrap();
        let err = SavedReading::from_session(&session, UserId::new("ann").unwrap()).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"cannot save while in step loading");
        assert!(matches!(
            err,
            ReadingError::InvalidTransition { from: SessionStep::Loading, action: "save" }
        ));
    }

    #[test]
    fn saved_reading_round_trips_through_json() {
        let saved = saved("ann", "Round trip?");
        let json = serde_json::to_string(&saved).unwrap();
        let back: SavedReading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, saved);
    }
}
