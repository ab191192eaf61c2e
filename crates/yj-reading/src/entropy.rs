//! Random sources.
//!
//! A [`RandomSource`] hands out batches of non-negative integers with no
//! guaranteed range; casting reduces them as needed. Implementations are
//! interchangeable behind the one trait, so a remote hardware source can be
//! wrapped in a [`FallbackSource`] with a local CSPRNG behind it.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Failure to obtain entropy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntropyError {
    /// The source could not be reached or refused the request.
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with fewer values than requested.
    #[error("short read: requested {requested} values, got {got}")]
    ShortRead {
        /// Values requested.
        requested: usize,
        /// Values returned.
        got: usize,
    },
}

/// Supplies raw random integers on demand.
#[async_trait]
pub trait RandomSource: Send + Sync {
    /// Fetch `count` integers in one request.
    async fn get_random(&self, count: usize) -> Result<Vec<u64>, EntropyError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    async fn get_random(&self, count: usize) -> Result<Vec<u64>, EntropyError> {
        (**self).get_random(count).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Fetch a batch and reject short reads.
pub async fn fetch_exact(
    source: &(impl RandomSource + ?Sized),
    count: usize,
) -> Result<Vec<u64>, EntropyError> {
    let values = source.get_random(count).await?;
    if values.len() < count {
        return Err(EntropyError::ShortRead {
            requested: count,
            got: values.len(),
        });
    }
    Ok(values)
}

/// Reproducible pseudo-random source seeded from a `u64`.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a source with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl RandomSource for SeededSource {
    async fn get_random(&self, count: usize) -> Result<Vec<u64>, EntropyError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| EntropyError::Unavailable("seeded generator poisoned".into()))?;
        Ok((0..count).map(|_| rng.random::<u64>()).collect())
    }

    fn name(&self) -> &str {
        "seeded"
    }
}

/// Cryptographically secure source backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSource;

fn draw_system(count: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    (0..count).map(|_| rng.random::<u64>()).collect()
}

#[async_trait]
impl RandomSource for SystemSource {
    async fn get_random(&self, count: usize) -> Result<Vec<u64>, EntropyError> {
        Ok(draw_system(count))
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Replays a fixed sequence of values, failing once it runs dry.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    values: Mutex<VecDeque<u64>>,
    requests: AtomicUsize,
}

impl ScriptedSource {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
            requests: AtomicUsize::new(0),
        }
    }

    /// Number of `get_random` calls served so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RandomSource for ScriptedSource {
    async fn get_random(&self, count: usize) -> Result<Vec<u64>, EntropyError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let mut values = self
            .values
            .lock()
            .map_err(|_| EntropyError::Unavailable("script poisoned".into()))?;
        if values.len() < count {
            return Err(EntropyError::Unavailable(format!(
                "script exhausted: {} of {count} values left",
                values.len()
            )));
        }
        Ok(values.drain(..count).collect())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// A source that is never available.
#[derive(Debug, Clone)]
pub struct FailingSource {
    reason: String,
}

impl FailingSource {
    /// Create a source that fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl RandomSource for FailingSource {
    async fn get_random(&self, _count: usize) -> Result<Vec<u64>, EntropyError> {
        Err(EntropyError::Unavailable(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Try a primary source, falling back to a secondary on any failure.
#[derive(Debug)]
pub struct FallbackSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P: RandomSource, F: RandomSource> FallbackSource<P, F> {
    /// Wrap `primary` with `fallback` behind it.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: RandomSource, F: RandomSource> RandomSource for FallbackSource<P, F> {
    async fn get_random(&self, count: usize) -> Result<Vec<u64>, EntropyError> {
        match fetch_exact(&self.primary, count).await {
            Ok(values) => Ok(values),
            Err(err) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %err,
                    "primary entropy source failed, falling back"
                );
                self.fallback.get_random(count).await
            }
        }
    }

    fn name(&self) -> &str {
        self.primary.name()
    }
}
