//! # Caching Module
//!
//! This module provides caching wrappers for fitness oracles. Elite selection
//! picks the same few parents over and over, so identical offspring are
//! common once a run converges, and an expensive oracle (rendering an image,
//! for instance) pays for each of them again. Wrapping the oracle in a cache
//! scores every distinct genome once.
//!
//! Only successful scores are cached. A failing oracle still fails the run.
//!
//! ## Example
//!
//! ```rust
//! use genfit::{
//!     caching::{CachedOracle, CachingOracle},
//!     error::Result,
//!     evolution::Oracle,
//!     gene::TextGene,
//!     genome::Genome,
//! };
//!
//! let oracle = |genome: &Genome<TextGene>| -> Result<f64> { Ok(genome.len() as f64) };
//! let cached: CachedOracle<TextGene, _> = oracle.with_global_cache();
//!
//! let genome = Genome::from_text("abc");
//! assert_eq!(cached.score(&genome).unwrap(), 3.0);
//! assert_eq!(cached.cache_size().unwrap(), 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::{
    error::{Result, ResultExt},
    evolution::Oracle,
    gene::{Gene, PolygonGene, TextGene},
    genome::Genome,
};

/// A trait for values that can be used as fitness cache keys.
///
/// Values that would receive the same score must produce the same key.
pub trait CacheKey {
    /// The type of the cache key.
    type Key: Eq + Hash + Clone + Debug + Send + Sync;

    fn cache_key(&self) -> Self::Key;
}

impl CacheKey for TextGene {
    type Key = char;

    fn cache_key(&self) -> Self::Key {
        self.0
    }
}

impl CacheKey for PolygonGene {
    type Key = ([u64; 4], [u8; 3]);

    fn cache_key(&self) -> Self::Key {
        (
            [
                self.x.to_bits(),
                self.y.to_bits(),
                self.radius.to_bits(),
                self.angle.to_bits(),
            ],
            [self.red, self.green, self.blue],
        )
    }
}

impl<G> CacheKey for Genome<G>
where
    G: Gene + CacheKey,
{
    type Key = Vec<G::Key>;

    fn cache_key(&self) -> Self::Key {
        self.genes().iter().map(CacheKey::cache_key).collect()
    }
}

type GenomeKey<G> = <Genome<G> as CacheKey>::Key;

/// An oracle wrapper with one cache shared by every thread.
///
/// Clones share the same cache. Without a capacity the cache grows by one
/// entry per distinct genome; with one, it is cleared whenever an insert
/// would exceed it.
#[derive(Debug, Clone)]
pub struct CachedOracle<G, O>
where
    G: Gene + CacheKey,
    O: Oracle<G>,
{
    oracle: O,
    cache: Arc<Mutex<HashMap<GenomeKey<G>, f64>>>,
    capacity: Option<usize>,
    _marker: PhantomData<G>,
}

impl<G, O> CachedOracle<G, O>
where
    G: Gene + CacheKey,
    O: Oracle<G>,
{
    pub fn new(oracle: O) -> Self {
        Self::with_cache(oracle, HashMap::new())
    }

    /// Creates a cached oracle with a pre-populated cache.
    pub fn with_cache(oracle: O, cache: HashMap<GenomeKey<G>, f64>) -> Self {
        Self {
            oracle,
            cache: Arc::new(Mutex::new(cache)),
            capacity: None,
            _marker: PhantomData,
        }
    }

    /// Creates a cached oracle holding at most `capacity` scores (at least one).
    pub fn with_capacity(oracle: O, capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::new(oracle)
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns a reference to the wrapped oracle.
    pub fn inner(&self) -> &O {
        &self.oracle
    }

    pub fn cache_size(&self) -> Result<usize> {
        Ok(self.cache.lock().context("fitness cache lock poisoned")?.len())
    }

    pub fn clear_cache(&self) -> Result<()> {
        self.cache
            .lock()
            .context("fitness cache lock poisoned")?
            .clear();
        Ok(())
    }

    /// Returns a copy of the cache.
    pub fn get_cache(&self) -> Result<HashMap<GenomeKey<G>, f64>> {
        Ok(self
            .cache
            .lock()
            .context("fitness cache lock poisoned")?
            .clone())
    }
}

impl<G, O> Oracle<G> for CachedOracle<G, O>
where
    G: Gene + CacheKey,
    O: Oracle<G>,
{
    fn score(&self, genome: &Genome<G>) -> Result<f64> {
        let key = genome.cache_key();

        if let Some(score) = self
            .cache
            .lock()
            .context("fitness cache lock poisoned")?
            .get(&key)
        {
            return Ok(*score);
        }

        // scored without holding the lock
        let score = self.oracle.score(genome)?;
        let mut cache = self.cache.lock().context("fitness cache lock poisoned")?;
        if self.capacity.is_some_and(|max| cache.len() >= max) {
            debug!(entries = cache.len(), "fitness cache full, clearing");
            cache.clear();
        }
        cache.insert(key, score);

        Ok(score)
    }
}

/// A per-thread fitness cache.
///
/// Each worker thread sees only its own entries, so lookups never contend.
/// An optional capacity bounds each thread's map; a full map is cleared
/// before the next insert.
#[derive(Debug)]
pub struct ThreadLocalCache<K>
where
    K: Eq + Hash + Send,
{
    cache: thread_local::ThreadLocal<RefCell<HashMap<K, f64>>>,
    capacity: Option<usize>,
}

impl<K> ThreadLocalCache<K>
where
    K: Eq + Hash + Send,
{
    pub fn new() -> Self {
        Self {
            cache: thread_local::ThreadLocal::new(),
            capacity: None,
        }
    }

    /// Creates a cache holding at most `capacity` scores per thread (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: thread_local::ThreadLocal::new(),
            capacity: Some(capacity.max(1)),
        }
    }

    /// Gets a cached score for the current thread if available.
    pub fn get(&self, key: &K) -> Option<f64> {
        self.cache
            .get()
            .and_then(|cell| cell.try_borrow().ok())
            .and_then(|cache| cache.get(key).copied())
    }

    pub fn insert(&self, key: K, value: f64) {
        let cell = self.cache.get_or(|| RefCell::new(HashMap::new()));
        if let Ok(mut cache) = cell.try_borrow_mut() {
            if self.capacity.is_some_and(|max| cache.len() >= max) {
                cache.clear();
            }
            cache.insert(key, value);
        }
    }

    /// Clears the cache for the current thread.
    pub fn clear(&self) {
        if let Some(cell) = self.cache.get() {
            if let Ok(mut cache) = cell.try_borrow_mut() {
                cache.clear();
            }
        }
    }

    /// Returns the number of cached scores for the current thread.
    pub fn len(&self) -> usize {
        self.cache
            .get()
            .and_then(|cell| cell.try_borrow().ok())
            .map_or(0, |cache| cache.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K> Default for ThreadLocalCache<K>
where
    K: Eq + Hash + Send,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An oracle wrapper with a separate cache per worker thread.
#[derive(Debug, Clone)]
pub struct ThreadLocalCachedOracle<G, O>
where
    G: Gene + CacheKey,
    O: Oracle<G>,
{
    oracle: O,
    cache: Arc<ThreadLocalCache<GenomeKey<G>>>,
    _marker: PhantomData<G>,
}

impl<G, O> ThreadLocalCachedOracle<G, O>
where
    G: Gene + CacheKey,
    O: Oracle<G>,
{
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            cache: Arc::new(ThreadLocalCache::new()),
            _marker: PhantomData,
        }
    }

    /// Creates a wrapper holding at most `capacity` scores per worker thread.
    pub fn with_capacity(oracle: O, capacity: usize) -> Self {
        Self {
            oracle,
            cache: Arc::new(ThreadLocalCache::with_capacity(capacity)),
            _marker: PhantomData,
        }
    }

    pub fn inner(&self) -> &O {
        &self.oracle
    }

    /// Clears the cache for the current thread.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Returns the number of cached scores for the current thread.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<G, O> Oracle<G> for ThreadLocalCachedOracle<G, O>
where
    G: Gene + CacheKey,
    O: Oracle<G>,
{
    fn score(&self, genome: &Genome<G>) -> Result<f64> {
        let key = genome.cache_key();

        if let Some(score) = self.cache.get(&key) {
            return Ok(score);
        }

        let score = self.oracle.score(genome)?;
        self.cache.insert(key, score);

        Ok(score)
    }
}

/// Extension trait adding caching constructors to every oracle.
pub trait CachingOracle<G>: Oracle<G> + Sized
where
    G: Gene + CacheKey,
{
    /// Wraps the oracle in a cache shared by all threads.
    ///
    /// The cache is unbounded: it keeps one key per distinct genome scored,
    /// which for long runs over large genomes adds up. Use
    /// [`CachedOracle::with_capacity`] to bound it.
    fn with_global_cache(self) -> CachedOracle<G, Self> {
        CachedOracle::new(self)
    }

    /// Wraps the oracle in a cache local to each worker thread.
    ///
    /// Unbounded like [`CachingOracle::with_global_cache`]; see
    /// [`ThreadLocalCachedOracle::with_capacity`].
    fn with_thread_local_cache(self) -> ThreadLocalCachedOracle<G, Self> {
        ThreadLocalCachedOracle::new(self)
    }
}

impl<G, O> CachingOracle<G> for O
where
    G: Gene + CacheKey,
    O: Oracle<G>,
{
}
