//! TTL-cached presence-log loader.
//!
//! Wraps [`reader::load_presence_log`] with a fixed time-to-live cache behind
//! a single mutex. Callers use [`LogCache::get`] to obtain a fresh-or-cached
//! [`PresenceLog`] snapshot; the cache re-validates freshness *after*
//! acquiring the lock, so N concurrent callers inside one expiry window
//! trigger at most one re-parse – the rest block briefly and reuse the slot
//! the first caller filled.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use presence_core::error::Result;
use presence_core::models::PresenceLog;
use presence_data::reader;
use tracing::debug;

use crate::clock::{Clock, SystemClock};

// ── Defaults ──────────────────────────────────────────────────────────────────

/// Default cache TTL in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 10;

// ── LogCache ──────────────────────────────────────────────────────────────────

/// A parsed log snapshot together with the instant it stops being valid.
struct CacheSlot {
    log: Arc<PresenceLog>,
    expires_at: Instant,
}

/// TTL-cached wrapper around the presence-log reader.
///
/// Owns its value, expiry and mutual-exclusion primitive; handlers share one
/// instance behind an [`Arc`] instead of consulting process-global state.
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// use presence_runtime::log_cache::LogCache;
///
/// let cache = LogCache::new("runtime/data/sample_data.csv", Duration::from_secs(10));
/// let log = cache.get()?;
/// println!("{} users", log.len());
/// # Ok::<(), presence_runtime::core::AnalyzerError>(())
/// ```
pub struct LogCache {
    /// Source CSV consulted on every cache miss.
    csv_path: PathBuf,
    /// How long a parsed snapshot stays valid.
    ttl: Duration,
    /// Time source for expiry decisions.
    clock: Arc<dyn Clock>,
    /// Current snapshot, if any. The mutex also serialises re-parsing.
    slot: Mutex<Option<CacheSlot>>,
    /// How many times the source file has been parsed.
    reloads: AtomicU64,
}

impl LogCache {
    /// Create a cache over `csv_path` with the given TTL, using the system
    /// clock.
    pub fn new(csv_path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self::with_clock(csv_path, ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an explicit [`Clock`] (used by tests to drive
    /// expiry without sleeping).
    pub fn with_clock(csv_path: impl Into<PathBuf>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            csv_path: csv_path.into(),
            ttl,
            clock,
            slot: Mutex::new(None),
            reloads: AtomicU64::new(0),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Return the current presence log, re-parsing the source file only when
    /// the cached snapshot is absent or expired.
    ///
    /// The freshness check runs under the lock, and the lock is held across
    /// the parse: concurrent callers wait, then observe the freshly filled
    /// slot instead of parsing again. The TTL window restarts from the
    /// completion time of the new parse.
    ///
    /// A file-access failure propagates to the caller; the previous snapshot
    /// (if any) is left in place untouched.
    pub fn get(&self) -> Result<Arc<PresenceLog>> {
        let mut slot = self.lock_slot();

        let now = self.clock.now();
        if let Some(entry) = slot.as_ref() {
            if now < entry.expires_at {
                debug!("returning cached presence log");
                return Ok(Arc::clone(&entry.log));
            }
        }

        let log = Arc::new(reader::load_presence_log(&self.csv_path)?);
        self.reloads.fetch_add(1, Ordering::Relaxed);
        debug!(
            users = log.len(),
            "presence log cache updated from {}",
            self.csv_path.display()
        );

        *slot = Some(CacheSlot {
            log: Arc::clone(&log),
            expires_at: self.clock.now() + self.ttl,
        });

        Ok(log)
    }

    /// Discard the current snapshot, forcing the next [`get`] to re-parse.
    pub fn invalidate(&self) {
        *self.lock_slot() = None;
        debug!("presence log cache invalidated");
    }

    /// How many times the source file has been parsed so far.
    pub fn reload_count(&self) -> u64 {
        self.reloads.load(Ordering::Relaxed)
    }

    /// The source file this cache reads from.
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Acquire the slot lock, recovering the guard if a previous holder
    /// panicked.
    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<CacheSlot>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
