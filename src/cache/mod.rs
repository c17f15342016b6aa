// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

//! Self-refreshing cache of server status probes
//!
//! Each key owns at most one in-flight probe task. Entries refresh
//! lazily on access once the refresh interval has elapsed since the
//! previous probe started, so idle keys cost nothing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::error::{AppError, ProbeError, Result};
use crate::minecraft::{PingTarget, Pinger, ServerStatus};

/// Latest known outcome for one cache key
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// No probe for this key has completed yet
    Pending,
    /// Most recently completed probe succeeded
    Ready(ServerStatus),
    /// Most recently completed probe failed
    Failed(ProbeError),
}

/// Shared read handle onto one key's outcome slot.
///
/// The slot is written only when a probe completes, so a reader sees
/// the previous completed outcome while a refresh is still running.
#[derive(Clone)]
pub struct ProbeHandle {
    state: Arc<RwLock<ProbeOutcome>>,
}

impl ProbeHandle {
    fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ProbeOutcome::Pending)),
        }
    }

    /// Returns the current outcome without waiting for in-flight work
    pub async fn poll(&self) -> ProbeOutcome {
        self.state.read().await.clone()
    }

    async fn complete(&self, outcome: ProbeOutcome) {
        *self.state.write().await = outcome;
    }
}

struct CacheEntry {
    handle: ProbeHandle,
    started_at: tokio::time::Instant,
    task: JoinHandle<()>,
}

/// Keyed cache of self-refreshing status probes
pub struct StatusCache {
    // None marks a stopped cache; get and poll fail fast afterwards
    entries: Mutex<Option<HashMap<String, CacheEntry>>>,
    refresh_interval: Duration,
    probe_timeout: Duration,
}

impl StatusCache {
    /// Creates an empty cache with the given refresh and probe timing
    #[must_use]
    pub fn new(refresh_interval: Duration, probe_timeout: Duration) -> Self {
        Self {
            entries: Mutex::new(Some(HashMap::new())),
            refresh_interval,
            probe_timeout,
        }
    }

    /// Returns the handle for `key`, starting a probe when the key is
    /// new or the previous probe has finished and a full interval has
    /// passed since it started.
    ///
    /// Never waits on network I/O. While a probe for the key is still
    /// running the existing handle is returned unchanged, so at most
    /// one probe per key is in flight at any time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CacheStopped`] after [`Self::stop`].
    pub async fn get(&self, key: &str) -> Result<ProbeHandle> {
        let mut guard = self.entries.lock().await;
        let entries = guard.as_mut().ok_or(AppError::CacheStopped)?;

        if let Some(entry) = entries.get_mut(key) {
            if entry.task.is_finished() && entry.started_at.elapsed() >= self.refresh_interval {
                tracing::debug!("Refreshing stale status for {}", key);
                entry.task = self.spawn_probe(key, entry.handle.clone());
                entry.started_at = tokio::time::Instant::now();
            }
            return Ok(entry.handle.clone());
        }

        tracing::debug!("Starting first status probe for {}", key);
        let handle = ProbeHandle::new();
        let task = self.spawn_probe(key, handle.clone());
        entries.insert(
            key.to_string(),
            CacheEntry {
                handle: handle.clone(),
                started_at: tokio::time::Instant::now(),
                task,
            },
        );
        Ok(handle)
    }

    /// Returns the current outcome for `key` without creating an entry.
    ///
    /// Unknown keys read as [`ProbeOutcome::Pending`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CacheStopped`] after [`Self::stop`].
    pub async fn poll(&self, key: &str) -> Result<ProbeOutcome> {
        let handle = {
            let guard = self.entries.lock().await;
            let entries = guard.as_ref().ok_or(AppError::CacheStopped)?;
            entries.get(key).map(|entry| entry.handle.clone())
        };

        match handle {
            Some(handle) => Ok(handle.poll().await),
            None => Ok(ProbeOutcome::Pending),
        }
    }

    /// Drops entries whose probe task has finished, returning how many
    /// were removed. Running probes are left untouched.
    pub async fn invalidate_all(&self) -> usize {
        let mut guard = self.entries.lock().await;
        let Some(entries) = guard.as_mut() else {
            return 0;
        };

        let before = entries.len();
        entries.retain(|key, entry| {
            let keep = !entry.task.is_finished();
            if !keep {
                tracing::debug!("Invalidating finished entry: {}", key);
            }
            keep
        });
        before - entries.len()
    }

    /// Cancels every in-flight probe and discards all entries.
    ///
    /// The cache is unusable afterwards; build a new one to resume.
    pub async fn stop(&self) {
        let entries = {
            let mut guard = self.entries.lock().await;
            guard.take()
        };
        let Some(entries) = entries else {
            return;
        };

        let count = entries.len();
        let mut tasks = Vec::with_capacity(count);
        for (key, entry) in entries {
            tracing::trace!("Cancelling probe task for {}", key);
            entry.task.abort();
            tasks.push(entry.task);
        }
        // Wait until every task has actually wound down
        let _ = join_all(tasks).await;
        tracing::debug!("Status cache stopped, {} entries discarded", count);
    }

    /// Whether [`Self::stop`] has been called
    pub async fn is_stopped(&self) -> bool {
        self.entries.lock().await.is_none()
    }

    /// Number of tracked keys
    pub async fn len(&self) -> usize {
        let guard = self.entries.lock().await;
        guard.as_ref().map_or(0, HashMap::len)
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn spawn_probe(&self, key: &str, handle: ProbeHandle) -> JoinHandle<()> {
        let target = PingTarget::parse(key);
        let timeout = self.probe_timeout;
        let key = key.to_string();

        tokio::spawn(async move {
            let pinger = Pinger::new(target, timeout);
            let start = std::time::Instant::now();
            match pinger.fetch_status().await {
                Ok(status) => {
                    let duration = start.elapsed().as_secs_f64();
                    tracing::debug!(
                        "Probed {} in {:.3}s: {}/{} players online",
                        key,
                        duration,
                        status.players_online,
                        status.max_players
                    );
                    handle.complete(ProbeOutcome::Ready(status)).await;
                }
                Err(e) => {
                    let duration = start.elapsed().as_secs_f64();
                    tracing::warn!("Probe failed for {} in {:.3}s: {}", key, duration, e);
                    handle.complete(ProbeOutcome::Failed(e)).await;
                }
            }
        })
    }
}
