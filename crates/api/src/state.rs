use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};

use thiserror::Error;
use tracing::{debug, info};
use ui::Profile;
use walk_core::{
    run_simulation, OsSeedSource, SeedCache, SeedSource, SimulationOutcome, SimulationRequest,
    WalkConfig,
};

pub const DEFAULT_MAX_SESSIONS: usize = 1024;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SessionError {
    #[error("session id space exhausted")]
    IdOverflow,
    #[error("unknown session {0}")]
    UnknownSession(u64),
}

#[derive(Clone, Debug)]
pub struct AppState {
    next_session_id: Arc<AtomicU64>,
    sessions: Arc<Mutex<BTreeMap<u64, SeedCache>>>,
    max_sessions: usize,
    profile: Arc<Profile>,
    walk_config: WalkConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Profile::default(), DEFAULT_MAX_SESSIONS)
    }
}

impl AppState {
    pub fn new(profile: Profile, max_sessions: usize) -> Self {
        Self {
            next_session_id: Arc::new(AtomicU64::new(0)),
            sessions: Arc::new(Mutex::new(BTreeMap::new())),
            max_sessions: max_sessions.max(1),
            profile: Arc::new(profile),
            walk_config: WalkConfig::default(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn walk_config(&self) -> WalkConfig {
        self.walk_config
    }

    pub fn create_session(&self) -> Result<u64, SessionError> {
        let previous = self
            .next_session_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| SessionError::IdOverflow)?;
        let session_id = previous + 1;

        let mut sessions = self.lock_sessions();
        sessions.insert(session_id, SeedCache::new());
        while sessions.len() > self.max_sessions {
            if let Some((evicted, _)) = sessions.pop_first() {
                debug!(session_id = evicted, "evicted oldest session");
            }
        }
        info!(session_id, active_sessions = sessions.len(), "session created");

        Ok(session_id)
    }

    pub fn end_session(&self, session_id: u64) -> Result<(), SessionError> {
        self.lock_sessions()
            .remove(&session_id)
            .map(|_| ())
            .ok_or(SessionError::UnknownSession(session_id))
    }

    pub fn session_count(&self) -> usize {
        self.lock_sessions().len()
    }

    pub fn run_walk(
        &self,
        session_id: u64,
        request: &SimulationRequest,
    ) -> Result<SimulationOutcome, SessionError> {
        self.run_walk_with(session_id, request, &mut OsSeedSource)
    }

    pub fn run_walk_with<S: SeedSource>(
        &self,
        session_id: u64,
        request: &SimulationRequest,
        source: &mut S,
    ) -> Result<SimulationOutcome, SessionError> {
        let mut sessions = self.lock_sessions();
        let cache = sessions
            .get_mut(&session_id)
            .ok_or(SessionError::UnknownSession(session_id))?;
        let outcome = run_simulation(request, cache, source);

        info!(
            session_id,
            seed = outcome.seed,
            seed_mode = outcome.seed_mode.as_str(),
            step_count = request.step_count(),
            endpoint = outcome.metrics.endpoint,
            "walk simulated"
        );
        Ok(outcome)
    }

    fn lock_sessions(&self) -> MutexGuard<'_, BTreeMap<u64, SeedCache>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn with_next_session_id_for_test(next_session_id: u64) -> Self {
        let state = Self::default();
        state
            .next_session_id
            .store(next_session_id, Ordering::Relaxed);
        state
    }
}
