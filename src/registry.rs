//! In-memory registry of live game sessions, keyed by generated id.
//!
//! State is process-lifetime only. Concurrent requests against the same id
//! serialize on the session's own mutex; different sessions never contend
//! beyond the brief registry map access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use log::debug;
use uuid::Uuid;

use crate::error::GameError;
use crate::game::GameSession;

/// Opaque session key handed out on game creation.
pub type SessionId = Uuid;

type Slot = Arc<Mutex<GameSession>>;

/// Registry of sessions: empty on init, insert on new game, read/update on
/// request, explicit removal for eviction.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Slot>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a session under a fresh id.
    pub fn insert(&self, session: GameSession) -> SessionId {
        let id = Uuid::new_v4();
        let mut map = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        map.insert(id, Arc::new(Mutex::new(session)));
        debug!("registered session {} ({} total)", id, map.len());
        id
    }

    fn slot(&self, id: SessionId) -> Result<Slot, GameError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(GameError::NotFound)
    }

    /// Run `f` on the session behind `id`, holding its lock for the whole
    /// call. The registry map lock is released before the session lock is
    /// taken, so operations on different sessions run independently.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let slot = self.slot(id)?;
        let mut session = slot.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }

    /// Drop the session behind `id`. Returns whether it existed.
    pub fn remove(&self, id: SessionId) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some();
        if removed {
            debug!("evicted session {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
