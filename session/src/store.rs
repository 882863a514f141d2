use hashbrown::HashMap;
use pexeso_core::Snapshot;

use crate::GameSession;

/// Keyed snapshot storage standing in for per-user session persistence.
///
/// Not synchronized: callers serialize access per key, one request at a time.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Snapshot>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the session stored under `key`, dealing and persisting a fresh
    /// one when none exists.
    pub fn open(&mut self, key: &str) -> GameSession {
        let session = match self.sessions.get(key) {
            Some(snapshot) => GameSession::restore(snapshot.clone()),
            None => {
                log::debug!("no session under {:?}, dealing a fresh board", key);
                GameSession::fresh_random()
            }
        };
        self.save(key, &session);
        session
    }

    pub fn save(&mut self, key: &str, session: &GameSession) {
        self.sessions.insert(key.to_owned(), session.snapshot());
    }

    /// Drop the stored game; the next [`SessionStore::open`] deals fresh.
    pub fn remove(&mut self, key: &str) -> bool {
        self.sessions.remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sessions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
