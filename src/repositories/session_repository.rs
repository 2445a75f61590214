use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizSession,
};

/// Shared handle to one user's session. Holding the lock for a whole
/// interaction serializes concurrent requests on that session.
pub type SessionHandle = Arc<Mutex<QuizSession>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: QuizSession) -> AppResult<SessionHandle>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<SessionHandle>>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
    async fn purge_expired(&self) -> AppResult<usize>;
    async fn count(&self) -> AppResult<usize>;
}

/// Process-local session store. Sessions whose `last_activity_at` is older
/// than `ttl` are treated as gone.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    ttl: Duration,
}

impl InMemorySessionRepository {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// A session locked by an in-flight request is live.
    fn is_expired(&self, handle: &SessionHandle, now: DateTime<Utc>) -> bool {
        match handle.try_lock() {
            Ok(session) => now - session.last_activity_at > self.ttl,
            Err(_) => false,
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: QuizSession) -> AppResult<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(AppError::InternalError(format!(
                "Session with id '{}' already exists",
                session.id
            )));
        }

        let id = session.id.clone();
        let handle = Arc::new(Mutex::new(session));
        sessions.insert(id, Arc::clone(&handle));
        Ok(handle)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<SessionHandle>> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        match sessions.get(id) {
            None => return Ok(None),
            Some(handle) if !self.is_expired(handle, now) => {
                return Ok(Some(Arc::clone(handle)));
            }
            Some(_) => {}
        }

        log::info!("Session {} expired", id);
        sessions.remove(id);
        Ok(None)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id).is_some())
    }

    async fn purge_expired(&self) -> AppResult<usize> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| !self.is_expired(handle, now));
        let purged = before - sessions.len();
        if purged > 0 {
            log::info!("Purged {} expired sessions", purged);
        }
        Ok(purged)
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.sessions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn created_session_can_be_found_and_shared() {
        let repository = InMemorySessionRepository::new(Duration::minutes(5));
        let created = repository.create(QuizSession::new("s-1")).await.unwrap();

        let found = repository.find_by_id("s-1").await.unwrap().unwrap();
        found.lock().await.start();

        assert_eq!(created.lock().await.current_axis_index, Some(0));
        assert_eq!(repository.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let repository = InMemorySessionRepository::new(Duration::minutes(5));
        repository.create(QuizSession::new("s-1")).await.unwrap();

        let result = repository.create(QuizSession::new("s-1")).await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let repository = InMemorySessionRepository::new(Duration::minutes(5));
        repository.create(QuizSession::new("s-1")).await.unwrap();

        assert!(repository.delete("s-1").await.unwrap());
        assert!(!repository.delete("s-1").await.unwrap());
        assert!(repository.find_by_id("s-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_sessions_are_not_returned() {
        let repository = InMemorySessionRepository::new(Duration::zero());
        repository.create(QuizSession::new("s-1")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        assert!(repository.find_by_id("s-1").await.unwrap().is_none());
        assert_eq!(repository.count().await.unwrap(), 0);
    }

    fn idle_for(id: &str, minutes: i64) -> QuizSession {
        let mut session = QuizSession::new(id);
        session.last_activity_at = Utc::now() - Duration::minutes(minutes);
        session
    }

    #[tokio::test]
    async fn purge_expired_drops_only_stale_sessions() {
        let repository = InMemorySessionRepository::new(Duration::minutes(5));
        repository.create(idle_for("stale", 10)).await.unwrap();
        repository.create(idle_for("fresh", 1)).await.unwrap();

        assert_eq!(repository.purge_expired().await.unwrap(), 1);
        assert!(repository.find_by_id("fresh").await.unwrap().is_some());
        assert!(repository.find_by_id("stale").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn activity_on_the_session_extends_its_lifetime() {
        let repository = InMemorySessionRepository::new(Duration::minutes(5));
        let handle = repository.create(idle_for("s-1", 10)).await.unwrap();

        handle.lock().await.touch();

        assert!(repository.find_by_id("s-1").await.unwrap().is_some());
        assert_eq!(repository.purge_expired().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn locked_sessions_are_never_purged() {
        let repository = InMemorySessionRepository::new(Duration::minutes(5));
        let handle = repository.create(idle_for("s-1", 10)).await.unwrap();

        let guard = handle.lock().await;
        assert_eq!(repository.purge_expired().await.unwrap(), 0);
        drop(guard);

        assert_eq!(repository.purge_expired().await.unwrap(), 1);
    }
}
