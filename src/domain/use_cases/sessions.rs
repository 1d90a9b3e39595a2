use std::{sync::Arc, time::Duration};

use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

use crate::{
    errors::AppError,
    repositories::provider::ProviderRepository,
    use_cases::landing_view::{LandingView, ViewOptions},
};

pub struct Session<R>
where
    R: ProviderRepository + 'static,
{
    pub view: LandingView<R>,
    last_seen: Mutex<Instant>,
}

impl<R> Session<R>
where
    R: ProviderRepository + 'static,
{
    fn touch(&self) {
        *self.last_seen.lock() = Instant::now();
    }

    fn idle_for(&self) -> Duration {
        self.last_seen.lock().elapsed()
    }
}

/// Live landing views keyed by session id, at most `max_sessions` at a time.
pub struct SessionStore<R>
where
    R: ProviderRepository + 'static,
{
    repo: Arc<R>,
    options: ViewOptions,
    max_sessions: usize,
    sessions: DashMap<Uuid, Arc<Session<R>>>,
}

impl<R> SessionStore<R>
where
    R: ProviderRepository + 'static,
{
    pub fn new(repo: Arc<R>, options: ViewOptions, max_sessions: usize) -> Self {
        SessionStore {
            repo,
            options,
            max_sessions,
            sessions: DashMap::new(),
        }
    }

    /// Creates a view and loads its profession list before handing it out.
    pub async fn create(&self) -> Result<Arc<Session<R>>, AppError> {
        self.ensure_capacity()?;

        let view = LandingView::new(self.repo.clone(), self.options);
        view.initialize().await;

        // Other sessions may have been created while the professions loaded
        if let Err(e) = self.ensure_capacity() {
            view.teardown();
            return Err(e);
        }

        let session = Arc::new(Session {
            view,
            last_seen: Mutex::new(Instant::now()),
        });
        self.sessions.insert(session.view.id(), session.clone());
        tracing::info!(session_id = %session.view.id(), "Landing session created");

        Ok(session)
    }

    fn ensure_capacity(&self) -> Result<(), AppError> {
        if self.sessions.len() >= self.max_sessions {
            tracing::warn!(limit = self.max_sessions, "Session limit reached");
            return Err(AppError::Unavailable(
                "Too many active sessions, try again later".into(),
            ));
        }
        Ok(())
    }

    pub fn get(&self, id: &Uuid) -> Result<Arc<Session<R>>, AppError> {
        let session = self
            .sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound("Session not found".into()))?;
        session.touch();
        Ok(session)
    }

    pub fn remove(&self, id: &Uuid) -> Result<(), AppError> {
        let (_, session) = self
            .sessions
            .remove(id)
            .ok_or_else(|| AppError::NotFound("Session not found".into()))?;
        session.view.teardown();
        tracing::info!(session_id = %id, "Landing session closed");
        Ok(())
    }

    /// Tears down every session idle for longer than `idle`. Returns how many went.
    pub fn purge_idle(&self, idle: Duration) -> usize {
        let mut purged = 0;
        self.sessions.retain(|_, session| {
            if session.idle_for() > idle {
                session.view.teardown();
                purged += 1;
                false
            } else {
                true
            }
        });
        purged
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
