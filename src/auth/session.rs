use actix_web::cookie::{Cookie, SameSite};
use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

use crate::config::Config;
use crate::model::session::Session;

pub const SESSION_COOKIE: &str = "portal_session";

/// Session id + state, as resolved for one request.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: String,
    pub session: Session,
    /// True when the browser did not present a known session id
    pub fresh: bool,
}

impl SessionHandle {
    /// Cookie to hand back when the session was just created.
    pub fn cookie(&self) -> Option<Cookie<'static>> {
        if !self.fresh {
            return None;
        }

        Some(
            Cookie::build(SESSION_COOKIE, self.id.clone())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish(),
        )
    }
}

/// In-memory sessions keyed by cookie id. Idle sessions expire; all are
/// lost on restart.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<String, Session>,
}

impl SessionStore {
    pub fn new(capacity: u64, idle: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_idle(idle)
                .build(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.session_capacity,
            Duration::from_secs(config.session_idle_secs),
        )
    }

    /// Resolve the caller's session, starting a new one for unknown ids.
    pub async fn load(&self, id: Option<&str>) -> SessionHandle {
        if let Some(id) = id {
            if let Some(session) = self.cache.get(id).await {
                return SessionHandle {
                    id: id.to_string(),
                    session,
                    fresh: false,
                };
            }
        }

        let id = Uuid::new_v4().to_string();
        log::debug!("Starting new portal session");

        SessionHandle {
            id,
            session: Session::default(),
            fresh: true,
        }
    }

    /// Look up without creating.
    pub async fn get(&self, id: &str) -> Option<Session> {
        self.cache.get(id).await
    }

    pub async fn save(&self, handle: &SessionHandle) {
        self.cache
            .insert(handle.id.clone(), handle.session.clone())
            .await;
    }

    #[cfg(test)]
    pub async fn stored(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
