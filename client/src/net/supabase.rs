//! REST client for the hosted Supabase project (GoTrue auth + PostgREST tables).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against the
//! configured request deadline, with the session persisted in `localStorage`.
//! Server-side (SSR): every call returns [`BackendError::Unavailable`] since the
//! session only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are returned as [`BackendError`];
//! callers decide how to degrade. The only recovery done here is a single
//! token refresh when the backend rejects an expired access token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use std::cell::OnceCell;
use std::rc::Rc;

use super::backend::{ProfileRepository, SessionListener, SessionStore};
use super::error::BackendError;
use super::types::{AuthSession, ProfileRow, SessionEvent, SessionUser};
use crate::config::{BackendConfig, ConfigError};
use crate::util::storage;
use crate::util::subscription::{Broadcaster, Subscription};

#[cfg(any(test, feature = "hydrate"))]
const PROFILE_COLUMNS: &str = "username,role,avatar_url";

/// `localStorage` key for the session, `sb-<project-ref>-auth-token`.
///
/// The project ref is the first label of the backend host.
#[must_use]
pub fn session_storage_key(base_url: &str) -> String {
    let rest = base_url.split_once("://").map_or(base_url, |(_, rest)| rest);
    let host = rest.split(['/', ':']).next().unwrap_or_default();
    let project = host.split('.').next().unwrap_or_default();
    format!("sb-{project}-auth-token")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base_url: &str, grant_type: &str) -> String {
    format!("{base_url}/auth/v1/token?grant_type={grant_type}")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/v1/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn profiles_endpoint(base_url: &str) -> String {
    format!("{base_url}/rest/v1/profiles")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_query(user_id: &str) -> [(&'static str, String); 2] {
    [("select", PROFILE_COLUMNS.to_owned()), ("id", format!("eq.{user_id}"))]
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Logout statuses after which the local session is gone either way.
#[cfg(any(test, feature = "hydrate"))]
fn sign_out_clears_session(status: u16) -> bool {
    (200..300).contains(&status) || status == 401 || status == 404
}

/// Human-readable message from a GoTrue/PostgREST error body.
///
/// Takes the first of `msg`, `message`, `error_description`, `error` present in
/// a JSON body; otherwise the trimmed raw body.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(serde_json::Value::String(text)) = fields.get(key) {
                return text.clone();
            }
        }
    }
    body.trim().to_owned()
}

/// Concrete session store and profile repository for the hosted backend.
pub struct SupabaseClient {
    config: BackendConfig,
    storage_key: String,
    events: Broadcaster<SessionEvent>,
}

impl SupabaseClient {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        let storage_key = session_storage_key(&config.url);
        Self { config, storage_key, events: Broadcaster::new() }
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Session persisted by a previous sign-in, if any.
    #[must_use]
    pub fn stored_session(&self) -> Option<AuthSession> {
        storage::load_json(&self.storage_key)
    }

    /// Sign in with email + password, persist the session and announce it.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, times out, or the credentials
    /// are rejected.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let request = gloo_net::http::Request::post(&token_endpoint(&self.config.url, "password"))
                .header("apikey", &self.config.anon_key)
                .json(&payload)
                .map_err(|e| BackendError::Network(e.to_string()))?;
            let resp = self.execute(request.send()).await?;
            let session: AuthSession = read_json(resp).await?;
            self.store_session(&session);
            log::info!("signed in as {}", session.user.id);
            self.events.emit(&SessionEvent::signed_in(session.user.clone()));
            Ok(session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(BackendError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
impl SupabaseClient {
    fn store_session(&self, session: &AuthSession) {
        storage::save_json(&self.storage_key, session);
    }

    fn clear_session(&self) {
        storage::remove(&self.storage_key);
    }

    async fn execute<F>(&self, request: F) -> Result<gloo_net::http::Response, BackendError>
    where
        F: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
    {
        crate::util::timeout::with_timeout(request, self.config.request_timeout_ms)
            .await?
            .map_err(|e| BackendError::Network(e.to_string()))
    }

    async fn fetch_user(&self, access_token: &str) -> Result<SessionUser, BackendError> {
        let request = gloo_net::http::Request::get(&user_endpoint(&self.config.url))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &bearer(access_token));
        let resp = self.execute(request.send()).await?;
        read_json(resp).await
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, BackendError> {
        let payload = serde_json::json!({ "refresh_token": refresh_token });
        let request = gloo_net::http::Request::post(&token_endpoint(&self.config.url, "refresh_token"))
            .header("apikey", &self.config.anon_key)
            .json(&payload)
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let resp = self.execute(request.send()).await?;
        read_json(resp).await
    }

    /// One refresh attempt after the access token was rejected.
    async fn recover_session(&self, stale: &AuthSession) -> Result<Option<SessionUser>, BackendError> {
        match self.refresh_session(&stale.refresh_token).await {
            Ok(fresh) => {
                self.store_session(&fresh);
                self.events.emit(&SessionEvent::token_refreshed(fresh.user.clone()));
                Ok(Some(fresh.user))
            }
            Err(e @ BackendError::Status { .. }) => {
                log::warn!("session refresh rejected, clearing local session: {e}");
                self.clear_session();
                self.events.emit(&SessionEvent::signed_out());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, BackendError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| BackendError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> BackendError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    BackendError::Status { status, message: error_message(&body) }
}

impl SessionStore for SupabaseClient {
    async fn current_user(&self) -> Result<Option<SessionUser>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = self.stored_session() else {
                return Ok(None);
            };
            match self.fetch_user(&session.access_token).await {
                Ok(user) => Ok(Some(user)),
                Err(e) if e.is_unauthorized() => self.recover_session(&session).await,
                Err(e) => Err(e),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = self.stored_session() else {
                self.events.emit(&SessionEvent::signed_out());
                return Ok(());
            };
            let request = gloo_net::http::Request::post(&logout_endpoint(&self.config.url))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &bearer(&session.access_token));
            let resp = self.execute(request.send()).await?;
            if !sign_out_clears_session(resp.status()) {
                return Err(status_error(resp).await);
            }
            self.clear_session();
            self.events.emit(&SessionEvent::signed_out());
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Unavailable)
        }
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        self.events.subscribe(listener)
    }
}

impl ProfileRepository for SupabaseClient {
    async fn profile(&self, user_id: &str) -> Result<Option<ProfileRow>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let token = self
                .stored_session()
                .map_or_else(|| self.config.anon_key.clone(), |s| s.access_token);
            let request = gloo_net::http::Request::get(&profiles_endpoint(&self.config.url))
                .query(profile_query(user_id))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &bearer(&token));
            let resp = self.execute(request.send()).await?;
            let rows: Vec<ProfileRow> = read_json(resp).await?;
            Ok(rows.into_iter().next())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(BackendError::Unavailable)
        }
    }
}

thread_local! {
    static SHARED: OnceCell<Rc<SupabaseClient>> = const { OnceCell::new() };
}

/// The page-wide client, built from the compiled-in config on first use.
///
/// # Errors
///
/// Returns [`ConfigError`] when the bundle was built without backend settings.
pub fn shared_client() -> Result<Rc<SupabaseClient>, ConfigError> {
    SHARED.with(|cell| {
        if let Some(client) = cell.get() {
            return Ok(client.clone());
        }
        let client = Rc::new(SupabaseClient::new(BackendConfig::from_build_env()?));
        let _ = cell.set(client.clone());
        Ok(client)
    })
}
