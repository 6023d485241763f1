//! Authentication state for the views.
//!
//! The core `SessionGuard` owns the session; this module mirrors its status
//! into a signal and connects it to localStorage and other tabs. The router
//! only sees the injected status signal.

use crate::web::{BrowserTokenStore, FetchHttpClient, on_storage_change};
use leptos::prelude::*;
use msgdesk::shared::LoginRequest;
use msgdesk::{ApiConfig, ApiResult, AppRoute, AuthStatus, MessageApi, SessionGuard, sign_in};
use std::sync::Arc;

/// The API client as the views use it.
pub type Api = MessageApi<FetchHttpClient>;

/// Shared through context; cheap to copy.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Session status (read-only)
    pub status: ReadSignal<AuthStatus>,
    set_status: WriteSignal<AuthStatus>,
    guard: StoredValue<Arc<SessionGuard>>,
}

impl AuthContext {
    pub fn new(config: &ApiConfig) -> Self {
        let guard = SessionGuard::new(Arc::new(BrowserTokenStore), config.token_key.clone());
        let (status, set_status) = signal(guard.status());
        Self {
            status,
            set_status,
            guard: StoredValue::new(Arc::new(guard)),
        }
    }

    /// Status signal for injection into the router.
    pub fn status_signal(&self) -> Signal<AuthStatus> {
        self.status.into()
    }

    pub fn guard(&self) -> Arc<SessionGuard> {
        self.guard.get_value()
    }

    pub fn token(&self) -> Option<String> {
        self.guard.with_value(|g| g.token())
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// API client carrying the current bearer token.
pub fn use_api() -> Api {
    let config = use_context::<ApiConfig>().expect("ApiConfig should be provided");
    MessageApi::new(config, FetchHttpClient).with_bearer(use_auth().token())
}

/// Resolve the stored session and keep the signal in step with it, including
/// logins and logouts performed in other tabs.
pub fn init_auth(ctx: &AuthContext) {
    let set_status = ctx.set_status;
    let guard = ctx.guard();

    guard.subscribe(move |status| set_status.set(status));

    let watched = guard.clone();
    on_storage_change(move |key| {
        watched.handle_storage_change(key.as_deref());
    });

    guard.check();
}

/// Exchange credentials for a token. On success the session is stored and
/// the returned route is where the user should go next.
pub async fn login(ctx: &AuthContext, api: &Api, credentials: &LoginRequest) -> ApiResult<AppRoute> {
    let guard = ctx.guard();
    sign_in(api, &guard, credentials).await
}

/// Drop the session. The router's auth watcher handles the redirect.
pub fn logout(ctx: &AuthContext) {
    ctx.guard().clear_token();
}
