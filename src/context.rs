//! Application Context
//!
//! Session token shared via the Leptos Context API, and the state the
//! genres page attaches to a route change.

use leptos::prelude::*;
use leptos_router::location::State;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::TokenPair;

/// Access token for the admin endpoints, provided via context
#[derive(Clone, Copy)]
pub struct AuthState {
    token: RwSignal<Option<String>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn set_token(&self, token: String) {
        self.token.set(Some(token));
    }

    pub fn clear(&self) {
        self.token.set(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the auth state from context
pub fn use_auth() -> AuthState {
    expect_context::<AuthState>()
}

/// What a `/refresh` answer does to the session
#[derive(Debug, PartialEq)]
pub enum SessionChange {
    Set(String),
    Clear,
    Keep,
}

pub fn session_after_refresh(result: Result<Option<TokenPair>, ApiError>) -> SessionChange {
    match result {
        Ok(Some(pair)) => SessionChange::Set(pair.access_token),
        // No refresh cookie; nothing to restore
        Ok(None) => SessionChange::Keep,
        Err(ApiError::Unauthorized) | Err(ApiError::Application { .. }) => SessionChange::Clear,
        Err(e) => {
            log::warn!("token refresh failed: {}", e);
            SessionChange::Keep
        }
    }
}

impl AuthState {
    pub fn apply(&self, change: SessionChange) {
        match change {
            SessionChange::Set(token) => self.set_token(token),
            SessionChange::Clear => self.clear(),
            SessionChange::Keep => {}
        }
    }
}

/// History state of a `/genres/:id` entry, as `{ genreName }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreNavState {
    #[serde(rename = "genreName")]
    pub genre_name: String,
}

impl GenreNavState {
    pub fn new(genre_name: impl Into<String>) -> Self {
        Self {
            genre_name: genre_name.into(),
        }
    }

    /// Router state to pass with the navigation
    pub fn to_state(&self) -> State {
        State::new(serde_wasm_bindgen::to_value(self).ok())
    }

    /// Read back from the current history entry; None after a hard reload
    pub fn from_state(state: &State) -> Option<Self> {
        serde_wasm_bindgen::from_value(state.to_js_value()).ok()
    }
}
