//! Authentication session manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthSession` is the single writer of `AuthState` and of the canonical
//! token copy. Pages get a clone through Leptos context and observe changes
//! through `subscribe`; nothing else mutates the session.
//!
//! LIFECYCLE
//! =========
//! `new` peeks at the token slot: a stored token starts the session loading,
//! otherwise it starts anonymous. `initialize` runs once per load, discards a
//! locally expired token, applies the identity cached in the token claims and
//! then verifies against `/auth/me`:
//! - accepted: authenticated with the returned identity;
//! - 401 or 403: token cleared, anonymous;
//! - transient failure: only the loading flag drops.
//!
//! ORDERING
//! ========
//! Login, logout and forced sign-outs bump a generation counter. A
//! verification result is applied only if the generation it started under is
//! still current, so a slow `/auth/me` can never resurrect a session the user
//! has already left or replaced.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use futures::lock::Mutex as AsyncMutex;
use parking_lot::Mutex;

use super::auth::AuthState;
use crate::error::{LoginError, RegisterError, VerifyError};
use crate::net::session_client::{HttpSessionClient, SessionApi};
use crate::net::types::{LoginResponse, RegisterRequest, UserIdentity};
use crate::util::token;
use crate::util::token_store::{BrowserStorage, StorageBackend, TokenStore};

/// Callback run after every committed session transition.
pub type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

/// Handle returned by [`AuthSession::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The session as wired in the browser.
pub type BrowserSession = AuthSession<HttpSessionClient, BrowserStorage>;

/// Cheaply cloneable handle to one shared session.
pub struct AuthSession<A, B> {
    shared: Arc<Shared<A, B>>,
}

impl<A, B> Clone for AuthSession<A, B> {
    fn clone(&self) -> Self {
        Self { shared: Arc::clone(&self.shared) }
    }
}

struct Shared<A, B> {
    api: A,
    store: TokenStore<B>,
    core: Mutex<Core>,
    /// Holds `true` once initialization has reached a terminal state.
    init_gate: AsyncMutex<bool>,
    refresh_gate: AsyncMutex<()>,
}

struct Core {
    state: AuthState,
    generation: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_listener: u64,
}

impl<A: SessionApi, B: StorageBackend> AuthSession<A, B> {
    pub fn new(api: A, store: TokenStore<B>) -> Self {
        let state = match store.get() {
            Some(token) => AuthState::pending(token),
            None => AuthState::anonymous(),
        };
        let core = Core { state, generation: 0, listeners: Vec::new(), next_listener: 0 };
        Self {
            shared: Arc::new(Shared {
                api,
                store,
                core: Mutex::new(core),
                init_gate: AsyncMutex::new(false),
                refresh_gate: AsyncMutex::new(()),
            }),
        }
    }

    /// Current session snapshot.
    pub fn state(&self) -> AuthState {
        self.shared.core.lock().state.clone()
    }

    pub fn api(&self) -> &A {
        &self.shared.api
    }

    pub fn token_store(&self) -> &TokenStore<B> {
        &self.shared.store
    }

    /// Register `listener` to run after every transition. It is called outside
    /// the session lock and may read `state()`.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + Send + Sync + 'static) -> SubscriptionId {
        let mut core = self.shared.core.lock();
        let id = SubscriptionId(core.next_listener);
        core.next_listener += 1;
        core.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut core = self.shared.core.lock();
        let before = core.listeners.len();
        core.listeners.retain(|(existing, _)| *existing != id);
        core.listeners.len() != before
    }

    /// Resolve the stored token into a session. Runs once; concurrent and
    /// later callers wait for the first run and then return.
    pub async fn initialize(&self) {
        let mut done = self.shared.init_gate.lock().await;
        if *done {
            return;
        }
        self.run_initialize().await;
        *done = true;
    }

    async fn run_initialize(&self) {
        let Some(token) = self.shared.store.get() else {
            log::debug!("session init: no stored token");
            self.commit(|core| {
                core.state = AuthState::anonymous();
                true
            });
            return;
        };

        if token::is_expired(&token) {
            log::info!("session init: stored token expired or unreadable; clearing");
            self.sign_out();
            return;
        }

        let cached = token::decode_claims(&token).and_then(|claims| claims.cached_identity());
        let mut generation = 0;
        self.commit(|core| {
            core.state = AuthState {
                is_authenticated: cached.is_some(),
                user: cached,
                token: Some(token.clone()),
                is_loading: true,
            };
            generation = core.generation;
            true
        });

        let outcome = self.shared.api.verify(&token).await;
        self.settle_verify(generation, &token, &outcome);
    }

    /// Sign in with credentials. On failure the session is left untouched and
    /// the error is returned for the caller to display.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` for a rejected login and `Network` for any
    /// transport failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserIdentity, LoginError> {
        let LoginResponse { token, user } = self
            .shared
            .api
            .login(email, password)
            .await
            .inspect_err(|e| log::warn!("login failed: {e}"))?;

        self.shared.store.set(&token);
        let signed_in = user.clone();
        self.commit(|core| {
            core.generation += 1;
            core.state = AuthState::authenticated(token, signed_in);
            true
        });
        log::info!("signed in as {}", user.email);
        Ok(user)
    }

    /// Create an account. The session is not changed; callers sign in after.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a rejected registration and `Network` for any
    /// transport failure.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), RegisterError> {
        self.shared
            .api
            .register(request)
            .await
            .inspect_err(|e| log::warn!("registration failed: {e}"))
    }

    /// Sign out locally. Synchronous; no request is made.
    pub fn logout(&self) {
        log::info!("signed out");
        self.sign_out();
    }

    /// Re-verify the stored token with the same policy as initialization.
    ///
    /// Waits for initialization first and runs one refresh at a time. A
    /// result that arrives after a login or logout is returned but not
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` or `Forbidden` after signing out when the token
    /// is missing, locally expired or rejected, and `Network` (with the
    /// session kept) for transient failures.
    pub async fn refresh(&self) -> Result<UserIdentity, VerifyError> {
        self.initialize().await;
        let _serial = self.shared.refresh_gate.lock().await;

        let Some(token) = self.shared.store.get().filter(|t| !token::is_expired(t)) else {
            log::info!("session refresh: no usable stored token; signing out");
            self.sign_out();
            return Err(VerifyError::Unauthorized);
        };

        // No loading flag here: the page that asked stays mounted while the
        // current session remains valid for the guard.
        let generation = self.shared.core.lock().generation;
        let outcome = self.shared.api.verify(&token).await;
        self.settle_verify(generation, &token, &outcome);
        outcome
    }

    /// Apply a verification outcome if no login/logout happened since it
    /// started. Returns whether it was applied.
    fn settle_verify(&self, generation: u64, token: &str, outcome: &Result<UserIdentity, VerifyError>) -> bool {
        let mut applied = false;
        self.commit(|core| {
            if core.generation != generation {
                return false;
            }
            applied = true;
            match outcome {
                Ok(user) => {
                    core.state = AuthState::authenticated(token.to_owned(), user.clone());
                }
                Err(e @ (VerifyError::Unauthorized | VerifyError::Forbidden)) => {
                    log::info!("session rejected by server ({e}); signing out");
                    self.shared.store.clear();
                    core.generation += 1;
                    core.state = AuthState::anonymous();
                }
                Err(e @ VerifyError::Network(_)) => {
                    log::warn!("{e}; keeping current session");
                    core.state.is_loading = false;
                }
            }
            true
        });
        if !applied {
            log::debug!("discarding verification started under generation {generation}");
        }
        applied
    }

    fn sign_out(&self) {
        self.shared.store.clear();
        self.commit(|core| {
            core.generation += 1;
            core.state = AuthState::anonymous();
            true
        });
    }

    /// Mutate the core under the lock; if `change` reports a change, notify
    /// listeners with the new snapshot after the lock is released.
    fn commit(&self, change: impl FnOnce(&mut Core) -> bool) {
        let (snapshot, listeners) = {
            let mut core = self.shared.core.lock();
            if !change(&mut core) {
                return;
            }
            log::debug!("session -> {:?} (generation {})", core.state.phase(), core.generation);
            let listeners: Vec<Listener> = core.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (core.state.clone(), listeners)
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
