//! Session store
//!
//! Owns everything about who is signed in: the current token/user pair,
//! the startup rehydration flag, and the one in-flight service call.
//! Service calls run on worker threads and report back over a channel;
//! the UI thread drains that channel once per frame via [`SessionStore::poll`].
//!
//! Starting a new call replaces the previous receiver, so a superseded
//! worker's result is never observed - last call wins.

use std::sync::mpsc::{channel, Receiver, TryRecvError};

use crate::egui_app::api;
use crate::egui_app::config::Config;
use crate::egui_app::token_file::{self, StoredToken};
use crate::shared::auth::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::shared::error::AuthError;

/// Token and the account it belongs to. Always replaced as a unit so no
/// frame ever sees a token without its user or vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

/// Completion of a service call, delivered through [`SessionStore::poll`].
#[derive(Debug)]
pub enum SessionEvent {
    LoginFinished(Result<Session, AuthError>),
    RegisterFinished(Result<(), AuthError>),
    Rehydrated(Result<Session, AuthError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingCall {
    Login,
    Register,
    Rehydrate,
}

impl PendingCall {
    /// Failure event stood in for a worker that died without reporting.
    fn interrupted(self) -> SessionEvent {
        let err = AuthError::network("the request was interrupted");
        match self {
            PendingCall::Login => SessionEvent::LoginFinished(Err(err)),
            PendingCall::Register => SessionEvent::RegisterFinished(Err(err)),
            PendingCall::Rehydrate => SessionEvent::Rehydrated(Err(err)),
        }
    }
}

struct Pending {
    call: PendingCall,
    rx: Receiver<SessionEvent>,
}

/// Authentication state shared across egui views.
pub struct SessionStore {
    config: Config,
    session: Option<Session>,
    is_loading: bool,
    pending: Option<Pending>,
}

impl SessionStore {
    /// A store that has not yet looked for a saved session. `is_loading`
    /// stays true until [`SessionStore::begin_rehydration`] resolves it.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: None,
            is_loading: true,
            pending: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// True only while the saved session is being restored at startup.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Look for a saved token and verify it against the service. With no
    /// usable token on disk this resolves immediately; otherwise a worker
    /// fetches the account and `is_loading` stays set until it reports.
    pub fn begin_rehydration(&mut self) {
        let stored = match token_file::load(self.config.session_file()) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!("[AUTH] Ignoring unreadable session file: {}", err);
                None
            }
        };

        let Some(stored) = stored else {
            tracing::debug!("[AUTH] No saved session");
            self.is_loading = false;
            return;
        };

        tracing::info!("[AUTH] Restoring session saved at {}", stored.saved_at);

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::me(&config, &stored.token).map(|user| Session {
                token: stored.token,
                user,
            });
            let _ = tx.send(SessionEvent::Rehydrated(result));
        });

        self.pending = Some(Pending {
            call: PendingCall::Rehydrate,
            rx,
        });
    }

    /// A user call that replaces an in-flight restore also ends the
    /// loading phase; the abandoned restore can never resolve it.
    fn abandon_rehydration(&mut self) {
        if matches!(&self.pending, Some(p) if p.call == PendingCall::Rehydrate) {
            tracing::debug!("[AUTH] Session restore superseded");
            self.is_loading = false;
        }
    }

    /// Dispatch a login call. Any call already in flight is superseded.
    pub fn login(&mut self, request: LoginRequest) {
        tracing::info!("[AUTH] Login requested for {}", request.email);
        self.abandon_rehydration();

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::login(&config, request).map(Session::from);
            let _ = tx.send(SessionEvent::LoginFinished(result));
        });

        self.pending = Some(Pending {
            call: PendingCall::Login,
            rx,
        });
    }

    /// Dispatch a registration call. Any call already in flight is superseded.
    pub fn register(&mut self, request: RegisterRequest) {
        tracing::info!("[AUTH] Registration requested for {}", request.email);
        self.abandon_rehydration();

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::register(&config, request);
            let _ = tx.send(SessionEvent::RegisterFinished(result));
        });

        self.pending = Some(Pending {
            call: PendingCall::Register,
            rx,
        });
    }

    /// Drain the in-flight call, if it has finished. Called once per frame.
    ///
    /// A worker that died without sending is reported as a failed call of
    /// the same kind, so callers waiting on a completion always get one.
    pub fn poll(&mut self) -> Option<SessionEvent> {
        let pending = self.pending.as_ref()?;

        let event = match pending.rx.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                tracing::error!("[AUTH] Worker exited without reporting a result");
                pending.call.interrupted()
            }
        };

        self.pending = None;
        self.apply(&event);
        Some(event)
    }

    /// Fold a completion into the store.
    fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::LoginFinished(Ok(session)) => {
                tracing::info!("[AUTH] Logged in as {}", session.user.email);
                self.persist_token(&session.token);
                self.session = Some(session.clone());
            }
            SessionEvent::LoginFinished(Err(err)) => {
                tracing::warn!("[AUTH] Login failed: {}", err);
            }
            SessionEvent::RegisterFinished(Ok(())) => {
                // Registration never signs the account in; the user logs
                // in with the credentials they just chose.
                tracing::info!("[AUTH] Account created");
            }
            SessionEvent::RegisterFinished(Err(err)) => {
                tracing::warn!("[AUTH] Registration failed: {}", err);
            }
            SessionEvent::Rehydrated(Ok(session)) => {
                tracing::info!("[AUTH] Session restored for {}", session.user.email);
                self.session = Some(session.clone());
                self.is_loading = false;
            }
            SessionEvent::Rehydrated(Err(err)) => {
                self.is_loading = false;
                if err.is_rejection() {
                    // The service no longer honors the token; forget it so
                    // the next launch skips the round trip.
                    tracing::info!("[AUTH] Saved token rejected, removing it");
                    self.discard_token();
                } else {
                    tracing::warn!("[AUTH] Could not restore session: {}", err);
                }
            }
        }
    }

    /// Forget the session and the saved token. Any in-flight call is
    /// dropped with it.
    pub fn logout(&mut self) {
        self.abandon_rehydration();
        self.session = None;
        self.pending = None;
        self.discard_token();
        tracing::info!("[AUTH] Logged out");
    }

    fn persist_token(&self, token: &str) {
        let stored = StoredToken::new(token);
        if let Err(err) = token_file::save(self.config.session_file(), &stored) {
            tracing::warn!("[AUTH] Could not persist session: {}", err);
        }
    }

    fn discard_token(&self) {
        if let Err(err) = token_file::clear(self.config.session_file()) {
            tracing::warn!("[AUTH] Could not remove saved session: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::auth::Role;
    use uuid::Uuid;

    fn test_store() -> (SessionStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_server_url("http://127.0.0.1:9")
            .with_session_file(dir.path().join("session.toml"));
        (SessionStore::new(config), dir)
    }

    fn test_session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user: User {
                id: Uuid::nil(),
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                role: Role::User,
            },
        }
    }

    #[test]
    fn test_login_success_sets_session_and_saves_token() {
        let (mut store, _dir) = test_store();

        store.apply(&SessionEvent::LoginFinished(Ok(test_session("tok-1"))));

        assert!(store.is_authenticated());
        assert_eq!(store.session().unwrap().token, "tok-1");

        let stored = token_file::load(store.config.session_file()).unwrap().unwrap();
        assert_eq!(stored.token, "tok-1");
    }

    #[test]
    fn test_login_failure_leaves_no_session() {
        let (mut store, _dir) = test_store();

        store.apply(&SessionEvent::LoginFinished(Err(AuthError::rejected(
            401,
            "Invalid credentials",
        ))));

        assert!(!store.is_authenticated());
        assert_eq!(token_file::load(store.config.session_file()).unwrap(), None);
    }

    #[test]
    fn test_register_success_does_not_sign_in() {
        let (mut store, _dir) = test_store();

        store.apply(&SessionEvent::RegisterFinished(Ok(())));

        assert!(!store.is_authenticated());
        assert_eq!(token_file::load(store.config.session_file()).unwrap(), None);
    }

    #[test]
    fn test_rehydration_success_restores_session() {
        let (mut store, _dir) = test_store();
        assert!(store.is_loading());

        store.apply(&SessionEvent::Rehydrated(Ok(test_session("tok-old"))));

        assert!(!store.is_loading());
        assert_eq!(store.session().unwrap().token, "tok-old");
    }

    #[test]
    fn test_rehydration_rejection_removes_saved_token() {
        let (mut store, _dir) = test_store();
        token_file::save(store.config.session_file(), &StoredToken::new("stale")).unwrap();

        store.apply(&SessionEvent::Rehydrated(Err(AuthError::rejected(
            401,
            "Unauthenticated.",
        ))));

        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
        assert_eq!(token_file::load(store.config.session_file()).unwrap(), None);
    }

    #[test]
    fn test_rehydration_network_error_keeps_saved_token() {
        let (mut store, _dir) = test_store();
        token_file::save(store.config.session_file(), &StoredToken::new("maybe-good")).unwrap();

        store.apply(&SessionEvent::Rehydrated(Err(AuthError::network(
            "connection refused",
        ))));

        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
        // Token kept so the next launch can try again.
        assert!(token_file::load(store.config.session_file()).unwrap().is_some());
    }

    #[test]
    fn test_begin_rehydration_without_saved_token_resolves_immediately() {
        let (mut store, _dir) = test_store();

        store.begin_rehydration();

        assert!(!store.is_loading());
        assert!(store.pending.is_none());
    }

    #[test]
    fn test_begin_rehydration_with_malformed_file_resolves_immediately() {
        let (mut store, _dir) = test_store();
        std::fs::create_dir_all(store.config.session_file().parent().unwrap()).unwrap();
        std::fs::write(store.config.session_file(), "not = [valid").unwrap();

        store.begin_rehydration();

        assert!(!store.is_loading());
        assert!(store.pending.is_none());
    }

    #[test]
    fn test_poll_without_pending_call_is_none() {
        let (mut store, _dir) = test_store();
        assert!(store.poll().is_none());
    }

    #[test]
    fn test_poll_synthesizes_failure_when_worker_dies() {
        let (mut store, _dir) = test_store();

        let (tx, rx) = channel::<SessionEvent>();
        drop(tx);
        store.pending = Some(Pending {
            call: PendingCall::Login,
            rx,
        });

        match store.poll() {
            Some(SessionEvent::LoginFinished(Err(AuthError::Network { .. }))) => {}
            other => panic!("expected synthesized login failure, got {:?}", other),
        }
        assert!(store.pending.is_none());
    }

    #[test]
    fn test_superseded_call_result_is_never_observed() {
        let (mut store, _dir) = test_store();

        let (old_tx, old_rx) = channel::<SessionEvent>();
        store.pending = Some(Pending {
            call: PendingCall::Login,
            rx: old_rx,
        });

        // A second dispatch replaces the receiver.
        let (_new_tx, new_rx) = channel::<SessionEvent>();
        store.pending = Some(Pending {
            call: PendingCall::Login,
            rx: new_rx,
        });

        // The old worker reporting now goes nowhere.
        assert!(old_tx
            .send(SessionEvent::LoginFinished(Ok(test_session("stale"))))
            .is_err());
        assert!(store.poll().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_during_rehydration_ends_the_loading_phase() {
        let (mut store, _dir) = test_store();
        let (_tx, rx) = channel::<SessionEvent>();
        store.pending = Some(Pending {
            call: PendingCall::Rehydrate,
            rx,
        });
        assert!(store.is_loading());

        store.login(LoginRequest {
            email: "jane@x.com".to_string(),
            password: "longpass1".to_string(),
        });

        // The restore can no longer report, so the flag must not wait
        // for it.
        assert!(!store.is_loading());
        assert_eq!(
            store.pending.as_ref().map(|p| p.call),
            Some(PendingCall::Login)
        );
    }

    #[test]
    fn test_logout_during_rehydration_ends_the_loading_phase() {
        let (mut store, _dir) = test_store();
        let (_tx, rx) = channel::<SessionEvent>();
        store.pending = Some(Pending {
            call: PendingCall::Rehydrate,
            rx,
        });

        store.logout();

        assert!(!store.is_loading());
        assert!(store.pending.is_none());
    }

    #[test]
    fn test_logout_clears_session_and_saved_token() {
        let (mut store, _dir) = test_store();
        store.apply(&SessionEvent::LoginFinished(Ok(test_session("tok-1"))));
        assert!(store.is_authenticated());

        store.logout();

        assert!(!store.is_authenticated());
        assert_eq!(token_file::load(store.config.session_file()).unwrap(), None);
    }
}
