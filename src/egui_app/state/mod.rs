use std::time::Instant;

use crate::egui_app::config::Config;
use crate::egui_app::form::{AuthForm, Submission};
use crate::egui_app::notify::Toasts;
use crate::egui_app::redirect::RedirectGuard;
use crate::egui_app::session::{SessionEvent, SessionStore};
use crate::egui_app::types::AppView;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub form: AuthForm,
    pub redirect: RedirectGuard,
    pub toasts: Toasts,
    pub current_view: AppView,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Build the state around an explicit configuration and start looking
    /// for a saved session right away.
    pub fn with_config(config: Config) -> Self {
        tracing::debug!("[STATE] App state initialized");

        let mut session = SessionStore::new(config.clone());
        session.begin_rehydration();

        Self {
            config,
            session,
            form: AuthForm::new(),
            redirect: RedirectGuard::new(),
            toasts: Toasts::new(),
            current_view: AppView::Auth,
        }
    }

    /// Per-frame upkeep: drain the session store, let the form and the
    /// toast queue react, and follow the redirect guard while the auth
    /// screen is showing.
    pub fn tick(&mut self) {
        if let Some(event) = self.session.poll() {
            self.form.handle_event(&event);
            match &event {
                SessionEvent::LoginFinished(Ok(_)) => {
                    self.toasts.success("Logged in successfully!");
                }
                SessionEvent::LoginFinished(Err(err)) => {
                    self.toasts.error(err.to_string());
                }
                SessionEvent::RegisterFinished(Ok(())) => {
                    self.toasts.success("Registered successfully! Please login.");
                }
                SessionEvent::RegisterFinished(Err(err)) => {
                    self.toasts.error(err.to_string());
                }
                // Restoring a session is silent; failures are only logged.
                SessionEvent::Rehydrated(_) => {}
            }
        }

        if self.current_view == AppView::Auth {
            if let Some(destination) = self.redirect.observe(self.session.session()) {
                self.navigate(destination.into());
            }
        }

        self.toasts.prune(Instant::now());
    }

    /// Validate and dispatch the form. Validation failures surface both
    /// inline and as a toast; nothing goes on the wire for them.
    pub fn submit_form(&mut self) {
        match self.form.submit() {
            Some(Submission::Login(request)) => self.session.login(request),
            Some(Submission::Register(request)) => self.session.register(request),
            None => {
                if let Some(error) = &self.form.error {
                    self.toasts.error(error.to_string());
                }
            }
        }
    }

    /// Switch views. Entering the auth screen re-arms the redirect guard,
    /// so each visit gets its own at-most-once redirect.
    pub fn navigate(&mut self, view: AppView) {
        if view == AppView::Auth {
            self.redirect.rearm();
        }
        self.current_view = view;
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.form.reset();
        self.navigate(AppView::Auth);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
