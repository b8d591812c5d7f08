//! Login / registration form model
//!
//! All field state and submission rules for the auth screen live here,
//! away from the widget code. The form validates locally, hands a
//! ready-to-send request to the caller, and locks itself until the
//! matching completion event comes back through
//! [`crate::egui_app::session::SessionStore::poll`].

use crate::egui_app::session::SessionEvent;
use crate::shared::auth::{LoginRequest, RegisterRequest, Role};
use crate::shared::error::{AuthFlowError, ValidationError};

/// Minimum password length accepted client-side
const MIN_PASSWORD_CHARS: usize = 8;

/// Which face of the auth screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

/// A validated request ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

/// State behind the auth screen
#[derive(Debug, Default)]
pub struct AuthForm {
    pub mode: FormMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub error: Option<AuthFlowError>,
    is_submitting: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True from a successful [`AuthForm::submit`] until the matching
    /// completion event is folded in by [`AuthForm::handle_event`].
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Validate the current fields and, if they pass, lock the form and
    /// return the request to dispatch. Returns `None` when validation
    /// fails (the error is shown inline, nothing is sent) or when a
    /// submission is already in flight.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.is_submitting {
            return None;
        }

        if let Err(err) = self.validate() {
            self.error = Some(err.into());
            return None;
        }

        self.error = None;
        self.is_submitting = true;

        let submission = match self.mode {
            FormMode::Login => Submission::Login(LoginRequest {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            }),
            FormMode::Register => Submission::Register(RegisterRequest {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                password_confirmation: self.confirm_password.clone(),
                role: self.role,
            }),
        };
        Some(submission)
    }

    /// First failing rule wins, in the order the fields appear on screen.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.mode == FormMode::Register && self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if !email_looks_valid(email) {
            return Err(ValidationError::InvalidEmail);
        }

        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::PasswordTooShort);
        }

        if self.mode == FormMode::Register && self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(())
    }

    /// Fold a call completion into the form. Rehydration events are not
    /// the form's business and are ignored.
    pub fn handle_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::LoginFinished(Ok(_)) => {
                self.is_submitting = false;
                self.error = None;
                self.password.clear();
                self.confirm_password.clear();
            }
            SessionEvent::LoginFinished(Err(err)) => {
                self.is_submitting = false;
                self.error = Some(AuthFlowError::Service(err.clone()));
            }
            SessionEvent::RegisterFinished(Ok(())) => {
                // Back to the login face with the email kept, so the user
                // can sign in with the account they just made.
                self.is_submitting = false;
                self.error = None;
                self.mode = FormMode::Login;
                self.password.clear();
                self.confirm_password.clear();
            }
            SessionEvent::RegisterFinished(Err(err)) => {
                self.is_submitting = false;
                self.error = Some(AuthFlowError::Service(err.clone()));
            }
            SessionEvent::Rehydrated(_) => {}
        }
    }

    /// Flip between login and registration. Ignored while a submission is
    /// in flight; clears both password fields and any inline error.
    pub fn toggle_mode(&mut self) {
        if self.is_submitting {
            return;
        }
        self.mode = match self.mode {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        };
        self.error = None;
        self.password.clear();
        self.confirm_password.clear();
    }

    /// Drop everything, back to an empty login form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Cheap shape check; the service remains the authority on addresses.
fn email_looks_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
