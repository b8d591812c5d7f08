//! Post-authentication redirect
//!
//! Watches the session from the auth screen and says where to go once a
//! session exists. The guard fires at most once per visit to the screen;
//! re-entering the screen re-arms it. Without this, every frame that
//! still sees the session would navigate again.

use crate::egui_app::session::Session;
use crate::shared::auth::Role;

/// Where an authenticated account lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    StaffDashboard,
    MemberHome,
}

impl Destination {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Destination::StaffDashboard,
            Role::User => Destination::MemberHome,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum GuardState {
    #[default]
    Armed,
    Fired,
}

/// One-shot latch between the session and navigation
#[derive(Debug, Default)]
pub struct RedirectGuard {
    state: GuardState,
}

impl RedirectGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the destination for the current session, the first time one
    /// is seen while armed. Every later call returns `None` until the
    /// guard is re-armed.
    pub fn observe(&mut self, session: Option<&Session>) -> Option<Destination> {
        match (self.state, session) {
            (GuardState::Armed, Some(session)) => {
                self.state = GuardState::Fired;
                let destination = Destination::for_role(session.user.role);
                tracing::debug!(
                    "[NAV] Redirecting {} to {:?}",
                    session.user.email,
                    destination
                );
                Some(destination)
            }
            _ => None,
        }
    }

    /// Make the guard willing to fire again, for the next visit to the
    /// auth screen.
    pub fn rearm(&mut self) {
        self.state = GuardState::Armed;
    }

    pub fn has_fired(&self) -> bool {
        self.state == GuardState::Fired
    }
}
