/**
 * Shared Types Module
 *
 * View identifiers for the egui app. The wire-level auth types live in
 * `crate::shared::auth`.
 */

use crate::egui_app::redirect::Destination;

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login/registration screen
    Auth,
    /// Password-reset request screen
    ForgotPassword,
    /// Landing page for library members
    MemberHome,
    /// Administration dashboard for library staff
    StaffDashboard,
}

impl From<Destination> for AppView {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::StaffDashboard => AppView::StaffDashboard,
            Destination::MemberHome => AppView::MemberHome,
        }
    }
}
