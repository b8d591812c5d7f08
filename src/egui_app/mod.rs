//! egui Native Desktop App Module
//!
//! This module provides the native desktop client for the library service,
//! built with egui/eframe.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL, session file)
//! - **`api`** - HTTP client functions for the auth endpoints
//! - **`session`** - Session store: token/user pair, rehydration, calls
//! - **`form`** - Login/registration form state and validation
//! - **`redirect`** - Post-authentication redirect guard
//! - **`token_file`** - Saved-session persistence
//! - **`notify`** - Toast notifications
//! - **`types`** - View identifiers
//! - **`state`** - Central application state
//! - **`theme`** / **`views`** - Styling and widget code
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── api.rs          - HTTP client functions
//! ├── session.rs      - Session store
//! ├── form.rs         - Auth form model
//! ├── redirect.rs     - Redirect guard
//! ├── token_file.rs   - Saved-session file
//! ├── notify.rs       - Toast queue
//! └── types.rs        - View identifiers
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin egui_app
//! ```

pub mod api;
pub mod config;
pub mod form;
pub mod notify;
pub mod redirect;
pub mod session;
pub mod state;
pub mod theme;
pub mod token_file;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use form::{AuthForm, FormMode, Submission};
pub use notify::{Toast, ToastKind, Toasts};
pub use redirect::{Destination, RedirectGuard};
pub use session::{Session, SessionEvent, SessionStore};
pub use state::AppState;
pub use types::AppView;
