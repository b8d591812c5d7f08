//! Bibliodesk - Main Library
//!
//! Bibliodesk is a native desktop client for a small library service,
//! built with Rust and egui. It covers the authentication flow end to
//! end: login, registration, session persistence across restarts, and
//! role-based routing into the member or staff areas.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types mirroring the service's wire contract
//!   - Request/response bodies for the auth endpoints
//!   - The error taxonomy (validation vs. service errors)
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session store with worker-thread service calls
//!   - Login/registration form model and validation
//!   - Redirect guard and view routing
//!   - Saved-session persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! // Run the native desktop app:
//! // cargo run --bin egui_app
//! ```
//!
//! # Concurrency
//!
//! egui is a single-threaded immediate mode GUI; every service call runs
//! on its own worker thread and reports back over an mpsc channel that
//! the UI drains once per frame. Only the newest in-flight call is ever
//! observed - dispatching a new one drops the old receiver.
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - `Option<T>` for optional values
//! - Custom error types in `shared::error`

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
