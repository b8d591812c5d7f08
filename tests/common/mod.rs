//! Shared helpers for the integration tests
//!
//! Builds application states wired to a wiremock service and a throwaway
//! session file, plus JSON builders for the service's response shapes.

use std::time::{Duration, Instant};

use bibliodesk::egui_app::{AppState, Config};
use serde_json::{json, Value};
use tempfile::TempDir;
use uuid::Uuid;
use wiremock::MockServer;

/// How long [`drive_until`] waits before giving up
pub const DRIVE_TIMEOUT: Duration = Duration::from_secs(5);

/// An application state pointed at the mock service, with its session
/// file inside `dir`.
pub fn test_state(server: &MockServer, dir: &TempDir) -> AppState {
    AppState::with_config(test_config(server, dir))
}

pub fn test_config(server: &MockServer, dir: &TempDir) -> Config {
    Config::with_server_url(server.uri()).with_session_file(dir.path().join("session.toml"))
}

/// Pump frames until `done` holds or the timeout passes. Returns whether
/// the condition was reached.
pub fn drive_until<F>(state: &mut AppState, timeout: Duration, mut done: F) -> bool
where
    F: FnMut(&AppState) -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        state.tick();
        if done(state) {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

/// A user object as the service returns it.
pub fn user_json(name: &str, email: &str, role: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "name": name,
        "email": email,
        "role": role,
    })
}

/// A successful login body.
pub fn auth_response_json(token: &str, user: Value) -> Value {
    json!({
        "token": token,
        "user": user,
    })
}

/// The error body shape the service uses for rejections.
pub fn message_json(message: &str) -> Value {
    json!({ "message": message })
}
