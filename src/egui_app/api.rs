/**
 * Library Service API Client
 *
 * HTTP functions for the auth endpoints. Each call builds its own client
 * and runtime so it can run on a plain worker thread; see
 * `egui_app::session` for how these are dispatched off the UI thread.
 */

use crate::egui_app::config::Config;
use crate::shared::auth::{ApiMessage, AuthResponse, LoginRequest, RegisterRequest, User};
use crate::shared::error::AuthError;
use reqwest::Client;
use tokio::runtime::Runtime;

/// Exchange credentials for a token and the account it belongs to.
pub fn login(config: &Config, request: LoginRequest) -> Result<AuthResponse, AuthError> {
    let client = Client::new();
    let url = config.api_url("/api/auth/login");

    // Create a runtime for async execution
    let rt = Runtime::new().map_err(|e| AuthError::network(e.to_string()))?;

    rt.block_on(async {
        let response = client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let auth_response: AuthResponse = response.json().await?;
        Ok(auth_response)
    })
}

/// Create an account. The service hands back no token here; the caller is
/// expected to log in afterwards.
pub fn register(config: &Config, request: RegisterRequest) -> Result<(), AuthError> {
    let client = Client::new();
    let url = config.api_url("/api/auth/register");

    // Create a runtime for async execution
    let rt = Runtime::new().map_err(|e| AuthError::network(e.to_string()))?;

    rt.block_on(async {
        let response = client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    })
}

/// Fetch the account a token belongs to.
pub fn me(config: &Config, token: &str) -> Result<User, AuthError> {
    let client = Client::new();
    let url = config.api_url("/api/auth/me");

    // Create a runtime for async execution
    let rt = Runtime::new().map_err(|e| AuthError::network(e.to_string()))?;

    rt.block_on(async {
        let response = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let user: User = response.json().await?;
        Ok(user)
    })
}

/// Turn a non-2xx response into a rejection, keeping the service's own
/// message when the body carries one.
async fn error_from_response(response: reqwest::Response) -> AuthError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(text) => match serde_json::from_str::<ApiMessage>(&text) {
            Ok(body) => body.message,
            Err(_) => format!("Request failed with status {}", status),
        },
        Err(_) => format!("Request failed with status {}", status),
    };
    AuthError::Rejected { status, message }
}
