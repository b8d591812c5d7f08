use std::path::{Path, PathBuf};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Directory under the platform data dir where client state lives
const APP_DIR: &str = "bibliodesk";

/// Client configuration: where the library service lives and where the
/// saved session is kept on disk.
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
    session_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("CLIENT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url: normalize_url(server_url),
            session_file: default_session_file(),
        }
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointed at an explicit server, ignoring the environment
    pub fn with_server_url(url: impl Into<String>) -> Self {
        Self {
            server_url: normalize_url(url.into()),
            session_file: default_session_file(),
        }
    }

    /// Override where the saved session is stored
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    /// Path of the saved-session file
    pub fn session_file(&self) -> &Path {
        &self.session_file
    }
}

fn normalize_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn default_session_file() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    path.push(APP_DIR);
    path.push("session.toml");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_explicit_server_url() {
        let config = Config::with_server_url("http://127.0.0.1:9999");
        assert_eq!(config.server_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_api_url() {
        let config = Config::with_server_url("http://127.0.0.1:3000");
        let url = config.api_url("/api/auth/login");
        assert_eq!(url, "http://127.0.0.1:3000/api/auth/login");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::with_server_url("http://10.0.0.5:8080/");
        assert_eq!(
            config.api_url("/api/auth/register"),
            "http://10.0.0.5:8080/api/auth/register"
        );
    }

    #[test]
    fn test_session_file_override() {
        let config =
            Config::with_server_url("http://127.0.0.1:3000").with_session_file("/tmp/s.toml");
        assert_eq!(config.session_file(), Path::new("/tmp/s.toml"));
    }

    #[test]
    #[serial]
    fn test_env_server_url() {
        std::env::set_var("CLIENT_API_URL", "http://env.example:4000");
        let config = Config::new();
        std::env::remove_var("CLIENT_API_URL");
        assert_eq!(config.server_url(), "http://env.example:4000");
    }

    #[test]
    #[serial]
    fn test_default_server_url() {
        std::env::remove_var("CLIENT_API_URL");
        let config = Config::new();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");
        assert!(config.session_file().ends_with("bibliodesk/session.toml"));
    }
}
