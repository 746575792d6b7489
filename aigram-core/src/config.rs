use tracing::{debug, info};

/// Backend used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable naming the backend base URL.
///
/// Read at runtime on native builds, and captured at compile time for wasm builds,
/// where the page has no process environment.
pub const BACKEND_URL_ENV: &str = "AIGRAM_BACKEND_URL";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend, without trailing slash
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Precedence: runtime `AIGRAM_BACKEND_URL` (native only, `.env` honored),
    /// then the value baked in at build time, then [`DEFAULT_BACKEND_URL`].
    pub fn load() -> Self {
        let config = Self::resolve(
            runtime_backend_url().as_deref(),
            option_env!("AIGRAM_BACKEND_URL"),
        );
        info!("Using backend at {}", config.backend_url);
        config
    }

    /// Pick the backend URL from the given sources. Blank values are skipped.
    pub fn resolve(runtime: Option<&str>, build_time: Option<&str>) -> Self {
        let backend_url = [runtime, build_time]
            .into_iter()
            .flatten()
            .map(|url| url.trim().trim_end_matches('/'))
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_string();

        Self { backend_url }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_backend_url() -> Option<String> {
    if dotenvy::dotenv().is_ok() {
        debug!("Loaded .env file");
    }
    std::env::var(BACKEND_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_backend_url() -> Option<String> {
    debug!("No runtime environment on wasm, using build-time configuration");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost() {
        assert_eq!(Config::resolve(None, None).backend_url, "http://localhost:8000");
        assert_eq!(Config::default(), Config::resolve(None, None));
    }

    #[test]
    fn runtime_wins_over_build_time() {
        let config = Config::resolve(
            Some("https://api.example.com"),
            Some("https://baked.example.com"),
        );
        assert_eq!(config.backend_url, "https://api.example.com");
    }

    #[test]
    fn build_time_used_when_runtime_missing() {
        let config = Config::resolve(None, Some("https://baked.example.com"));
        assert_eq!(config.backend_url, "https://baked.example.com");
    }

    #[test]
    fn blank_values_are_skipped() {
        let config = Config::resolve(Some("   "), Some(""));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = Config::resolve(Some("http://10.0.0.2:8000//"), None);
        assert_eq!(config.backend_url, "http://10.0.0.2:8000");
    }
}
