//! Client config: the agent service base URL.
//!
//! Resolved once when the client starts; there are no setters.

/// Environment variable holding the agent service base URL.
pub const API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Client config: base URL of the agent service, e.g. `http://localhost:8000`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fill config from `NEXT_PUBLIC_API_URL`. Requires `dotenv::dotenv().ok()` by the caller
    /// if a `.env` file should be honored.
    ///
    /// There is no fallback: when the variable is unset the base URL is empty, every request
    /// goes to a malformed address and surfaces as the generic send error.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) => Self::new(url),
            Err(_) => {
                tracing::warn!(
                    var = API_URL_ENV,
                    "agent service base URL is not set; requests will fail"
                );
                Self::new(String::new())
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat endpoint: `<base_url>/chat`, joined literally.
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }
}
