//! Unit tests for [`ChatOptions`](crate::ChatOptions).
//!
//! Tests that touch NEXT_PUBLIC_API_URL use a static lock so they do not run in parallel
//! and overwrite each other's environment.

use std::sync::Mutex;

use agent_chat::API_URL_ENV;

use crate::ChatOptions;

static ENV_API_URL_LOCK: std::sync::OnceLock<Mutex<()>> = std::sync::OnceLock::new();

fn env_api_url_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_API_URL_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

/// **Scenario**: --api-url wins over NEXT_PUBLIC_API_URL.
///
/// Given: NEXT_PUBLIC_API_URL=http://from-env and api_url=Some("http://from-flag")
/// When: client_config() is called
/// Then: the base URL is the flag value
#[test]
fn api_url_option_overrides_env() {
    let _guard = env_api_url_lock();
    let saved = std::env::var(API_URL_ENV).ok();
    std::env::set_var(API_URL_ENV, "http://from-env");

    let options = ChatOptions {
        api_url: Some("http://from-flag".to_string()),
        verbose: false,
    };
    let config = options.client_config();

    match saved {
        Some(v) => std::env::set_var(API_URL_ENV, v),
        None => std::env::remove_var(API_URL_ENV),
    }
    assert_eq!(config.base_url(), "http://from-flag");
}

/// **Scenario**: Without --api-url the env value is used.
#[test]
fn default_options_read_env() {
    let _guard = env_api_url_lock();
    let saved = std::env::var(API_URL_ENV).ok();
    std::env::set_var(API_URL_ENV, "http://from-env");

    let config = ChatOptions::default().client_config();

    match saved {
        Some(v) => std::env::set_var(API_URL_ENV, v),
        None => std::env::remove_var(API_URL_ENV),
    }
    assert_eq!(config.chat_url(), "http://from-env/chat");
}

/// **Scenario**: --verbose turns on debug logging for the agent crates only.
#[test]
fn verbose_option_selects_debug_filter() {
    let quiet = ChatOptions::default();
    let verbose = ChatOptions {
        verbose: true,
        ..ChatOptions::default()
    };

    assert_eq!(quiet.log_filter(), "warn");
    assert_eq!(
        verbose.log_filter(),
        "warn,agent_chat=debug,agent_chat_cli=debug"
    );
}
