// Suite configuration
//
// Everything has a literal default so `cargo test` needs no setup beyond
// a running chromedriver; each knob can be overridden through the
// environment for CI or a staging deployment.

use std::time::Duration;

use crate::wait::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT, WaitOptions};

/// URL of the deployed site under test
pub const BASE_URL: &str = "http://verseifylance.ahmadyaz.my.id/";

/// WebDriver endpoint (chromedriver's default port)
pub const WEBDRIVER_URL: &str = "http://localhost:9515";

/// Configuration for one test run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the application under test
    pub base_url: String,

    /// WebDriver server the browser session is acquired from
    pub webdriver_url: String,

    /// Timeout applied to every wait in a scenario
    pub wait_timeout: Duration,

    /// Polling interval for waits
    pub poll_interval: Duration,

    /// Run the browser headless (windowed by default, so a local run
    /// shows the maximized browser the way a human debugging it would)
    pub headless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            webdriver_url: WEBDRIVER_URL.to_string(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            headless: false,
        }
    }
}

impl Config {
    /// Creates a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the application under test
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the WebDriver endpoint
    pub fn webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    /// Set the wait timeout
    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Run the browser headless
    pub fn headless(mut self, enabled: bool) -> Self {
        self.headless = enabled;
        self
    }

    /// The wait settings a session built from this config uses
    pub fn wait_options(&self) -> WaitOptions {
        WaitOptions::new(self.wait_timeout, self.poll_interval)
    }

    /// Read overrides from the process environment.
    ///
    /// Recognized variables: `E2E_BASE_URL`, `E2E_WEBDRIVER_URL`,
    /// `E2E_WAIT_TIMEOUT_SECS`, `E2E_HEADLESS`. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("E2E_BASE_URL") {
            config.base_url = url;
        }
        if let Some(url) = lookup("E2E_WEBDRIVER_URL") {
            config.webdriver_url = url;
        }
        if let Some(secs) = lookup("E2E_WAIT_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) => config.wait_timeout = Duration::from_secs(secs),
                Err(_) => {
                    tracing::warn!("ignoring unparseable E2E_WAIT_TIMEOUT_SECS={secs:?}");
                }
            }
        }
        if let Some(flag) = lookup("E2E_HEADLESS") {
            config.headless = matches!(flag.as_str(), "1" | "true" | "yes");
        }
        config
    }
}
