// Error types for the test suite

use std::time::Duration;

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a scenario
///
/// None of these are caught or retried anywhere in the suite; every
/// failure propagates with `?` and aborts the current test, which the
/// harness then reports as that test's failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Browser session could not be acquired or the base URL was unreachable
    ///
    /// Common causes: chromedriver is not running at the configured
    /// endpoint, or the site is down. Start chromedriver with:
    /// `chromedriver --port=9515`
    #[error("session error: {0}")]
    Session(String),

    /// An element named by the locator table resolved to nothing
    ///
    /// Includes the semantic element name and the selector that was used.
    #[error("element '{element}' not found (selector: {selector})")]
    ElementNotFound {
        element: &'static str,
        selector: String,
    },

    /// A wait condition was not met within the configured timeout
    #[error("timed out after {timeout:?} waiting for {waited_for}")]
    WaitTimeout {
        waited_for: String,
        timeout: Duration,
    },

    /// Any other WebDriver-level failure
    #[error("webdriver error: {0}")]
    Driver(#[from] thirtyfour::error::WebDriverError),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_names_the_element_and_selector() {
        let err = Error::ElementNotFound {
            element: "login_button",
            selector: "By::Id(login_button)".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("login_button"));
        assert!(msg.contains("By::Id"));
    }

    #[test]
    fn wait_timeout_reports_the_condition() {
        let err = Error::WaitTimeout {
            waited_for: "login_button to be visible".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert!(err.to_string().contains("login_button to be visible"));
    }

    #[test]
    fn context_wraps_the_source() {
        let err = Error::Session("connection refused".to_string())
            .context("acquiring session for login scenario");
        let msg = err.to_string();
        assert!(msg.starts_with("acquiring session"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
