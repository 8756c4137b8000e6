// Browser session fixture
//
// A `Session` is a live, exclusively-owned handle to one browser
// instance. Scenarios acquire one at the start, drive every step through
// it, and release it when done; nothing is shared across tests.

use thirtyfour::error::WebDriverErrorInner;
use thirtyfour::prelude::*;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::locator::PageElement;
use crate::wait::{self, WaitOptions};

/// A live browser session bound to one test execution
#[derive(Debug)]
pub struct Session {
    driver: WebDriver,
    wait: WaitOptions,
}

impl Session {
    /// Acquire a fresh browser session.
    ///
    /// Starts a WebDriver session against the configured endpoint,
    /// maximizes the window, and navigates to the base URL. Fails with
    /// [`Error::Session`] if the browser cannot be launched or the site
    /// is unreachable.
    pub async fn acquire(config: &Config) -> Result<Self> {
        tracing::info!(
            webdriver = %config.webdriver_url,
            base_url = %config.base_url,
            "acquiring browser session"
        );
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless().map_err(|e| {
                Error::Session(format!("could not configure headless mode: {e}"))
            })?;
        }
        let driver = WebDriver::new(&config.webdriver_url, caps)
            .await
            .map_err(|e| {
                Error::Session(format!(
                    "could not start a browser session at {}: {e}",
                    config.webdriver_url
                ))
            })?;
        driver.maximize_window().await?;
        driver.goto(&config.base_url).await.map_err(|e| {
            Error::Session(format!("could not navigate to {}: {e}", config.base_url))
        })?;
        Ok(Self {
            driver,
            wait: config.wait_options(),
        })
    }

    /// Release the session, closing the browser.
    pub async fn release(self) -> Result<()> {
        tracing::info!("releasing browser session");
        self.driver.quit().await?;
        Ok(())
    }

    /// Find an element from the locator table.
    ///
    /// A missing element fails immediately with
    /// [`Error::ElementNotFound`]; there is no retry here. Use
    /// [`Session::wait_visible`] first when the element appears
    /// asynchronously.
    pub async fn find(&self, element: PageElement) -> Result<WebElement> {
        let locator = element.locator();
        self.driver
            .find(locator.to_by())
            .await
            .map_err(|e| {
                if matches!(e.as_inner(), WebDriverErrorInner::NoSuchElement(_)) {
                    Error::ElementNotFound {
                        element: element.name(),
                        selector: locator.to_string(),
                    }
                } else {
                    Error::Driver(e)
                }
            })
    }

    /// Click an element
    pub async fn click(&self, element: PageElement) -> Result<()> {
        tracing::debug!(%element, "click");
        self.find(element).await?.click().await?;
        Ok(())
    }

    /// Type text into an input element
    pub async fn type_text(&self, element: PageElement, text: &str) -> Result<()> {
        tracing::debug!(%element, "type text");
        self.find(element).await?.send_keys(text).await?;
        Ok(())
    }

    /// The rendered text of an element
    pub async fn text(&self, element: PageElement) -> Result<String> {
        let text = self.find(element).await?.text().await?;
        tracing::debug!(%element, %text, "read text");
        Ok(text)
    }

    /// Whether an element is currently displayed.
    ///
    /// The element must exist; a missing element is an error, not
    /// `false`, matching the fail-fast contract of [`Session::find`].
    pub async fn is_visible(&self, element: PageElement) -> Result<bool> {
        let visible = self.find(element).await?.is_displayed().await?;
        tracing::debug!(%element, visible, "visibility check");
        Ok(visible)
    }

    /// The browser's current URL
    pub async fn current_url(&self) -> Result<Url> {
        Ok(self.driver.current_url().await?)
    }

    /// Block until an element is present and displayed, or the
    /// configured timeout elapses.
    pub async fn wait_visible(&self, element: PageElement) -> Result<()> {
        tracing::debug!(%element, timeout = ?self.wait.timeout, "waiting for visibility");
        let description = format!("{element} to be visible");
        wait::until(self.wait, &description, || async move {
            match self.driver.find(element.locator().to_by()).await {
                Ok(found) => Ok(found.is_displayed().await.unwrap_or(false)),
                Err(other) if matches!(other.as_inner(), WebDriverErrorInner::NoSuchElement(_)) => {
                    Ok(false)
                }
                Err(other) => Err(Error::Driver(other)),
            }
        })
        .await
    }

    /// The wait settings this session polls with
    pub fn wait_options(&self) -> WaitOptions {
        self.wait
    }
}
