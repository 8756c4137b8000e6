//! verseify-e2e: end-to-end authentication tests for the Verseify blog site
//!
//! This crate is the harness for a suite of browser tests that drive the
//! deployed site through a real browser (via a WebDriver server such as
//! chromedriver) and assert on rendered page content and navigation
//! state. The scenarios themselves live under `tests/`; this library
//! provides the vocabulary they share: the suite [`Config`], the
//! exclusively-owned browser [`Session`], the [`PageElement`] locator
//! table, the static test [`data`], and the bounded [`wait`] combinator.
//!
//! # Example
//!
//! ```ignore
//! use verseify_e2e::{data, Config, PageElement, Session};
//!
//! #[tokio::main]
//! async fn main() -> verseify_e2e::Result<()> {
//!     let config = Config::from_env();
//!     let session = Session::acquire(&config).await?;
//!
//!     session.click(PageElement::LoginLink).await?;
//!     session.wait_visible(PageElement::LoginButton).await?;
//!     session
//!         .type_text(PageElement::EmailInput, data::VALID_USER.email)
//!         .await?;
//!     session
//!         .type_text(PageElement::PasswordInput, data::VALID_USER.password)
//!         .await?;
//!     session.click(PageElement::LoginButton).await?;
//!     session.wait_visible(PageElement::HomePageTitle).await?;
//!
//!     assert_eq!(
//!         session.text(PageElement::SuccessMessage).await?,
//!         data::messages::LOGIN_SUCCESS
//!     );
//!
//!     session.release().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
mod error;
pub mod locator;
mod session;
pub mod wait;

// Re-export error types
pub use error::{Error, Result};

// Re-export the suite configuration
pub use config::Config;

// Re-export the session fixture
pub use session::Session;

// Re-export the locator table
pub use locator::{Locator, PageElement, Strategy};

// Re-export wait settings
pub use wait::WaitOptions;
