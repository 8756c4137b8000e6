// Locator table for the elements the scenarios interact with.
//
// Every element a scenario touches is a `PageElement` variant, so a
// scenario cannot reference a locator that does not exist in the table.

use thirtyfour::By;

/// How an element is looked up in the DOM
///
/// The site under test is addressed with exactly these four strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Match on the `id` attribute
    Id,
    /// Match an anchor by its exact link text
    LinkText,
    /// Match on a class name
    ClassName,
    /// Match on the tag name
    TagName,
}

/// A (strategy, value) pair identifying how to find a UI element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    pub strategy: Strategy,
    pub value: &'static str,
}

impl Locator {
    pub const fn new(strategy: Strategy, value: &'static str) -> Self {
        Self { strategy, value }
    }

    /// Convert to the WebDriver selector this locator resolves with
    pub fn to_by(self) -> By {
        match self.strategy {
            Strategy::Id => By::Id(self.value),
            Strategy::LinkText => By::LinkText(self.value),
            Strategy::ClassName => By::ClassName(self.value),
            Strategy::TagName => By::Tag(self.value),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "By::{:?}({:?})", self.strategy, self.value)
    }
}

/// Semantic names for the elements of the site under test
///
/// The authentication pages are small enough that the whole vocabulary
/// fits in one table; scenarios only ever speak in these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageElement {
    LoginLink,
    RegisterLink,
    EmailInput,
    PasswordInput,
    PasswordConfirmationInput,
    NameInput,
    LoginButton,
    RegisterButton,
    LogoutLink,
    ForgotPasswordLink,
    ResetPasswordButton,
    StayLoggedInCheckbox,
    ErrorMessage,
    SuccessMessage,
    HomePageTitle,
    ProfileLink,
}

impl PageElement {
    /// Every element in the table
    pub const ALL: [PageElement; 16] = [
        PageElement::LoginLink,
        PageElement::RegisterLink,
        PageElement::EmailInput,
        PageElement::PasswordInput,
        PageElement::PasswordConfirmationInput,
        PageElement::NameInput,
        PageElement::LoginButton,
        PageElement::RegisterButton,
        PageElement::LogoutLink,
        PageElement::ForgotPasswordLink,
        PageElement::ResetPasswordButton,
        PageElement::StayLoggedInCheckbox,
        PageElement::ErrorMessage,
        PageElement::SuccessMessage,
        PageElement::HomePageTitle,
        PageElement::ProfileLink,
    ];

    /// The semantic name, used in logs and error messages
    pub const fn name(self) -> &'static str {
        match self {
            PageElement::LoginLink => "login_link",
            PageElement::RegisterLink => "register_link",
            PageElement::EmailInput => "email_input",
            PageElement::PasswordInput => "password_input",
            PageElement::PasswordConfirmationInput => "password_confirmation_input",
            PageElement::NameInput => "name_input",
            PageElement::LoginButton => "login_button",
            PageElement::RegisterButton => "register_button",
            PageElement::LogoutLink => "logout_link",
            PageElement::ForgotPasswordLink => "forgot_password_link",
            PageElement::ResetPasswordButton => "reset_password_button",
            PageElement::StayLoggedInCheckbox => "stay_logged_in_checkbox",
            PageElement::ErrorMessage => "error_message",
            PageElement::SuccessMessage => "success_message",
            PageElement::HomePageTitle => "home_page_title",
            PageElement::ProfileLink => "profile_link",
        }
    }

    /// How this element is found on the page
    pub const fn locator(self) -> Locator {
        match self {
            PageElement::LoginLink => Locator::new(Strategy::LinkText, "Login"),
            PageElement::RegisterLink => Locator::new(Strategy::LinkText, "Register"),
            PageElement::EmailInput => Locator::new(Strategy::Id, "email"),
            PageElement::PasswordInput => Locator::new(Strategy::Id, "password"),
            PageElement::PasswordConfirmationInput => {
                Locator::new(Strategy::Id, "password_confirmation")
            }
            PageElement::NameInput => Locator::new(Strategy::Id, "name"),
            PageElement::LoginButton => Locator::new(Strategy::Id, "login_button"),
            PageElement::RegisterButton => Locator::new(Strategy::Id, "register_button"),
            PageElement::LogoutLink => Locator::new(Strategy::LinkText, "Logout"),
            PageElement::ForgotPasswordLink => {
                Locator::new(Strategy::LinkText, "Forgot password?")
            }
            PageElement::ResetPasswordButton => {
                Locator::new(Strategy::Id, "reset_password_button")
            }
            PageElement::StayLoggedInCheckbox => Locator::new(Strategy::Id, "stay_logged_in"),
            PageElement::ErrorMessage => Locator::new(Strategy::ClassName, "error"),
            PageElement::SuccessMessage => Locator::new(Strategy::ClassName, "success"),
            PageElement::HomePageTitle => Locator::new(Strategy::TagName, "h1"),
            PageElement::ProfileLink => Locator::new(Strategy::LinkText, "Profile"),
        }
    }
}

impl std::fmt::Display for PageElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_element_has_a_nonempty_selector() {
        for element in PageElement::ALL {
            let locator = element.locator();
            assert!(
                !locator.value.is_empty(),
                "{element} has an empty selector"
            );
            assert!(!element.name().is_empty());
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = PageElement::ALL.iter().map(|e| e.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PageElement::ALL.len());
    }

    #[test]
    fn form_fields_are_looked_up_by_id() {
        for element in [
            PageElement::EmailInput,
            PageElement::PasswordInput,
            PageElement::PasswordConfirmationInput,
            PageElement::NameInput,
            PageElement::LoginButton,
            PageElement::RegisterButton,
            PageElement::StayLoggedInCheckbox,
        ] {
            assert_eq!(element.locator().strategy, Strategy::Id);
        }
    }

    #[test]
    fn navigation_links_are_looked_up_by_link_text() {
        assert_eq!(
            PageElement::LoginLink.locator(),
            Locator::new(Strategy::LinkText, "Login")
        );
        assert_eq!(
            PageElement::LogoutLink.locator(),
            Locator::new(Strategy::LinkText, "Logout")
        );
        assert_eq!(
            PageElement::ProfileLink.locator(),
            Locator::new(Strategy::LinkText, "Profile")
        );
    }

    #[test]
    fn feedback_banners_are_looked_up_by_class() {
        assert_eq!(
            PageElement::ErrorMessage.locator(),
            Locator::new(Strategy::ClassName, "error")
        );
        assert_eq!(
            PageElement::SuccessMessage.locator(),
            Locator::new(Strategy::ClassName, "success")
        );
    }

    #[test]
    fn locators_render_like_the_selector_they_resolve_with() {
        assert_eq!(
            PageElement::LoginButton.locator().to_string(),
            r#"By::Id("login_button")"#
        );
        assert_eq!(
            PageElement::LoginLink.locator().to_string(),
            r#"By::LinkText("Login")"#
        );
    }

    #[test]
    fn home_page_title_is_the_top_heading() {
        assert_eq!(
            PageElement::HomePageTitle.locator(),
            Locator::new(Strategy::TagName, "h1")
        );
    }
}
