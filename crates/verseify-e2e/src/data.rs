// Static test data and the UI text the scenarios assert against.

/// An email/password pair used to drive a login or registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub email: &'static str,
    pub password: &'static str,
}

/// Account that exists on the site
pub const VALID_USER: Credentials = Credentials {
    email: "test@example.com",
    password: "Test@1234",
};

/// Account that does not exist
pub const INVALID_USER: Credentials = Credentials {
    email: "test@invalid.com",
    password: "test",
};

/// Account registered by the registration scenario
pub const NEW_USER: Credentials = Credentials {
    email: "new@example.com",
    password: "New@1234",
};

/// Display name entered during registration
pub const NEW_USER_NAME: &str = "New User";

/// Heading shown on the home page after a successful login
pub const HOME_PAGE_TITLE: &str = "Welcome to the blog site";

/// Expected UI messages, verbatim
pub mod messages {
    pub const LOGIN_SUCCESS: &str = "You have successfully logged in.";
    pub const LOGIN_ERROR: &str = "Invalid email or password.";
    pub const REGISTRATION_SUCCESS: &str =
        "You have successfully registered. Please check your email for confirmation.";
    pub const REGISTRATION_ERROR: &str = "The email is already taken or invalid. \
        The password and password confirmation do not match or do not meet the requirements.";
    pub const PASSWORD_RESET_SUCCESS: &str =
        "You have successfully reset your password. Please login with your new password.";
    pub const PASSWORD_RESET_ERROR: &str = "The email is not registered or the new password \
        and password confirmation do not match or do not meet the requirements.";
}
