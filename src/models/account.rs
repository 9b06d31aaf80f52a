use serde::Deserialize;

/// Registration form submission, persisted to `user_registration`.
///
/// Field names match the HTML form inputs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewRegistration {
    #[serde(rename = "username")]
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form submission, persisted to `user_login`.
///
/// Logins are recorded as-is; credentials are never checked against
/// registrations.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewLoginAttempt {
    #[serde(rename = "signinUsername")]
    pub name: String,
    #[serde(rename = "signinPassword")]
    pub password: String,
}

/// A stored registration row
#[derive(Debug, Clone, PartialEq)]
pub struct UserRegistration {
    pub user_id: i32,
    pub user_name: String,
    pub user_email: String,
    pub user_password: String,
}

/// A stored login attempt row
#[derive(Debug, Clone, PartialEq)]
pub struct LoginAttempt {
    pub login_id: i32,
    pub login_name: String,
    pub login_password: String,
}
