#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::Serialize;

/// Payload the external authentication service would receive on submit.
///
/// No request is sent from this client; the shape documents the collaborator
/// contract and feeds the submission debug log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Local state of the login form.
///
/// Lives in a single `RwSignal` owned by the login page: initialized empty
/// on mount, mutated by input events, discarded on unmount.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub submitted: bool,
}

impl LoginForm {
    /// Replace the email field. No validation.
    pub fn update_email(&mut self, value: String) {
        self.email = value;
    }

    /// Replace the password field. No validation.
    pub fn update_password(&mut self, value: String) {
        self.password = value;
    }

    /// Flip whether the password renders as plain text. Nothing else changes.
    pub fn toggle_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Capture the current credentials, clear both fields, and disable the
    /// submit control for the remainder of this form's lifetime.
    pub fn submit(&mut self) -> Credentials {
        let credentials = Credentials {
            email: std::mem::take(&mut self.email),
            password: std::mem::take(&mut self.password),
        };
        self.submitted = true;
        credentials
    }
}
