use serde::Serialize;
use vh_session::route::{LOGIN_PATH, REGISTER_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub kind: &'static str,
}

/// Login or registration form with the last failure message, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPage {
    pub title: &'static str,
    pub fields: Vec<FormField>,
    pub submit: &'static str,
    pub alternate: &'static str,
    pub error: Option<String>,
}

impl FormPage {
    pub fn login(error: Option<String>) -> Self {
        Self {
            title: "Sign in to your account",
            fields: vec![
                FormField {
                    name: "email",
                    kind: "email",
                },
                FormField {
                    name: "password",
                    kind: "password",
                },
            ],
            submit: "Sign in",
            alternate: REGISTER_PATH,
            error,
        }
    }

    pub fn register(error: Option<String>) -> Self {
        Self {
            title: "Create a new account",
            fields: vec![
                FormField {
                    name: "name",
                    kind: "text",
                },
                FormField {
                    name: "email",
                    kind: "email",
                },
                FormField {
                    name: "password",
                    kind: "password",
                },
            ],
            submit: "Create account",
            alternate: LOGIN_PATH,
            error,
        }
    }
}
