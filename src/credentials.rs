//! Outcome messages for the login and register forms

use crate::error::ApiError;
use crate::types::{LoginResponse, RegisterResponse};

pub const SERVER_UNAVAILABLE_MESSAGE: &str = "Network error or server unavailable.";

/// Message shown under a credential form after submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Failure(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            FormMessage::Success(m) | FormMessage::Failure(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormMessage::Success(_))
    }
}

pub fn register_message(result: &Result<RegisterResponse, ApiError>) -> FormMessage {
    match result {
        Ok(data) => FormMessage::Success(format!("{}. You can now log in.", data.message)),
        Err(e) => failure(e, "Registration failed"),
    }
}

pub fn login_message(result: &Result<LoginResponse, ApiError>) -> FormMessage {
    match result {
        Ok(data) => FormMessage::Success(
            data.message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Login successful.".to_string()),
        ),
        Err(e) => failure(e, "Login failed"),
    }
}

fn failure(error: &ApiError, fallback: &str) -> FormMessage {
    if error.is_transport() {
        return FormMessage::Failure(SERVER_UNAVAILABLE_MESSAGE.to_string());
    }
    FormMessage::Failure(error.server_message().unwrap_or(fallback).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_success_message() {
        let result = Ok(RegisterResponse {
            message: "User registered successfully".into(),
        });
        assert_eq!(
            register_message(&result),
            FormMessage::Success("User registered successfully. You can now log in.".into())
        );
    }

    #[test]
    fn test_register_server_error_is_surfaced() {
        let result = Err(ApiError::from_status(409, r#"{"error":"Username already exists"}"#));
        assert_eq!(
            register_message(&result),
            FormMessage::Failure("Username already exists".into())
        );
    }

    #[test]
    fn test_register_generic_failure() {
        let result = Err(ApiError::from_status(500, ""));
        assert_eq!(register_message(&result).text(), "Registration failed");
    }

    #[test]
    fn test_network_failure_is_server_unavailable() {
        let result: Result<RegisterResponse, _> = Err(ApiError::Network("refused".into()));
        assert_eq!(register_message(&result).text(), SERVER_UNAVAILABLE_MESSAGE);

        let result: Result<LoginResponse, _> = Err(ApiError::Timeout(1000));
        assert_eq!(login_message(&result).text(), SERVER_UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_login_messages() {
        let ok = Ok(LoginResponse { message: None });
        assert_eq!(login_message(&ok), FormMessage::Success("Login successful.".into()));

        let ok = Ok(LoginResponse {
            message: Some("Logged in successfully".into()),
        });
        assert!(login_message(&ok).is_success());

        let ok = Ok(LoginResponse::from_body("Login successful"));
        assert_eq!(login_message(&ok), FormMessage::Success("Login successful.".into()));

        let denied = Err(ApiError::Unauthorized(None));
        assert_eq!(login_message(&denied), FormMessage::Failure("Login failed".into()));

        let denied = Err(ApiError::from_status(401, r#"{"error":"Invalid username or password"}"#));
        assert_eq!(login_message(&denied).text(), "Invalid username or password");
    }
}
