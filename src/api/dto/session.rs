/*
 * Responsibility
 * - login の request/response DTO
 */
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut fields = Vec::new();

        if self.email.trim().len() < 3 || !self.email.contains('@') {
            fields.push(FieldError {
                field: "email",
                message: "email must be a valid address",
            });
        }
        if self.password.len() < 4 || self.password.len() > 1024 {
            fields.push(FieldError {
                field: "password",
                message: "password must be 4 to 1024 characters",
            });
        }

        if fields.is_empty() { Ok(()) } else { Err(fields) }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_or_addressless_email() {
        let req = LoginRequest {
            email: "nope".to_string(),
            password: "secret".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn rejects_short_password() {
        let req = LoginRequest {
            email: "a@example.com".to_string(),
            password: "abc".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn accepts_well_formed_credentials() {
        let req = LoginRequest {
            email: "a@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
