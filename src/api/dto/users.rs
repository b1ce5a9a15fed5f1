/*
 * Responsibility
 * - Users の request/response DTO
 * - response に password 系の情報は含めない
 */
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut fields = Vec::new();

        if self.email.trim().len() < 3 || !self.email.contains('@') {
            fields.push(FieldError {
                field: "email",
                message: "email must be a valid address",
            });
        }
        if self.name.trim().is_empty() {
            fields.push(FieldError {
                field: "name",
                message: "name must not be blank",
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
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}
