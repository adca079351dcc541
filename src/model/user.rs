use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::validate::present;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Registration form. Fields are optional so missing ones surface as validation errors.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default)]
pub struct RegisterUserDto {
    #[serde(default)]
    #[garde(custom(present), length(chars, min = 2))]
    pub name: Option<String>,
    #[serde(default)]
    #[garde(custom(present), email)]
    pub email: Option<String>,
    #[serde(default)]
    #[garde(custom(present), length(chars, min = 6))]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default)]
pub struct LoginUserDto {
    #[serde(default)]
    #[garde(custom(present), email)]
    pub email: Option<String>,
    #[serde(default)]
    #[garde(custom(present), length(chars, min = 6))]
    pub password: Option<String>,
}
