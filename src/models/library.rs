//! Library (branch) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::input::truthy_int;

/// Library branch holding copies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Library {
    pub id: u32,
    /// Registration code (CNPJ)
    #[serde(rename = "cnpj")]
    pub registration_code: String,
    /// Declared capacity
    #[serde(rename = "acervo")]
    pub capacity: u32,
    /// Postal code (CEP)
    #[serde(rename = "cep")]
    pub postal_code: String,
}

#[derive(Debug, Clone)]
pub struct NewLibrary {
    pub registration_code: String,
    pub capacity: u32,
    pub postal_code: String,
}

#[derive(Debug, Clone, Default)]
pub struct LibraryPatch {
    pub registration_code: Option<String>,
    pub capacity: Option<u32>,
    pub postal_code: Option<String>,
}

/// Create library request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLibrary {
    #[serde(rename = "cnpj")]
    #[validate(
        required(message = "cnpj is required"),
        length(min = 1, message = "cnpj is required")
    )]
    pub registration_code: Option<String>,
    #[serde(rename = "acervo", default, deserialize_with = "truthy_int")]
    #[validate(
        required(message = "acervo is required"),
        range(min = 0, message = "acervo must not be negative")
    )]
    pub capacity: Option<i64>,
    #[serde(rename = "cep")]
    #[validate(
        required(message = "cep is required"),
        length(min = 1, message = "cep is required")
    )]
    pub postal_code: Option<String>,
}

/// Update library request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLibrary {
    #[serde(rename = "cnpj")]
    pub registration_code: Option<String>,
    #[serde(rename = "acervo", default, deserialize_with = "truthy_int")]
    pub capacity: Option<i64>,
    #[serde(rename = "cep")]
    pub postal_code: Option<String>,
}
