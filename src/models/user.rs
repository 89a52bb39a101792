//! User model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::input::truthy_int;

/// User access levels. Serialized as their numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
#[repr(i16)]
pub enum AccessLevel {
    Patron = 1,
    Staff = 2,
    Librarian = 3,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 3] = [
        AccessLevel::Patron,
        AccessLevel::Staff,
        AccessLevel::Librarian,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccessLevel::Patron => "Leitor/Cliente",
            AccessLevel::Staff => "Funcionário",
            AccessLevel::Librarian => "Bibliotecário",
        }
    }
}

impl TryFrom<i16> for AccessLevel {
    type Error = String;

    fn try_from(v: i16) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(AccessLevel::Patron),
            2 => Ok(AccessLevel::Staff),
            3 => Ok(AccessLevel::Librarian),
            _ => Err(format!("Invalid access level: {}", v)),
        }
    }
}

impl TryFrom<i64> for AccessLevel {
    type Error = String;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        i16::try_from(v)
            .map_err(|_| format!("Invalid access level: {}", v))
            .and_then(AccessLevel::try_from)
    }
}

impl From<AccessLevel> for i16 {
    fn from(level: AccessLevel) -> Self {
        level as i16
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Entry of the access level catalogue
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccessLevelEntry {
    pub id: i16,
    pub nome: String,
}

impl From<AccessLevel> for AccessLevelEntry {
    fn from(level: AccessLevel) -> Self {
        Self {
            id: level.into(),
            nome: level.label().to_string(),
        }
    }
}

/// Library user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    /// National id (CPF)
    pub cpf: String,
    #[serde(rename = "idade")]
    pub age: u32,
    #[serde(rename = "nivel")]
    #[schema(value_type = i16)]
    pub level: AccessLevel,
}

/// User as listed, with the access level label resolved
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserView {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "nivelLabel")]
    pub level_label: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        let level_label = user.level.label().to_string();
        Self { user, level_label }
    }
}

/// Validated user fields ready for insertion
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub cpf: String,
    pub age: u32,
    pub level: AccessLevel,
}

/// Fields to overwrite on an existing user
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub age: Option<u32>,
    pub level: Option<AccessLevel>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(rename = "nome")]
    #[validate(
        required(message = "nome is required"),
        length(min = 1, message = "nome is required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "cpf is required"),
        length(min = 1, message = "cpf is required")
    )]
    pub cpf: Option<String>,
    #[serde(rename = "idade", default, deserialize_with = "truthy_int")]
    #[validate(
        required(message = "idade is required"),
        range(min = 0, message = "idade must not be negative")
    )]
    pub age: Option<i64>,
    #[serde(rename = "nivel", default, deserialize_with = "truthy_int")]
    #[validate(required(message = "nivel is required"))]
    pub level: Option<i64>,
}

/// Update user request. Empty strings and the number zero leave the field
/// untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub cpf: Option<String>,
    #[serde(rename = "idade", default, deserialize_with = "truthy_int")]
    pub age: Option<i64>,
    #[serde(rename = "nivel", default, deserialize_with = "truthy_int")]
    pub level: Option<i64>,
}
