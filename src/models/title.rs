//! Title (catalogued book) model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::input::{lenient_int, TagsInput};

/// Upper bound on a title's copy count
pub const MAX_TITLE_QUANTITY: u32 = 100_000;

/// Catalogued book. `total_quantity` always equals the number of copies
/// referencing the title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Title {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    pub tags: Vec<String>,
    #[serde(rename = "quantidade_total")]
    pub total_quantity: u32,
}

/// Title detail as used by edit forms
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TitleDetail {
    #[serde(flatten)]
    pub title: Title,
    /// Comma-joined tags
    #[serde(rename = "tagsString")]
    pub tags_string: String,
}

impl From<Title> for TitleDetail {
    fn from(title: Title) -> Self {
        let tags_string = title.tags.join(",");
        Self { title, tags_string }
    }
}

#[derive(Debug, Clone)]
pub struct NewTitle {
    pub name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub total_quantity: u32,
}

/// Changes to apply to a title. A new quantity reconciles the copies.
#[derive(Debug, Clone, Default)]
pub struct TitlePatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub total_quantity: Option<u32>,
    /// Library for newly allocated copies
    pub library_id: Option<u32>,
}

/// Create title request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTitle {
    #[serde(rename = "nome")]
    #[validate(
        required(message = "nome is required"),
        length(min = 1, message = "nome is required")
    )]
    pub name: Option<String>,
    #[serde(rename = "categoria")]
    #[validate(
        required(message = "categoria is required"),
        length(min = 1, message = "categoria is required")
    )]
    pub category: Option<String>,
    #[validate(required(message = "tags is required"))]
    pub tags: Option<TagsInput>,
    #[serde(rename = "quantidade_total", default, deserialize_with = "lenient_int")]
    #[validate(
        required(message = "quantidade_total is required"),
        range(min = 0, message = "quantidade_total must not be negative")
    )]
    pub total_quantity: Option<i64>,
    #[serde(rename = "idbiblioteca", default, deserialize_with = "lenient_int")]
    #[validate(
        required(message = "idbiblioteca is required"),
        range(min = 0, message = "idbiblioteca must not be negative")
    )]
    pub library_id: Option<i64>,
}

/// Update title request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTitle {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    pub tags: Option<TagsInput>,
    #[serde(rename = "quantidade_total", default, deserialize_with = "lenient_int")]
    pub total_quantity: Option<i64>,
    #[serde(rename = "idbiblioteca", default, deserialize_with = "lenient_int")]
    pub library_id: Option<i64>,
}

/// Body returned after deleting a title
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedTitle {
    pub mensagem: String,
    pub livro: Title,
}
