//! Copy (physical acervo entry) model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::input::lenient_int;

/// Wire value of a borrower reference meaning "on the shelf"
pub const AVAILABLE_SENTINEL: i64 = -1;

/// Who holds a copy. Serialized as a user id, or `-1` when available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Borrower {
    Available,
    User(u32),
}

impl TryFrom<i64> for Borrower {
    type Error = String;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        if v == AVAILABLE_SENTINEL {
            return Ok(Borrower::Available);
        }
        u32::try_from(v)
            .map(Borrower::User)
            .map_err(|_| format!("Invalid borrower id: {}", v))
    }
}

impl From<Borrower> for i64 {
    fn from(b: Borrower) -> Self {
        match b {
            Borrower::Available => AVAILABLE_SENTINEL,
            Borrower::User(id) => i64::from(id),
        }
    }
}

/// Physical copy of a title, shelved at a library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookCopy {
    pub id: u32,
    #[serde(rename = "idlivro")]
    pub title_id: u32,
    #[serde(rename = "idbiblioteca")]
    pub library_id: u32,
    #[serde(rename = "idUsuario")]
    #[schema(value_type = i64)]
    pub borrower: Borrower,
}

impl BookCopy {
    pub fn is_available(&self) -> bool {
        self.borrower == Borrower::Available
    }

    pub fn status_label(&self) -> String {
        match self.borrower {
            Borrower::Available => "Disponível".to_string(),
            Borrower::User(id) => format!("Emprestado (User {})", id),
        }
    }
}

/// Copy as listed, with title and library resolved
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CopyView {
    #[serde(flatten)]
    pub copy: BookCopy,
    #[serde(rename = "nomeLivro")]
    pub title_name: String,
    #[serde(rename = "cnpjBiblioteca")]
    pub library_code: String,
    pub status: String,
}

/// Single copy with the display name of its title
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CopyDetail {
    pub item: BookCopy,
    #[serde(rename = "itemName")]
    pub item_name: String,
}

/// Borrow or return request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCopyStatus {
    /// User id, or -1 to mark the copy available
    #[serde(rename = "idUsuario", default, deserialize_with = "lenient_int")]
    pub user_id: Option<i64>,
}
