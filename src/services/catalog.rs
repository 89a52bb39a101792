//! Catalog management service: titles and their copies

use validator::Validate;

use super::to_u32;
use crate::{
    error::{AppError, AppResult},
    models::{
        input::{non_empty, TagsInput},
        title::{CreateTitle, DeletedTitle, NewTitle, TitlePatch, UpdateTitle},
        CopyDetail, CopyView, Title, TitleDetail,
    },
    repository::Repository,
};

const UNKNOWN: &str = "Desconhecido";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list_titles(&self) -> Vec<Title> {
        self.repository.read().titles_list().to_vec()
    }

    pub fn get_title(&self, id: u32) -> AppResult<TitleDetail> {
        self.repository
            .read()
            .titles_get(id)
            .map(|t| TitleDetail::from(t.clone()))
    }

    /// Create a title along with its copies at the given library
    pub fn create_title(&self, data: CreateTitle) -> AppResult<Title> {
        data.validate()?;

        let (Some(name), Some(category), Some(tags), Some(quantity), Some(library_id)) = (
            data.name,
            data.category,
            data.tags,
            data.total_quantity,
            data.library_id,
        ) else {
            return Err(AppError::Validation("Incomplete title data".to_string()));
        };

        let tags = tags.into_tags();
        if tags.is_empty() {
            return Err(AppError::Validation("tags is required".to_string()));
        }

        let new_title = NewTitle {
            name,
            category,
            tags,
            total_quantity: to_u32(quantity, "quantidade_total")?,
        };
        let library_id = to_u32(library_id, "idbiblioteca")?;

        let title = self.repository.write().titles_create(new_title, library_id)?;
        tracing::info!(
            title_id = title.id,
            copies = title.total_quantity,
            library_id,
            "Title created"
        );
        Ok(title)
    }

    /// Update a title. A changed `quantidade_total` allocates or reclaims
    /// copies; when it cannot be honoured nothing is changed.
    pub fn update_title(&self, id: u32, data: UpdateTitle) -> AppResult<Title> {
        let patch = TitlePatch {
            name: non_empty(data.name),
            category: non_empty(data.category),
            tags: data.tags.and_then(TagsInput::into_given_tags),
            total_quantity: data
                .total_quantity
                .map(|v| to_u32(v, "quantidade_total"))
                .transpose()?,
            library_id: data
                .library_id
                .map(|v| to_u32(v, "idbiblioteca"))
                .transpose()?,
        };

        match self.repository.write().titles_update(id, patch) {
            Ok(title) => {
                tracing::info!(
                    title_id = title.id,
                    quantity = title.total_quantity,
                    "Title updated"
                );
                Ok(title)
            }
            Err(e @ AppError::InsufficientAvailableCopies { .. }) => {
                tracing::warn!(title_id = id, "Title update rejected: {}", e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Delete a title and all of its copies
    pub fn delete_title(&self, id: u32) -> AppResult<DeletedTitle> {
        let (title, copies_removed) = self.repository.write().titles_delete(id)?;
        tracing::info!(title_id = title.id, copies_removed, "Title deleted");
        Ok(DeletedTitle {
            mensagem: "Deletado".to_string(),
            livro: title,
        })
    }

    /// All copies with title name, library code and loan status resolved
    pub fn list_copies(&self) -> Vec<CopyView> {
        let ledger = self.repository.read();
        let views = ledger
            .copies_list()
            .iter()
            .map(|copy| CopyView {
                title_name: ledger
                    .titles_get(copy.title_id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|_| UNKNOWN.to_string()),
                library_code: ledger
                    .libraries_get(copy.library_id)
                    .map(|l| l.registration_code.clone())
                    .unwrap_or_else(|_| UNKNOWN.to_string()),
                status: copy.status_label(),
                copy: copy.clone(),
            })
            .collect();
        views
    }

    pub fn get_copy(&self, id: u32) -> AppResult<CopyDetail> {
        let ledger = self.repository.read();
        let copy = ledger.copies_get(id)?.clone();
        let item_name = ledger
            .titles_get(copy.title_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|_| format!("Item #{}", id));
        Ok(CopyDetail {
            item: copy,
            item_name,
        })
    }
}
