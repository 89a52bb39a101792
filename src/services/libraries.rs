//! Library management service

use validator::Validate;

use super::to_u32;
use crate::{
    error::{AppError, AppResult},
    models::{
        input::non_empty,
        library::{CreateLibrary, LibraryPatch, NewLibrary, UpdateLibrary},
        Library,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LibrariesService {
    repository: Repository,
}

impl LibrariesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<Library> {
        self.repository.read().libraries_list().to_vec()
    }

    pub fn get_by_id(&self, id: u32) -> AppResult<Library> {
        self.repository.read().libraries_get(id).cloned()
    }

    pub fn create(&self, data: CreateLibrary) -> AppResult<Library> {
        data.validate()?;

        let (Some(registration_code), Some(capacity), Some(postal_code)) =
            (data.registration_code, data.capacity, data.postal_code)
        else {
            return Err(AppError::Validation("Incomplete library data".to_string()));
        };

        let library = self.repository.write().libraries_create(NewLibrary {
            registration_code,
            capacity: to_u32(capacity, "acervo")?,
            postal_code,
        })?;
        tracing::info!(
            library_id = library.id,
            cnpj = %library.registration_code,
            "Library created"
        );
        Ok(library)
    }

    pub fn update(&self, id: u32, data: UpdateLibrary) -> AppResult<Library> {
        let patch = LibraryPatch {
            registration_code: non_empty(data.registration_code),
            capacity: data.capacity.map(|v| to_u32(v, "acervo")).transpose()?,
            postal_code: non_empty(data.postal_code),
        };

        let library = self.repository.write().libraries_update(id, patch)?;
        tracing::info!(library_id = library.id, "Library updated");
        Ok(library)
    }

    /// Delete a library. Copies shelved there are left as they are.
    pub fn delete(&self, id: u32) -> AppResult<()> {
        let library = self.repository.write().libraries_delete(id)?;
        tracing::info!(library_id = library.id, "Library deleted");
        Ok(())
    }
}
