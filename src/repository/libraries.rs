//! Library operations on the ledger

use super::{take_id, Ledger};
use crate::{
    error::{AppError, AppResult},
    models::{
        library::{LibraryPatch, NewLibrary},
        Library,
    },
};

impl Ledger {
    pub fn libraries_list(&self) -> &[Library] {
        &self.libraries
    }

    pub fn libraries_get(&self, id: u32) -> AppResult<&Library> {
        self.libraries
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Library {} not found", id)))
    }

    /// Library receiving new copies when none is named: the first one listed, or 0
    pub fn libraries_default_id(&self) -> u32 {
        self.libraries.first().map(|l| l.id).unwrap_or(0)
    }

    pub fn libraries_create(&mut self, data: NewLibrary) -> AppResult<Library> {
        let library = Library {
            id: take_id(&mut self.next_library_id, "library")?,
            registration_code: data.registration_code,
            capacity: data.capacity,
            postal_code: data.postal_code,
        };
        self.libraries.push(library.clone());
        Ok(library)
    }

    pub fn libraries_update(&mut self, id: u32, patch: LibraryPatch) -> AppResult<Library> {
        let library = self
            .libraries
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Library {} not found", id)))?;

        if let Some(code) = patch.registration_code {
            library.registration_code = code;
        }
        if let Some(capacity) = patch.capacity {
            library.capacity = capacity;
        }
        if let Some(postal_code) = patch.postal_code {
            library.postal_code = postal_code;
        }
        Ok(library.clone())
    }

    /// Remove a library. Copies shelved there keep their dangling reference.
    pub fn libraries_delete(&mut self, id: u32) -> AppResult<Library> {
        let index = self
            .libraries
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Library {} not found", id)))?;
        Ok(self.libraries.remove(index))
    }
}
