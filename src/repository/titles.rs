//! Title operations and copy reconciliation
//!
//! A title's `total_quantity` is the number of copies referencing it.
//! Creating a title allocates its copies; changing the quantity allocates
//! or reclaims copies so the two stay equal.

use super::{take_id, Ledger};
use crate::{
    error::{AppError, AppResult},
    models::{
        title::{NewTitle, TitlePatch, MAX_TITLE_QUANTITY},
        Title,
    },
};

fn check_quantity(quantity: u32) -> AppResult<()> {
    if quantity > MAX_TITLE_QUANTITY {
        return Err(AppError::Validation(format!(
            "quantidade_total must not exceed {}",
            MAX_TITLE_QUANTITY
        )));
    }
    Ok(())
}

/// Copy changes computed before a title update is applied
enum Reconciliation {
    Keep,
    Allocate { count: u32, library_id: u32 },
    /// Ids of the copies to remove, ascending
    Reclaim(Vec<u32>),
}

impl Ledger {
    pub fn titles_list(&self) -> &[Title] {
        &self.titles
    }

    pub fn titles_get(&self, id: u32) -> AppResult<&Title> {
        self.titles
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Title {} not found", id)))
    }

    fn title_index(&self, id: u32) -> AppResult<usize> {
        self.titles
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Title {} not found", id)))
    }

    /// Create a title and `total_quantity` available copies at `library_id`.
    ///
    /// Nothing is recorded if the quantity is out of range or the id
    /// counters are exhausted.
    pub fn titles_create(&mut self, data: NewTitle, library_id: u32) -> AppResult<Title> {
        check_quantity(data.total_quantity)?;
        self.copy_ids_end(data.total_quantity)?;

        let title = Title {
            id: take_id(&mut self.next_title_id, "title")?,
            name: data.name,
            category: data.category,
            tags: data.tags,
            total_quantity: data.total_quantity,
        };
        self.allocate_copies(title.id, library_id, title.total_quantity)?;
        self.titles.push(title.clone());
        Ok(title)
    }

    /// Apply `patch` to a title, reconciling copies when the quantity changes.
    ///
    /// A reduction reclaims the lowest-id available copies. If not enough
    /// copies are available the update fails and nothing is modified.
    pub fn titles_update(&mut self, id: u32, patch: TitlePatch) -> AppResult<Title> {
        let index = self.title_index(id)?;
        let plan = self.plan_reconciliation(id, self.titles[index].total_quantity, &patch)?;

        match plan {
            Reconciliation::Keep => {}
            Reconciliation::Allocate { count, library_id } => {
                self.allocate_copies(id, library_id, count)?
            }
            Reconciliation::Reclaim(ids) => {
                self.copies.retain(|c| ids.binary_search(&c.id).is_err())
            }
        }

        let title = &mut self.titles[index];
        if let Some(name) = patch.name {
            title.name = name;
        }
        if let Some(category) = patch.category {
            title.category = category;
        }
        if let Some(tags) = patch.tags {
            title.tags = tags;
        }
        if let Some(quantity) = patch.total_quantity {
            title.total_quantity = quantity;
        }
        Ok(title.clone())
    }

    fn plan_reconciliation(
        &self,
        title_id: u32,
        current: u32,
        patch: &TitlePatch,
    ) -> AppResult<Reconciliation> {
        let Some(target) = patch.total_quantity else {
            return Ok(Reconciliation::Keep);
        };
        check_quantity(target)?;

        if target > current {
            let library_id = patch
                .library_id
                .unwrap_or_else(|| self.libraries_default_id());
            return Ok(Reconciliation::Allocate {
                count: target - current,
                library_id,
            });
        }

        if target < current {
            let requested = (current - target) as usize;
            let available: Vec<u32> = self
                .copies_of_title(title_id)
                .filter(|c| c.is_available())
                .map(|c| c.id)
                .collect();
            if available.len() < requested {
                return Err(AppError::InsufficientAvailableCopies {
                    title_id,
                    requested,
                    available: available.len(),
                });
            }
            return Ok(Reconciliation::Reclaim(
                available.into_iter().take(requested).collect(),
            ));
        }

        Ok(Reconciliation::Keep)
    }

    /// Remove a title and every copy of it, borrowed or not.
    ///
    /// Returns the removed title and the number of copies removed with it.
    pub fn titles_delete(&mut self, id: u32) -> AppResult<(Title, usize)> {
        let index = self.title_index(id)?;
        let title = self.titles.remove(index);
        let before = self.copies.len();
        self.copies.retain(|c| c.title_id != id);
        Ok((title, before - self.copies.len()))
    }
}
