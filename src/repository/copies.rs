//! Copy operations: allocation and the borrow-status toggle

use super::Ledger;
use crate::{
    error::{AppError, AppResult},
    models::{BookCopy, Borrower},
};

impl Ledger {
    pub fn copies_list(&self) -> &[BookCopy] {
        &self.copies
    }

    pub fn copies_get(&self, id: u32) -> AppResult<&BookCopy> {
        self.copies
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Copy {} not found", id)))
    }

    /// Copies of a title in ascending id order
    pub fn copies_of_title(&self, title_id: u32) -> impl Iterator<Item = &BookCopy> {
        self.copies.iter().filter(move |c| c.title_id == title_id)
    }

    /// Append `count` available copies of a title, or none if the copy
    /// counter cannot cover them all
    pub(super) fn allocate_copies(
        &mut self,
        title_id: u32,
        library_id: u32,
        count: u32,
    ) -> AppResult<()> {
        let end = self.copy_ids_end(count)?;
        self.copies.extend((self.next_copy_id..end).map(|id| BookCopy {
            id,
            title_id,
            library_id,
            borrower: Borrower::Available,
        }));
        self.next_copy_id = end;
        Ok(())
    }

    /// Copy counter value after `count` more allocations
    pub(super) fn copy_ids_end(&self, count: u32) -> AppResult<u32> {
        self.next_copy_id
            .checked_add(count)
            .ok_or_else(|| AppError::Validation(format!("No ids left for {} more copies", count)))
    }

    /// Lend a copy to a user, or put it back on the shelf.
    ///
    /// The previous borrower is overwritten without checks; only the new
    /// borrower must exist.
    pub fn copies_set_borrower(&mut self, id: u32, borrower: Borrower) -> AppResult<BookCopy> {
        let index = self
            .copies
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Copy {} not found", id)))?;

        if let Borrower::User(user_id) = borrower {
            if !self.users_exists(user_id) {
                return Err(AppError::UserNotFound(user_id));
            }
        }

        let copy = &mut self.copies[index];
        copy.borrower = borrower;
        Ok(copy.clone())
    }
}
