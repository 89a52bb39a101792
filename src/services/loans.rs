//! Loan management service: lending and returning copies

use crate::{
    error::{AppError, AppResult},
    models::{copy::UpdateCopyStatus, BookCopy, Borrower},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Set who holds a copy: a user id lends it, `-1` returns it.
    ///
    /// The copy must exist, and so must the user when lending. A copy
    /// already on loan is simply reassigned.
    pub fn set_borrower(&self, copy_id: u32, data: UpdateCopyStatus) -> AppResult<BookCopy> {
        let mut ledger = self.repository.write();
        ledger.copies_get(copy_id)?;

        let user_id = data
            .user_id
            .ok_or_else(|| AppError::Validation("idUsuario is required".to_string()))?;
        let borrower = Borrower::try_from(user_id).map_err(AppError::Validation)?;

        let copy = ledger.copies_set_borrower(copy_id, borrower)?;
        drop(ledger);
        match copy.borrower {
            Borrower::Available => tracing::info!(copy_id, "Copy returned"),
            Borrower::User(user_id) => tracing::info!(copy_id, user_id, "Copy lent"),
        }
        Ok(copy)
    }
}
