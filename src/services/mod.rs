//! Business logic services

pub mod catalog;
pub mod libraries;
pub mod loans;
pub mod users;

use crate::{error::AppError, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub libraries: libraries::LibrariesService,
    pub loans: loans::LoansService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services over the same repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            libraries: libraries::LibrariesService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            users: users::UsersService::new(repository),
        }
    }
}

/// Convert a request integer into an id or count, rejecting negatives
pub(crate) fn to_u32(value: i64, field: &str) -> Result<u32, AppError> {
    u32::try_from(value)
        .map_err(|_| AppError::Validation(format!("{} must be a non-negative integer", field)))
}
