//! User management service

use validator::Validate;

use super::to_u32;
use crate::{
    error::{AppError, AppResult},
    models::{
        input::non_empty,
        user::{AccessLevel, AccessLevelEntry, CreateUser, NewUser, UpdateUser, UserPatch},
        User, UserView,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list_users(&self) -> Vec<UserView> {
        self.repository
            .read()
            .users_list()
            .iter()
            .cloned()
            .map(UserView::from)
            .collect()
    }

    pub fn get_by_id(&self, id: u32) -> AppResult<User> {
        self.repository.read().users_get(id).cloned()
    }

    pub fn access_levels(&self) -> Vec<AccessLevelEntry> {
        AccessLevel::ALL.into_iter().map(AccessLevelEntry::from).collect()
    }

    /// Create a user. Empty strings and the number zero count as missing.
    pub fn create_user(&self, data: CreateUser) -> AppResult<User> {
        data.validate()?;

        let (Some(name), Some(cpf), Some(age), Some(level)) =
            (data.name, data.cpf, data.age, data.level)
        else {
            return Err(AppError::Validation("Incomplete user data".to_string()));
        };

        let new_user = NewUser {
            name,
            cpf,
            age: to_u32(age, "idade")?,
            level: AccessLevel::try_from(level).map_err(AppError::Validation)?,
        };

        let user = self.repository.write().users_create(new_user)?;
        tracing::info!(user_id = user.id, level = %user.level, "User created");
        Ok(user)
    }

    /// Update a user. Only truthy fields overwrite: empty strings are
    /// skipped here, zero numbers while decoding.
    pub fn update_user(&self, id: u32, data: UpdateUser) -> AppResult<User> {
        let patch = UserPatch {
            name: non_empty(data.name),
            cpf: non_empty(data.cpf),
            age: data.age.map(|v| to_u32(v, "idade")).transpose()?,
            level: data
                .level
                .map(|v| AccessLevel::try_from(v).map_err(AppError::Validation))
                .transpose()?,
        };

        let user = self.repository.write().users_update(id, patch)?;
        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    pub fn delete_user(&self, id: u32) -> AppResult<()> {
        let user = self.repository.write().users_delete(id)?;
        tracing::info!(user_id = user.id, "User deleted");
        Ok(())
    }
}
