//! User operations on the ledger

use super::{take_id, Ledger};
use crate::{
    error::{AppError, AppResult},
    models::{
        user::{NewUser, UserPatch},
        User,
    },
};

impl Ledger {
    pub fn users_list(&self) -> &[User] {
        &self.users
    }

    pub fn users_get(&self, id: u32) -> AppResult<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(AppError::UserNotFound(id))
    }

    pub fn users_exists(&self, id: u32) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    pub fn users_create(&mut self, data: NewUser) -> AppResult<User> {
        let user = User {
            id: take_id(&mut self.next_user_id, "user")?,
            name: data.name,
            cpf: data.cpf,
            age: data.age,
            level: data.level,
        };
        self.users.push(user.clone());
        Ok(user)
    }

    /// Overwrite the fields present in `patch`
    pub fn users_update(&mut self, id: u32, patch: UserPatch) -> AppResult<User> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::UserNotFound(id))?;

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(cpf) = patch.cpf {
            user.cpf = cpf;
        }
        if let Some(age) = patch.age {
            user.age = age;
        }
        if let Some(level) = patch.level {
            user.level = level;
        }
        Ok(user.clone())
    }

    /// Remove a user. Copies they borrowed keep pointing at the old id.
    pub fn users_delete(&mut self, id: u32) -> AppResult<User> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AppError::UserNotFound(id))?;
        Ok(self.users.remove(index))
    }
}
