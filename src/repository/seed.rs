//! Demo data installed at startup

use super::Ledger;
use crate::{
    error::AppResult,
    models::{
        library::NewLibrary,
        title::NewTitle,
        user::{AccessLevel, NewUser},
    },
};

impl Ledger {
    /// Ledger holding three users, one library and one title with ten
    /// available copies (ids 0 to 9).
    pub fn seeded() -> AppResult<Self> {
        let mut ledger = Ledger::new();

        // Seed user ids start at 1
        ledger.next_user_id = 1;
        let users = [
            ("Pessoa1", "123456789-01", 16, AccessLevel::Patron),
            ("Pessoa2", "123456759-01", 18, AccessLevel::Patron),
            ("Pessoa3", "123536759-01", 29, AccessLevel::Librarian),
        ];
        for (name, cpf, age, level) in users {
            ledger.users_create(NewUser {
                name: name.to_string(),
                cpf: cpf.to_string(),
                age,
                level,
            })?;
        }

        let library = ledger.libraries_create(NewLibrary {
            registration_code: "2y9167391693816".to_string(),
            capacity: 120,
            postal_code: "9873278-399".to_string(),
        })?;

        ledger.titles_create(
            NewTitle {
                name: "livro de romance".to_string(),
                category: "romance".to_string(),
                tags: vec!["classico".to_string(), "finaltriste".to_string()],
                total_quantity: 10,
            },
            library.id,
        )?;

        Ok(ledger)
    }
}
