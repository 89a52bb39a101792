//! Data models for Acervo

pub mod copy;
pub mod input;
pub mod library;
pub mod title;
pub mod user;

// Re-export commonly used types
pub use copy::{BookCopy, Borrower, CopyDetail, CopyView};
pub use library::Library;
pub use title::{Title, TitleDetail};
pub use user::{AccessLevel, User, UserView};
