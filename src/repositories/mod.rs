//! Persistence port for User documents.

pub mod mongo_user_repository;
#[cfg(test)]
pub mod memory_user_repository;

pub use mongo_user_repository::MongoUserRepository;
#[cfg(test)]
pub use memory_user_repository::{InMemoryUserRepository, UnavailableUserRepository};

use crate::models::{NewUser, User, UserPayload};
use crate::utils::AppError;

/// Store operations a handler depends on.
///
/// Ids are taken as the raw path text; one that does not parse as a store id
/// simply does not resolve (`Ok(None)`).
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn create(&self, user: NewUser) -> Result<User, AppError>;
    /// Overwrites name, email and password; absent fields become null.
    /// Returns the record after the update.
    async fn update_by_id(&self, id: &str, payload: UserPayload) -> Result<Option<User>, AppError>;
    /// Returns the record as it was before removal
    async fn delete_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn ping(&self) -> Result<(), AppError>;
}
