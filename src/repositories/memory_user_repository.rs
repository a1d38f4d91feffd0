use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::models::{NewUser, User, UserPayload};
use crate::utils::AppError;

/// Store stand-in for handler tests. Emulates the unique `email` index.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

fn duplicate_key(email: &Option<String>) -> AppError {
    AppError::DatabaseError(format!("E11000 duplicate key error: email {:?}", email))
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email.as_deref() == Some(email)).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        let mut user = User::from(user);
        if users.iter().any(|u| u.email == user.email) {
            return Err(duplicate_key(&user.email));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn update_by_id(&self, id: &str, payload: UserPayload) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut users = self.users.write().await;

        let clash = users
            .iter()
            .any(|u| u.id != Some(object_id) && u.email == payload.email);
        let Some(user) = users.iter_mut().find(|u| u.id == Some(object_id)) else {
            return Ok(None);
        };
        if clash {
            return Err(duplicate_key(&payload.email));
        }

        user.name = payload.name;
        user.email = payload.email;
        user.password = payload.password;
        Ok(Some(user.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut users = self.users.write().await;
        let position = users.iter().position(|u| u.id == Some(object_id));
        Ok(position.map(|index| users.remove(index)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store that finds nothing and refuses every write and ping
pub struct UnavailableUserRepository;

fn unavailable() -> AppError {
    AppError::DatabaseError("connection refused".to_string())
}

#[async_trait::async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Ok(None)
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<User>, AppError> {
        Ok(None)
    }

    async fn create(&self, _user: NewUser) -> Result<User, AppError> {
        Err(unavailable())
    }

    async fn update_by_id(&self, _id: &str, _payload: UserPayload) -> Result<Option<User>, AppError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<Option<User>, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}
