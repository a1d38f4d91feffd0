use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use super::UserRepository;
use crate::database::{MongoDB, USERS_COLLECTION};
use crate::models::{NewUser, User, UserPayload};
use crate::utils::AppError;

/// `UserRepository` over the MongoDB `users` collection
#[derive(Clone)]
pub struct MongoUserRepository {
    db: MongoDB,
    users: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            db: db.clone(),
            users: db.collection::<User>(USERS_COLLECTION),
        }
    }
}

fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

#[async_trait::async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Some(object_id) = parse_id(id) else {
            return Ok(None);
        };

        Ok(self.users.find_one(doc! { "_id": object_id }).await?)
    }

    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut user = User::from(user);
        let result = self.users.insert_one(&user).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("Inserted user has no ObjectId".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn update_by_id(&self, id: &str, payload: UserPayload) -> Result<Option<User>, AppError> {
        let Some(object_id) = parse_id(id) else {
            return Ok(None);
        };

        // Full overwrite: None becomes a BSON null
        let update = doc! {
            "$set": {
                "name": payload.name,
                "email": payload.email,
                "password": payload.password,
            }
        };

        Ok(self
            .users
            .find_one_and_update(doc! { "_id": object_id }, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Some(object_id) = parse_id(id) else {
            return Ok(None);
        };

        Ok(self.users.find_one_and_delete(doc! { "_id": object_id }).await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(self.db.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongo_round_trip() {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://127.0.0.1:27017/cruddb_test".to_string());

        let db = MongoDB::new(&uri).await.expect("Failed to build MongoDB client");
        let repo = MongoUserRepository::new(&db);
        let email = format!("{}@example.com", ObjectId::new().to_hex());

        let created = repo
            .create(NewUser { name: "A".into(), email: email.clone(), password: "p".into() })
            .await
            .unwrap();
        let id = created.id.unwrap().to_hex();

        let found = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);

        let updated = repo
            .update_by_id(&id, UserPayload { name: Some("B".into()), email: Some(email.clone()), password: None })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("B"));
        assert_eq!(updated.password, None);

        assert!(repo.delete_by_id(&id).await.unwrap().is_some());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }
}
