use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document as stored in the `users` collection.
///
/// Fields are optional because an update writes absent fields as null.
/// The password is stored verbatim (no hashing).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `/createUser` and `/update/{id}`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated input for creating a user, all fields present and non-blank
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserPayload {
    /// Parses a raw request body.
    ///
    /// Returns `Ok(None)` for an empty body or an empty JSON object, and an
    /// error when the body is not a JSON object.
    /// Url-encoded form bodies are not parsed, so they end up as
    /// "Invalid Query is passed".
    pub fn from_body(body: &[u8]) -> Result<Option<Self>, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let payload: UserPayload = serde_json::from_slice(body)?;
        if payload.is_empty() {
            Ok(None)
        } else {
            Ok(Some(payload))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    /// Checks the fields required at creation
    pub fn into_new_user(self) -> Option<NewUser> {
        fn present(field: Option<String>) -> Option<String> {
            field.filter(|v| !v.trim().is_empty())
        }

        Some(NewUser {
            name: present(self.name)?,
            email: present(self.email)?,
            password: present(self.password)?,
        })
    }
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        User {
            id: None,
            name: Some(new_user.name),
            email: Some(new_user.email),
            password: Some(new_user.password),
        }
    }
}

/// User as rendered in API responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: u.name,
            email: u.email,
            password: u.password,
        }
    }
}

/// Envelope shared by every user route
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ApiResponse {
    pub status: bool,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl ApiResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        ApiResponse { status: true, msg: msg.into(), user: None }
    }

    pub fn with_user(msg: impl Into<String>, user: User) -> Self {
        ApiResponse { status: true, msg: msg.into(), user: Some(user.into()) }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        ApiResponse { status: false, msg: msg.into(), user: None }
    }
}
