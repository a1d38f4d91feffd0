use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;

use crate::models::{ApiResponse, UserPayload};
use crate::repositories::UserRepository;
use crate::utils::AppError;

const INVALID_QUERY_MSG: &str = "Invalid Query is passed";
const INVALID_ID_MSG: &str = "Invalid ID is passed";

/// `{id}` segment of the user routes; absent on the bare routes
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Path)]
pub struct IdParam {
    /// User ObjectId (hex)
    id: Option<String>,
}

impl IdParam {
    fn require(&self) -> Result<&str, AppError> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::InvalidRequest(INVALID_ID_MSG.to_string()))
    }
}

/// POST /createUser - Cria usuário com email único
#[utoipa::path(
    post,
    path = "/createUser",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = ApiResponse),
        (status = 400, description = "Invalid body, duplicate email or store failure", body = ApiResponse)
    )
)]
pub async fn create_user(
    repo: web::Data<dyn UserRepository>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let new_user = UserPayload::from_body(&body)
        .ok()
        .flatten()
        .and_then(UserPayload::into_new_user)
        .ok_or_else(|| AppError::InvalidRequest(INVALID_QUERY_MSG.to_string()))?;

    log::info!("📝 POST /createUser - {}", new_user.email);

    if repo.find_by_email(&new_user.email).await?.is_some() {
        return Err(AppError::Conflict("Already User exists on email".to_string()));
    }

    let user = repo.create(new_user).await?;
    let id = user.id.map(|id| id.to_hex()).unwrap_or_default();

    log::info!("✅ User created: {}", id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/getUser/{}", id)))
        .json(ApiResponse::success("User is created successfully")))
}

/// GET /getUser/{id} - Busca usuário pelo id
#[utoipa::path(
    get,
    path = "/getUser/{id}",
    tag = "Users",
    responses(
        (status = 200, description = "User found", body = ApiResponse),
        (status = 400, description = "Missing id or user not found", body = ApiResponse)
    )
)]
pub async fn get_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<IdParam>,
) -> Result<HttpResponse, AppError> {
    let id = path.require()?;

    log::info!("🔍 GET /getUser/{}", id);

    match repo.find_by_id(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::with_user(
            format!("User retrived using id :: {}", id),
            user,
        ))),
        None => Err(AppError::NotFound("User not found in database".to_string())),
    }
}

/// POST /update/{id} - Sobrescreve name, email e password
///
/// Campos ausentes viram null. A unicidade do email não é verificada aqui,
/// apenas pelo índice do banco.
#[utoipa::path(
    post,
    path = "/update/{id}",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = ApiResponse),
        (status = 400, description = "Missing id, malformed body or user not found", body = ApiResponse)
    )
)]
pub async fn update_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<IdParam>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let id = path.require()?;

    let payload = UserPayload::from_body(&body)
        .map_err(|_| AppError::InvalidRequest(INVALID_QUERY_MSG.to_string()))?
        .unwrap_or_default();

    log::info!("🔧 POST /update/{}", id);

    match repo.update_by_id(id, payload).await? {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::with_user(
            format!("User Updated using id :: {}", id),
            user,
        ))),
        None => Err(AppError::NotFound("Invalid Updatation".to_string())),
    }
}

/// GET /deleteUser/{id} - Remove usuário e devolve o último estado
#[utoipa::path(
    get,
    path = "/deleteUser/{id}",
    tag = "Users",
    responses(
        (status = 200, description = "User deleted", body = ApiResponse),
        (status = 400, description = "Missing id or user not found", body = ApiResponse)
    )
)]
pub async fn delete_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<IdParam>,
) -> Result<HttpResponse, AppError> {
    let id = path.require()?;

    log::info!("🗑️  GET /deleteUser/{}", id);

    match repo.delete_by_id(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::with_user(
            format!("User Deleted using id :: {}", id),
            user,
        ))),
        None => Err(AppError::NotFound("Invalid Delete Operation".to_string())),
    }
}
