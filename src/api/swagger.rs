use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD Service API",
        version = "1.0.0",
        description = "Create, read, update and delete a single User document (name, email, password) stored in MongoDB.\n\n**Note:** passwords are stored and returned in plain text.",
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::UserPayload,
            crate::models::UserResponse,
            crate::models::ApiResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User CRUD endpoints. Every failure answers 400 with `{status:false, msg}`."),
        (name = "Health", description = "Health check with store connectivity."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/createUser", "/getUser/{id}", "/update/{id}", "/deleteUser/{id}", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
