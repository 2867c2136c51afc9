use actix_web::{web, HttpResponse, Responder};
use crate::{
    api::metrics::{increment_error_count, increment_request_count},
    database::MongoDB,
    models::UserPayload,
    services::user_service,
    utils::AppError,
};

/// Single place where service errors become status codes.
fn error_response(err: AppError) -> HttpResponse {
    increment_error_count();
    match err {
        AppError::Validation(issues) => HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "errors": issues
        })),
        AppError::Database(msg) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": msg
        })),
    }
}

/// POST /users - Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = crate::models::UserResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    db: web::Data<MongoDB>,
    payload: web::Json<UserPayload>,
) -> impl Responder {
    increment_request_count();
    log::info!("POST /users");

    match user_service::create_user(&db, payload.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => {
            log::warn!("Failed to create user: {}", e);
            error_response(e)
        }
    }
}

/// GET /users - List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<crate::models::UserResponse>),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_users(db: web::Data<MongoDB>) -> impl Responder {
    increment_request_count();
    log::info!("GET /users");

    match user_service::list_users(&db).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            log::error!("Failed to list users: {}", e);
            error_response(e)
        }
    }
}

/// PUT /users/{id} - Replace a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    request_body = UserPayload,
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User updated", body = crate::models::UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "No user with this id")
    )
)]
pub async fn update_user(
    db: web::Data<MongoDB>,
    id: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> impl Responder {
    increment_request_count();
    log::info!("PUT /users/{}", id);

    match user_service::update_user(&db, &id, payload.into_inner()).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            log::warn!("Failed to update user {}: {}", id, e);
            error_response(e)
        }
    }
}

/// DELETE /users/{id} - Remove a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = crate::models::UserResponse),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Store error")
    )
)]
pub async fn delete_user(db: web::Data<MongoDB>, id: web::Path<String>) -> impl Responder {
    increment_request_count();
    log::info!("DELETE /users/{}", id);

    match user_service::delete_user(&db, &id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            log::error!("Failed to delete user {}: {}", id, e);
            error_response(e)
        }
    }
}
