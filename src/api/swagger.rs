use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Curdtable Service API",
        version = "1.0.0",
        description = "CRUD API for the User resource backed by MongoDB.\n\n**Operations:** create, list, replace and delete users in the `users` collection. No authentication."
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::UserPayload,
            crate::models::UserResponse,
            crate::utils::ValidationIssue,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "CRUD endpoints for the users collection."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status.")
    )
)]
pub struct ApiDoc;
