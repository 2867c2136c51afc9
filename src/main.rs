mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "4000".to_string());
    let mongodb_uri = env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017/curdtable".to_string());

    log::info!("Starting Curdtable Service...");
    log::info!("Database: {}", mongodb_uri);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("MongoDB connected successfully");
    log::info!("Server starting on {}:{}", host, port);
    log::info!("Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Undeserializable bodies get the same structured 400 shape as
        // schema validation failures
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let body = serde_json::json!({
                "success": false,
                "errors": [{ "field": "body", "message": err.to_string() }]
            });
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(body),
            )
            .into()
        });

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .app_data(json_config)
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // User CRUD
            .service(
                web::scope("/users")
                    .route("", web::post().to(api::users::create_user))
                    .route("", web::get().to(api::users::list_users))
                    .route("/{id}", web::put().to(api::users::update_user))
                    .route("/{id}", web::delete().to(api::users::delete_user)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
