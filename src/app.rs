use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::handlers;
use crate::routes;
use anyhow::{Context, Result};
use axum::{http::HeaderValue, http::Method, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router.
///
/// The CORS policy is scoped to the single configured frontend origin and to
/// GET, matching the only method the API exposes. The layer also answers
/// preflight requests. Everything else is axum defaults (unknown paths 404).
pub fn app(config: &Config) -> Result<Router> {
    let allowed_origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .context("FRONTEND_ORIGIN is not a valid header value")?;

    // AllowOrigin::list matches against the request's Origin header, so the
    // allow-origin header is only emitted for the configured frontend.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods([Method::GET]);

    let router = Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::API_HELLO, get(handlers::hello_handler))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
