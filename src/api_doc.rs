use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-backend API",
        version = "1.0.0",
        description = "A minimal greeting backend for a local frontend"
    ),
    paths(
        handlers::root::root_handler,
        handlers::hello::hello_handler
    ),
    tags(
        (name = "greeting", description = "Static greeting endpoints")
    )
)]
pub struct ApiDoc;
