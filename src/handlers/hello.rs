use crate::routes;

/// Body returned for GET /api/hello.
pub const HELLO_GREETING: &str = "Hello from Spring Boot!";

/// GET /api/hello handler - Greeting for the frontend
///
/// Returns a static plain-text greeting the frontend fetches to verify it can
/// reach the backend. Always 200, no parameters, no side effects.
#[utoipa::path(
    get,
    path = routes::API_HELLO,
    responses(
        (status = 200, description = "Greeting message", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn hello_handler() -> &'static str {
    tracing::debug!("Serving hello greeting");
    HELLO_GREETING
}
