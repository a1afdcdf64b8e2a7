use crate::routes;

/// Body returned for GET /. The emoji is part of the contract.
pub const ROOT_GREETING: &str = "Spring Boot Backend is Running! 🍃";

/// GET / handler - Liveness greeting
///
/// Returns a static plain-text banner so a browser or curl can confirm
/// the backend is up. Always 200, no parameters, no side effects.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Backend is running", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn root_handler() -> &'static str {
    tracing::debug!("Serving root greeting");
    ROOT_GREETING
}
