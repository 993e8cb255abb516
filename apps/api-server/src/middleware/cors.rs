//! Permissive CORS headers for browser clients.

use actix_web::HttpResponse;
use actix_web::middleware::DefaultHeaders;

pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Headers attached to every response, including errors and preflights.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", ALLOW_HEADERS))
}

/// OPTIONS handler for every resource a browser calls with credentials.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}
