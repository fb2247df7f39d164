//! OpenAPI document assembly.

use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorDetail};
use crate::routes;

/// OpenAPI specification for the service, served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DealerHub API",
        description = "Car dealership reviews: session auth, car catalog, and sentiment-enriched review proxying."
    ),
    paths(
        routes::auth::login,
        routes::auth::logout,
        routes::auth::register,
        routes::cars::get_cars,
        routes::dealers::get_dealers,
        routes::dealers::get_dealers_by_state,
        routes::dealers::get_dealer,
        routes::reviews::get_dealer_reviews,
        routes::reviews::add_review,
        routes::health::liveness,
        routes::health::readiness,
    ),
    components(schemas(
        routes::auth::LoginRequest,
        routes::auth::RegisterRequest,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "auth", description = "Sessions and accounts"),
        (name = "cars", description = "Local car catalog"),
        (name = "dealers", description = "Dealer-service proxy"),
        (name = "reviews", description = "Review aggregation and submission"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_route() {
        let spec = ApiDoc::openapi();
        for path in [
            "/login",
            "/logout",
            "/register",
            "/get_cars",
            "/get_dealers",
            "/get_dealers/{state}",
            "/dealer/{id}",
            "/reviews/dealer/{id}",
            "/add_review",
            "/health/liveness",
            "/health/readiness",
        ] {
            assert!(
                spec.paths.paths.contains_key(path),
                "missing path in OpenAPI spec: {path}"
            );
        }
    }
}
