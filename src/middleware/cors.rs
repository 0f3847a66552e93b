// CORS configuration
//
// Any origin, method and header is accepted and credentials are allowed.
// `Any` can't be combined with credentials, so the request values are mirrored.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use axum::Router;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn apply_cors(router: Router) -> Router {
    router.layer(cors_layer())
}
