//! Cross-origin policy.
//!
//! Exact-match allow-list plus any HTTPS subdomain of the trusted hosting
//! provider. Requests without an Origin header never enter the check
//! (non-browser clients are unaffected by the layer). Non-production
//! servers and the explicit `allow_any_origin` flag accept every origin.

use projects_config::{CorsConfig, TRUSTED_DEPLOY_SUFFIX};

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub fn build_cors_layer(cors: &CorsConfig, production: bool) -> CorsLayer {
    let allow_origin = if cors.allow_any_origin || !production {
        AllowOrigin::any()
    } else {
        let allowed = cors.allowed_origins.clone();
        AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin
                .to_str()
                .is_ok_and(|origin| is_allowed_origin(origin, &allowed))
        })
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub(crate) fn is_allowed_origin(origin: &str, allowed: &[String]) -> bool {
    if allowed.iter().any(|entry| entry == origin) {
        return true;
    }
    is_trusted_subdomain(origin)
}

fn is_trusted_subdomain(origin: &str) -> bool {
    let Some(host) = origin.strip_prefix("https://") else {
        return false;
    };
    // Origins carry no path; a non-empty label must precede the suffix
    host.ends_with(TRUSTED_DEPLOY_SUFFIX) && host.len() > TRUSTED_DEPLOY_SUFFIX.len()
}
