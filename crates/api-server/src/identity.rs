use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

#[cfg(test)]
#[path = "identity_tests.rs"]
mod identity_tests;

/// The investor a request runs on behalf of. Inserted into request
/// extensions by `identity_middleware`; handlers that need it pass the
/// id onward as an explicit argument, never as ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
}

/// Resolve the caller from the `X-User-Id` header set by the auth
/// gateway in front of this service. Requests without a usable header
/// continue anonymously; endpoints that require identity reject those
/// with 401.
pub async fn identity_middleware(mut request: Request, next: Next) -> Response {
    if let Some(user) = user_from_headers(request.headers()) {
        request.extensions_mut().insert(user);
    }
    next.run(request).await
}

pub(crate) fn user_from_headers(headers: &HeaderMap) -> Option<AuthenticatedUser> {
    let raw = headers.get("X-User-Id")?.to_str().ok()?;
    let id: i64 = raw.trim().parse().ok()?;
    if id <= 0 {
        return None;
    }
    Some(AuthenticatedUser { id })
}
