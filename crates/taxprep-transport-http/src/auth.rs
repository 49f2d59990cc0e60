//! Bearer token access gate.
//!
//! The gate only checks that a credential is present and shaped like
//! `Bearer <token>`; the token itself is never validated.

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;

const SCHEME: &str = "Bearer";

/// Per-request outcome of the access gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthDecision {
    /// Whether the handler may run.
    pub allowed: bool,
}

/// Decides on a raw `Authorization` header value.
///
/// Allows iff the value starts with `Bearer` (any case), then whitespace,
/// then at least one non-whitespace character.
pub fn check_bearer(raw: Option<&str>) -> AuthDecision {
    let allowed = raw
        .and_then(|value| {
            let scheme = value.get(..SCHEME.len())?;
            scheme
                .eq_ignore_ascii_case(SCHEME)
                .then(|| &value[SCHEME.len()..])
        })
        .is_some_and(|rest| {
            rest.starts_with(char::is_whitespace) && !rest.trim_start().is_empty()
        });
    AuthDecision { allowed }
}

/// Applies [`check_bearer`] to a header map.
///
/// A value that is not visible ASCII counts as absent.
pub fn decide(headers: &HeaderMap) -> AuthDecision {
    let raw = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    check_bearer(raw)
}

/// Route layer rejecting requests the gate denies with `401`.
pub(crate) async fn require_bearer(req: Request, next: Next) -> Result<Response, ApiError> {
    if !decide(req.headers()).allowed {
        tracing::debug!(path = %req.uri().path(), "bearer gate denied request");
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn valid_bearer_passes() {
        assert!(check_bearer(Some("Bearer secret123")).allowed);
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert!(check_bearer(Some("bearer token")).allowed);
        assert!(check_bearer(Some("BEARER token")).allowed);
        assert!(check_bearer(Some("bEaReR token")).allowed);
    }

    #[test]
    fn any_whitespace_run_separates_token() {
        assert!(check_bearer(Some("Bearer   token")).allowed);
        assert!(check_bearer(Some("Bearer\ttoken")).allowed);
    }

    #[test]
    fn trailing_text_after_token_is_ignored() {
        assert!(check_bearer(Some("Bearer token extra")).allowed);
    }

    #[test]
    fn missing_header_rejected() {
        assert!(!check_bearer(None).allowed);
    }

    #[test]
    fn empty_header_rejected() {
        assert!(!check_bearer(Some("")).allowed);
    }

    #[test]
    fn bare_scheme_rejected() {
        assert!(!check_bearer(Some("Bearer")).allowed);
        assert!(!check_bearer(Some("Bearer ")).allowed);
        assert!(!check_bearer(Some("Bearer \t ")).allowed);
    }

    #[test]
    fn scheme_must_be_followed_by_whitespace() {
        assert!(!check_bearer(Some("Bearertoken")).allowed);
    }

    #[test]
    fn leading_whitespace_rejected() {
        assert!(!check_bearer(Some(" Bearer token")).allowed);
    }

    #[test]
    fn basic_auth_scheme_rejected() {
        assert!(!check_bearer(Some("Basic secret123")).allowed);
    }

    #[test]
    fn non_ascii_scheme_rejected() {
        assert!(!check_bearer(Some("Béarer x")).allowed);
    }

    #[test]
    fn decide_reads_authorization_header() {
        let mut headers = HeaderMap::new();
        assert!(!decide(&headers).allowed);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer token"),
        );
        assert!(decide(&headers).allowed);
    }

    #[test]
    fn decide_treats_opaque_bytes_as_absent() {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_bytes(b"Bearer \xfftoken").expect("header value");
        headers.insert(header::AUTHORIZATION, value);
        assert!(!decide(&headers).allowed);
    }
}
