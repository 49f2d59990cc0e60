//! Route handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use taxprep_types::{
    badges, certificate_document, certificates, verify_license, Badge, Certificate, License,
    PendingLicense, PurchaseRequest, VerifiedLicense, VerifyRequest, PDF_MEDIA_TYPE,
};

use crate::error::ApiError;
use crate::router::AppState;

const PDF_DISPOSITION: &str = "attachment; filename=\"certificate.pdf\"";

/// A catalog certificate plus the path it downloads from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CertificateListing {
    #[serde(flatten)]
    certificate: Certificate,
    download_url: String,
}

pub(crate) async fn handle_health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub(crate) async fn handle_current_license() -> Json<License> {
    Json(License::current())
}

pub(crate) async fn handle_verify(
    State(state): State<AppState>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifiedLicense>, ApiError> {
    let Json(req) = body?;
    match verify_license(req, &state.valid_license_id) {
        Ok(verified) => Ok(Json(verified)),
        Err(e) => {
            tracing::debug!(error = %e, "license verification refused");
            Err(e.into())
        }
    }
}

pub(crate) async fn handle_purchase(
    body: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PendingLicense>), ApiError> {
    let Json(req) = body?;
    let pending = PendingLicense::from(req);
    tracing::info!(
        license_type = %pending.license_type,
        seats = ?pending.seats,
        "license purchase accepted"
    );
    Ok((StatusCode::CREATED, Json(pending)))
}

pub(crate) async fn handle_list_badges() -> Json<Vec<Badge>> {
    Json(badges())
}

pub(crate) async fn handle_list_certificates(
    State(state): State<AppState>,
) -> Json<Vec<CertificateListing>> {
    let listings = certificates()
        .into_iter()
        .map(|certificate| CertificateListing {
            download_url: format!(
                "{}/certificates/{}/download",
                state.api_prefix, certificate.id
            ),
            certificate,
        })
        .collect();
    Json(listings)
}

pub(crate) async fn handle_download_certificate(
    Path(certificate_id): Path<String>,
) -> Result<Response, ApiError> {
    let pdf = certificate_document(&certificate_id)?;
    Ok((
        [
            (header::CONTENT_TYPE, PDF_MEDIA_TYPE),
            (header::CONTENT_DISPOSITION, PDF_DISPOSITION),
            (header::CACHE_CONTROL, "no-store"),
        ],
        pdf,
    )
        .into_response())
}

pub(crate) async fn handle_not_found() -> ApiError {
    ApiError::NotFound("Not Found".into())
}

/// Gives axum's bare `405` the same JSON body as every other error.
pub(crate) async fn json_method_not_allowed(resp: Response) -> Response {
    if resp.status() != StatusCode::METHOD_NOT_ALLOWED {
        return resp;
    }
    let allow = resp.headers().get(header::ALLOW).cloned();
    let mut out = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        out.headers_mut().insert(header::ALLOW, allow);
    }
    out
}
