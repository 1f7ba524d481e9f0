use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::DomainError;
use catalog_infra::StoreError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, msg),
    }
}

/// Map a failed write to a response that carries the backend's own detail.
///
/// Duplicate keys are a client fault and answer 409; everything else is 500.
pub fn store_error_to_response(
    message: impl Into<String>,
    err: StoreError,
) -> axum::response::Response {
    let status = match err {
        StoreError::Duplicate(_) => StatusCode::CONFLICT,
        StoreError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    json_error_with_detail(status, message, err.detail())
}

/// Malformed JSON or wrongly-typed fields are validation failures.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error_with_detail(
        StatusCode::BAD_REQUEST,
        "Request body is not a valid product payload.",
        rejection.body_text(),
    )
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn json_error_with_detail(
    status: StatusCode,
    message: impl Into<String>,
    detail: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
            "error": detail.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_conflict_or_server_error() {
        let dup = store_error_to_response("save failed", StoreError::Duplicate("UNIQUE".into()));
        assert_eq!(dup.status(), StatusCode::CONFLICT);

        let backend =
            store_error_to_response("save failed", StoreError::Backend("disk I/O".into()));
        assert_eq!(backend.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn domain_errors_map_to_client_statuses() {
        assert_eq!(
            domain_error_to_response(DomainError::validation("missing")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_error_to_response(DomainError::not_found("SKU-1")).status(),
            StatusCode::NOT_FOUND
        );
    }
}
