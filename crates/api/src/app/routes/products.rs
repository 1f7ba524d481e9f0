use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use catalog_core::DomainError;
use catalog_infra::ProductStore;
use catalog_products::{NewProduct, ProductChanges, Sku};

use crate::app::{dto, errors};

/// Collection routes answer with or without a trailing slash.
pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route("/products/:sku", put(update_product).delete(delete_product))
}

fn not_found(sku: &Sku) -> axum::response::Response {
    errors::domain_error_to_response(DomainError::not_found(format!(
        "Product with SKU {sku} not found."
    )))
}

pub async fn list_products(
    Extension(store): Extension<Arc<dyn ProductStore>>,
) -> axum::response::Response {
    match store.list().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing products failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error while querying products.",
            )
        }
    }
}

pub async fn create_product(
    Extension(store): Extension<Arc<dyn ProductStore>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let product = match NewProduct::validate(
        body.sku,
        body.product_name,
        body.price,
        body.is_available,
    ) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let id = match store.insert(&product).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(sku = %product.sku, error = %e, "insert failed");
            return errors::store_error_to_response(
                "Failed to save product. The SKU may already exist.",
                e,
            );
        }
    };

    tracing::info!(sku = %product.sku, id, "product created");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Product created.",
            "id": id,
            "productName": product.product_name,
        })),
    )
        .into_response()
}

pub async fn update_product(
    Extension(store): Extension<Arc<dyn ProductStore>>,
    Path(sku): Path<String>,
    body: Result<Json<dto::UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let sku = Sku::new(sku);
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let is_available = body.availability();
    let changes = match ProductChanges::validate(body.product_name, body.price, is_available) {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let rows_affected = match store.update(&sku, &changes).await {
        Ok(n) => n,
        Err(e) => {
            tracing::error!(sku = %sku, error = %e, "update failed");
            return errors::store_error_to_response("Failed to update product.", e);
        }
    };

    if rows_affected == 0 {
        return not_found(&sku);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Product SKU {sku} updated."),
            "rowsAffected": rows_affected,
        })),
    )
        .into_response()
}

pub async fn delete_product(
    Extension(store): Extension<Arc<dyn ProductStore>>,
    Path(sku): Path<String>,
) -> axum::response::Response {
    let sku = Sku::new(sku);

    let rows_affected = match store.delete(&sku).await {
        Ok(n) => n,
        Err(e) => {
            tracing::error!(sku = %sku, error = %e, "delete failed");
            return errors::store_error_to_response("Failed to delete product.", e);
        }
    };

    if rows_affected == 0 {
        return not_found(&sku);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Product SKU {sku} deleted."),
            "rowsAffected": rows_affected,
        })),
    )
        .into_response()
}
