use crate::connectors::MediaServiceConnector;
use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Delete product.", skip(pg_pool, media_service))]
#[delete("/delete-product/{id}")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
    media_service: web::Data<Arc<dyn MediaServiceConnector>>,
) -> Result<impl Responder> {
    let product = db::product::fetch(pg_pool.get_ref(), path.0)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<models::Product>::build().not_found("Product not found")),
        })?;

    db::product::delete(pg_pool.get_ref(), product.id)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))?;

    // The listing is gone either way; a stale remote image is only worth
    // a warning.
    if let Err(err) = media_service.delete_image(&product.image).await {
        tracing::warn!("Failed to delete image for product {}: {}", product.id, err);
    }

    Ok(JsonResponse::<()>::build().ok("Product deleted successfully"))
}
