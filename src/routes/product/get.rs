use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Storefront list of products.", skip(pg_pool))]
#[get("/get-all-products")]
pub async fn list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    list(pg_pool.get_ref()).await
}

// Same listing; lives behind the admin guard so the back-office keeps
// working if the public endpoint is ever restricted.
#[tracing::instrument(name = "Admin list of products.", skip(pg_pool))]
#[get("/admin-get-all-products")]
pub async fn admin_list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    list(pg_pool.get_ref()).await
}

async fn list(pg_pool: &PgPool) -> Result<impl Responder> {
    db::product::fetch_all(pg_pool)
        .await
        .map(|products| {
            let count = products.len();
            JsonResponse::build()
                .set_count(count)
                .set_data(products)
                .ok("")
        })
        .map_err(|err| JsonResponse::<Vec<models::Product>>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Get single product.", skip(pg_pool))]
#[get("/get-single-product/{id}")]
pub async fn item_handler(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let product = db::product::fetch(pg_pool.get_ref(), path.0)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<models::Product>::build().not_found("Product not found")),
        })?;

    Ok(JsonResponse::build().set_data(product).ok(""))
}
