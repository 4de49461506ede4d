use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Edit product.", skip(form, pg_pool))]
#[put("/edit-product/{id}")]
pub async fn update_handler(
    path: web::Path<(i32,)>,
    form: web::Json<forms::product::AdminEdit>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Product>::build().form_error(errors.to_string()));
    }

    let mut product = db::product::fetch(pg_pool.get_ref(), path.0)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<models::Product>::build().not_found("Product not found")),
        })?;

    form.into_inner().update(&mut product);

    db::product::update(pg_pool.get_ref(), product)
        .await
        .map(|product| {
            JsonResponse::build()
                .set_data(product)
                .ok("Product updated successfully")
        })
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
}
