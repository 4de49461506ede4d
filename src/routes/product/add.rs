use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add product.", skip(form, pg_pool))]
#[post("/create-product")]
pub async fn add_handler(
    form: web::Json<forms::product::Add>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Product>::build().form_error(errors.to_string()));
    }

    let product: models::Product = form.into_inner().into();
    db::product::insert(pg_pool.get_ref(), product)
        .await
        .map(|product| {
            JsonResponse::build()
                .set_data(product)
                .created("Product created successfully")
        })
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
}
