use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add testimonial.", skip(form, pg_pool))]
#[post("/create-testimonial")]
pub async fn add_handler(
    form: web::Json<forms::testimonial::Add>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Testimonial>::build().form_error(errors.to_string()));
    }

    let testimonial: models::Testimonial = form.into_inner().into();
    db::testimonial::insert(pg_pool.get_ref(), testimonial)
        .await
        .map(|testimonial| {
            JsonResponse::build()
                .set_data(Into::<views::testimonial::Public>::into(testimonial))
                .created("Submitted successfully. It will appear after admin approval.")
        })
        .map_err(|err| JsonResponse::<models::Testimonial>::build().internal_server_error(err))
}
