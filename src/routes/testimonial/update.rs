use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Edit testimonial.", skip(form, pg_pool))]
#[put("/update-testimonial/{id}")]
pub async fn update_handler(
    path: web::Path<(i32,)>,
    form: web::Json<forms::testimonial::AdminEdit>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(
            JsonResponse::<views::testimonial::Admin>::build().form_error(errors.to_string())
        );
    }

    let mut testimonial = db::testimonial::fetch(pg_pool.get_ref(), path.0)
        .await
        .map_err(|err| JsonResponse::<views::testimonial::Admin>::build().internal_server_error(err))
        .and_then(|testimonial| match testimonial {
            Some(testimonial) => Ok(testimonial),
            None => Err(JsonResponse::<views::testimonial::Admin>::build()
                .not_found("Testimonial not found")),
        })?;

    form.into_inner().update(&mut testimonial);

    db::testimonial::update(pg_pool.get_ref(), testimonial)
        .await
        .map(|testimonial| {
            JsonResponse::build()
                .set_data(Into::<views::testimonial::Admin>::into(testimonial))
                .ok("Testimonial updated successfully")
        })
        .map_err(|err| {
            JsonResponse::<views::testimonial::Admin>::build().internal_server_error(err)
        })
}
