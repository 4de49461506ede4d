use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{put, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Approve testimonial.", skip(pg_pool))]
#[put("/approve-testimonial/{id}")]
pub async fn approve_handler(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let mut testimonial = db::testimonial::fetch(pg_pool.get_ref(), path.0)
        .await
        .map_err(|err| JsonResponse::<views::testimonial::Admin>::build().internal_server_error(err))
        .and_then(|testimonial| match testimonial {
            Some(testimonial) => Ok(testimonial),
            None => Err(JsonResponse::<views::testimonial::Admin>::build()
                .not_found("Testimonial not found")),
        })?;

    testimonial.approved = true;

    db::testimonial::update(pg_pool.get_ref(), testimonial)
        .await
        .map(|testimonial| {
            JsonResponse::build()
                .set_data(Into::<views::testimonial::Admin>::into(testimonial))
                .ok("Testimonial approved successfully")
        })
        .map_err(|err| {
            JsonResponse::<views::testimonial::Admin>::build().internal_server_error(err)
        })
}
