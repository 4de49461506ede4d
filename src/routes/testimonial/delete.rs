use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete testimonial.", skip(pg_pool))]
#[delete("/delete-testimonial/{id}")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let testimonial = db::testimonial::fetch(pg_pool.get_ref(), path.0)
        .await
        .map_err(|err| JsonResponse::<views::testimonial::Admin>::build().internal_server_error(err))
        .and_then(|testimonial| match testimonial {
            Some(testimonial) => Ok(testimonial),
            None => Err(JsonResponse::<views::testimonial::Admin>::build()
                .not_found("Testimonial not found")),
        })?;

    db::testimonial::delete(pg_pool.get_ref(), testimonial.id)
        .await
        .map_err(|err| {
            JsonResponse::<views::testimonial::Admin>::build().internal_server_error(err)
        })?;

    Ok(JsonResponse::<()>::build().ok("Testimonial deleted successfully"))
}
