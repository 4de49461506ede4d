use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Testimonial stats.", skip(pg_pool))]
#[get("/testimonial-stats")]
pub async fn stats_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::testimonial::stats(pg_pool.get_ref())
        .await
        .map(|stats| JsonResponse::build().set_data(stats).ok(""))
        .map_err(|err| {
            JsonResponse::<models::TestimonialStats>::build().internal_server_error(err)
        })
}
