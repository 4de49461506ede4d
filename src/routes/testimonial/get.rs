use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::convert::Into;

#[tracing::instrument(name = "Storefront list of testimonials.", skip(pg_pool))]
#[get("/get-testimonials")]
pub async fn list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::testimonial::fetch_approved(pg_pool.get_ref())
        .await
        .map(|testimonials| {
            let testimonials = testimonials
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::testimonial::Public>>();

            let count = testimonials.len();
            JsonResponse::build()
                .set_count(count)
                .set_data(testimonials)
                .ok("")
        })
        .map_err(|err| {
            JsonResponse::<Vec<views::testimonial::Public>>::build().internal_server_error(err)
        })
}

#[tracing::instrument(name = "Admin list of testimonials.", skip(pg_pool))]
#[get("/admin-get-testimonials")]
pub async fn admin_list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::testimonial::fetch_all(pg_pool.get_ref())
        .await
        .map(|testimonials| {
            let testimonials = testimonials
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::testimonial::Admin>>();

            let count = testimonials.len();
            JsonResponse::build()
                .set_count(count)
                .set_data(testimonials)
                .ok("")
        })
        .map_err(|err| {
            JsonResponse::<Vec<views::testimonial::Admin>>::build().internal_server_error(err)
        })
}
