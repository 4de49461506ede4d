use crate::db;
use crate::helpers::JsonResponse;
use crate::services::analytics;
use actix_web::{get, web, Responder, Result};
use chrono::Utc;
use sqlx::PgPool;

// The aggregation itself is pure; this handler only fetches the snapshot
// and serializes the result.
#[tracing::instrument(name = "Dashboard stats.", skip(pg_pool))]
#[get("/dashboard-stats")]
pub async fn stats_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let products = db::product::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<analytics::Dashboard>::build().internal_server_error(err))?;

    let dashboard = analytics::dashboard(&products, Utc::now());

    Ok(JsonResponse::build().set_data(dashboard).ok(""))
}

#[tracing::instrument(name = "Dashboard activities.", skip(pg_pool))]
#[get("/dashboard-activities")]
pub async fn activities_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let products = db::product::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| {
            JsonResponse::<Vec<analytics::Activity>>::build().internal_server_error(err)
        })?;

    let activities = analytics::recent_activity(&products, analytics::ACTIVITY_LIMIT);

    Ok(JsonResponse::build().set_data(activities).ok(""))
}
