use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Testimonial>, String> {
    let query_span = tracing::info_span!("Fetch testimonial by id.");
    sqlx::query_as::<_, models::Testimonial>(
        r#"
        SELECT
            *
        FROM testimonial
        WHERE id=$1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        err => {
            tracing::error!("Failed to fetch testimonial, error: {:?}", err);
            Err("Could not fetch data".to_string())
        }
    })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Testimonial>, String> {
    let query_span = tracing::info_span!("Fetch all testimonials.");
    sqlx::query_as::<_, models::Testimonial>(
        r#"
        SELECT
            *
        FROM testimonial
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch testimonials, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

// The storefront only ever sees approved entries.
pub async fn fetch_approved(pool: &PgPool) -> Result<Vec<models::Testimonial>, String> {
    let query_span = tracing::info_span!("Fetch approved testimonials.");
    sqlx::query_as::<_, models::Testimonial>(
        r#"
        SELECT
            *
        FROM testimonial
        WHERE approved = true
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch testimonials, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    testimonial: models::Testimonial,
) -> Result<models::Testimonial, String> {
    let query_span = tracing::info_span!("Saving new testimonial into the database");
    sqlx::query_as::<_, models::Testimonial>(
        r#"
        INSERT INTO testimonial (name, message, rating, approved, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&testimonial.name)
    .bind(&testimonial.message)
    .bind(testimonial.rating)
    .bind(testimonial.approved)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(
    pool: &PgPool,
    testimonial: models::Testimonial,
) -> Result<models::Testimonial, String> {
    let query_span = tracing::info_span!("Updating testimonial");
    sqlx::query_as::<_, models::Testimonial>(
        r#"
        UPDATE testimonial
        SET
            name=$2,
            message=$3,
            rating=$4,
            approved=$5,
            updated_at=NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(testimonial.id)
    .bind(&testimonial.name)
    .bind(&testimonial.message)
    .bind(testimonial.rating)
    .bind(testimonial.approved)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

#[tracing::instrument(name = "Delete testimonial.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query("DELETE FROM testimonial WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "Failed to delete".to_string()
        })
}

pub async fn stats(pool: &PgPool) -> Result<models::TestimonialStats, String> {
    let query_span = tracing::info_span!("Aggregate testimonial stats.");
    sqlx::query_as::<_, models::TestimonialStats>(
        r#"
        SELECT
            COUNT(*) AS total,
            COUNT(*) FILTER (WHERE approved) AS approved,
            COUNT(*) FILTER (WHERE NOT approved) AS pending,
            COALESCE(AVG(rating::float8) FILTER (WHERE approved), 0) AS average_rating
        FROM testimonial
        "#,
    )
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not fetch data".to_string()
    })
}
