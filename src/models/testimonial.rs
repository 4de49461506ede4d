use chrono::{DateTime, Utc};
use serde::Serialize;

/// Customer review. Hidden from the storefront until an admin approves it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub message: String,
    pub rating: i32, // 1..=5
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialStats {
    pub total: i64,
    pub approved: i64,
    pub pending: i64,
    pub average_rating: f64, // over approved only, 0 when none
}
