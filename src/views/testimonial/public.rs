use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

// Storefront projection: moderation state stays internal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Public {
    pub id: i32,
    pub name: String,
    pub message: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<models::Testimonial> for Public {
    fn from(testimonial: models::Testimonial) -> Self {
        Self {
            id: testimonial.id,
            name: testimonial.name,
            message: testimonial.message,
            rating: testimonial.rating,
            created_at: testimonial.created_at,
        }
    }
}
