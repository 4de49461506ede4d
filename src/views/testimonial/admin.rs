use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub message: String,
    pub rating: i32,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::Testimonial> for Admin {
    fn from(testimonial: models::Testimonial) -> Self {
        Self {
            id: testimonial.id,
            name: testimonial.name,
            message: testimonial.message,
            rating: testimonial.rating,
            approved: testimonial.approved,
            created_at: testimonial.created_at,
            updated_at: testimonial.updated_at,
        }
    }
}
