use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct AddTestimonial {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 2000)]
    pub message: String,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: Option<i32>,
}

impl From<AddTestimonial> for models::Testimonial {
    fn from(form: AddTestimonial) -> Self {
        // visitor submissions always start unapproved
        let now = Utc::now();
        models::Testimonial {
            id: 0,
            name: form.name,
            message: form.message,
            rating: form.rating.unwrap_or(5),
            approved: false,
            created_at: now,
            updated_at: now,
        }
    }
}
