use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct AdminEditTestimonial {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: Option<String>,
    #[validate(min_length = 1)]
    #[validate(max_length = 2000)]
    pub message: Option<String>,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: Option<i32>,
    pub approved: Option<bool>,
}

impl AdminEditTestimonial {
    pub fn update(self, testimonial: &mut models::Testimonial) {
        if let Some(name) = self.name {
            testimonial.name = name;
        }
        if let Some(message) = self.message {
            testimonial.message = message;
        }
        if let Some(rating) = self.rating {
            testimonial.rating = rating;
        }
        if let Some(approved) = self.approved {
            testimonial.approved = approved;
        }
    }
}
