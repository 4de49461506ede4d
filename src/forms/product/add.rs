use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct AddProduct {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: String,
    // URL of the already-uploaded image; upload itself happens upstream
    #[validate(min_length = 1)]
    #[validate(max_length = 2000)]
    pub image: String,
    #[validate(minimum = 0.0)]
    pub price: f64,
    #[serde(default)]
    #[validate(max_length = 5000)]
    pub description: String,
    #[serde(default)]
    #[validate(max_length = 100)]
    pub color: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub location: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub contact1: String,
    #[serde(default)]
    #[validate(max_length = 100)]
    pub contact2: String,
    #[serde(default)]
    #[validate(max_length = 100)]
    pub telegram: String,
}

impl From<AddProduct> for models::Product {
    fn from(form: AddProduct) -> Self {
        // id and timestamps are placeholders, the database assigns them
        let now = Utc::now();
        models::Product {
            id: 0,
            name: form.name,
            image: form.image,
            price: form.price,
            description: form.description,
            color: form.color,
            location: form.location,
            contact1: form.contact1,
            contact2: form.contact2,
            telegram: form.telegram,
            status: models::ProductStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }
}
