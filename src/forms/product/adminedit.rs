use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

// Partial update: only provided fields change.
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct AdminEditProduct {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: Option<String>,
    #[validate(min_length = 1)]
    #[validate(max_length = 2000)]
    pub image: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: Option<f64>,
    #[validate(max_length = 5000)]
    pub description: Option<String>,
    #[validate(max_length = 100)]
    pub color: Option<String>,
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub location: Option<String>,
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub contact1: Option<String>,
    #[validate(max_length = 100)]
    pub contact2: Option<String>,
    #[validate(max_length = 100)]
    pub telegram: Option<String>,
    pub status: Option<models::ProductStatus>,
}

impl AdminEditProduct {
    pub fn update(self, product: &mut models::Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(color) = self.color {
            product.color = color;
        }
        if let Some(location) = self.location {
            product.location = location;
        }
        if let Some(contact1) = self.contact1 {
            product.contact1 = contact1;
        }
        if let Some(contact2) = self.contact2 {
            product.contact2 = contact2;
        }
        if let Some(telegram) = self.telegram {
            product.telegram = telegram;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
    }
}
