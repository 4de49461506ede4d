use serde_valid::Validate;
use tronics::forms;
use tronics::models::{Product, ProductStatus, Testimonial};

//  Unit tests over request form deserialization and validation

#[test]
fn test_deserialize_add_product() {
    let body_str = r#"
    {
      "name": "USB-C Hub",
      "image": "https://cdn.example.com/products/hub-01.jpg",
      "price": 45.5,
      "location": "Nairobi",
      "contact1": "0700000001"
    }
    "#;
    let form = serde_json::from_str::<forms::product::Add>(body_str).unwrap();
    assert!(form.validate().is_ok());

    // omitted optional fields default to empty
    assert_eq!(form.description, "");
    assert_eq!(form.color, "");
    assert_eq!(form.contact2, "");
    assert_eq!(form.telegram, "");

    let product: Product = form.into();
    assert_eq!(product.name, "USB-C Hub");
    assert_eq!(product.price, 45.5);
    assert_eq!(product.status, ProductStatus::Available);
}

#[test]
fn test_add_product_requires_core_fields() {
    // no image
    let body_str = r#"{"name": "Hub", "price": 10, "location": "A", "contact1": "1"}"#;
    assert!(serde_json::from_str::<forms::product::Add>(body_str).is_err());
}

#[test]
fn test_add_product_rejects_negative_price() {
    let body_str = r#"
    {
      "name": "Hub",
      "image": "https://cdn.example.com/products/h.jpg",
      "price": -1,
      "location": "A",
      "contact1": "1"
    }
    "#;
    let form = serde_json::from_str::<forms::product::Add>(body_str).unwrap();
    assert!(form.validate().is_err());
}

#[test]
fn test_add_product_rejects_empty_name() {
    let body_str = r#"
    {
      "name": "",
      "image": "https://cdn.example.com/products/h.jpg",
      "price": 1,
      "location": "A",
      "contact1": "1"
    }
    "#;
    let form = serde_json::from_str::<forms::product::Add>(body_str).unwrap();
    assert!(form.validate().is_err());
}

#[test]
fn test_edit_product_applies_only_provided_fields() {
    let created_at = chrono::Utc::now();
    let mut product = Product {
        id: 7,
        name: "Old name".to_string(),
        image: "https://cdn.example.com/products/old.jpg".to_string(),
        price: 100.0,
        description: "desc".to_string(),
        color: "black".to_string(),
        location: "A".to_string(),
        contact1: "0700000001".to_string(),
        contact2: String::new(),
        telegram: String::new(),
        status: ProductStatus::Available,
        created_at,
        updated_at: created_at,
    };

    let body_str = r#"{"price": 80, "status": "sold"}"#;
    let form = serde_json::from_str::<forms::product::AdminEdit>(body_str).unwrap();
    assert!(form.validate().is_ok());
    form.update(&mut product);

    assert_eq!(product.price, 80.0);
    assert_eq!(product.status, ProductStatus::Sold);
    // untouched fields survive
    assert_eq!(product.name, "Old name");
    assert_eq!(product.color, "black");
}

#[test]
fn test_edit_product_rejects_unknown_status() {
    let body_str = r#"{"status": "reserved"}"#;
    assert!(serde_json::from_str::<forms::product::AdminEdit>(body_str).is_err());
}

#[test]
fn test_deserialize_add_testimonial_defaults_rating() {
    let body_str = r#"{"name": "Jane", "message": "Great service"}"#;
    let form = serde_json::from_str::<forms::testimonial::Add>(body_str).unwrap();
    assert!(form.validate().is_ok());

    let testimonial: Testimonial = form.into();
    assert_eq!(testimonial.rating, 5);
    assert!(!testimonial.approved);
}

#[test]
fn test_add_testimonial_rejects_out_of_range_rating() {
    let body_str = r#"{"name": "Jane", "message": "Meh", "rating": 6}"#;
    let form = serde_json::from_str::<forms::testimonial::Add>(body_str).unwrap();
    assert!(form.validate().is_err());

    let body_str = r#"{"name": "Jane", "message": "Meh", "rating": 0}"#;
    let form = serde_json::from_str::<forms::testimonial::Add>(body_str).unwrap();
    assert!(form.validate().is_err());
}

#[test]
fn test_edit_testimonial_moderation_flag() {
    let created_at = chrono::Utc::now();
    let mut testimonial = Testimonial {
        id: 3,
        name: "Jane".to_string(),
        message: "Great service".to_string(),
        rating: 4,
        approved: false,
        created_at,
        updated_at: created_at,
    };

    let body_str = r#"{"approved": true}"#;
    let form = serde_json::from_str::<forms::testimonial::AdminEdit>(body_str).unwrap();
    form.update(&mut testimonial);

    assert!(testimonial.approved);
    assert_eq!(testimonial.rating, 4);
}

#[test]
fn test_deserialize_login_form() {
    let body_str = r#"{"email": "admin@example.com", "password": "secret"}"#;
    let form = serde_json::from_str::<forms::admin::Login>(body_str).unwrap();
    assert!(form.validate().is_ok());

    let body_str = r#"{"email": "", "password": ""}"#;
    let form = serde_json::from_str::<forms::admin::Login>(body_str).unwrap();
    assert!(form.validate().is_err());
}
