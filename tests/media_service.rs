use tronics::configuration::MediaSettings;
use tronics::connectors::media_service::MediaServiceClient;
use tronics::connectors::MediaServiceConnector;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(base_url: String) -> MediaSettings {
    MediaSettings {
        base_url,
        api_key: "test-key".to_string(),
        folder: "products".to_string(),
    }
}

#[tokio::test]
async fn test_delete_image_addresses_store_by_public_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/products/hub-01"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = MediaServiceClient::new(&settings(server.uri()));
    client
        .delete_image("https://cdn.example.com/products/hub-01.jpg")
        .await
        .expect("Failed to delete image");
}

#[tokio::test]
async fn test_delete_image_surfaces_store_errors() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/products/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = MediaServiceClient::new(&settings(server.uri()));
    let result = client
        .delete_image("https://cdn.example.com/products/gone.png")
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_image_ignores_blank_url() {
    // no server mounted: a blank URL must not trigger any request
    let client = MediaServiceClient::new(&settings("http://127.0.0.1:1".to_string()));
    assert!(client.delete_image("").await.is_ok());
}
