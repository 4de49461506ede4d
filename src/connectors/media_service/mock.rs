use crate::connectors::MediaServiceConnector;
use async_trait::async_trait;
use std::sync::Mutex;

/// Records delete calls instead of talking to the media service.
#[derive(Default)]
pub struct MockMediaServiceConnector {
    pub deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl MediaServiceConnector for MockMediaServiceConnector {
    async fn delete_image(&self, image_url: &str) -> Result<(), String> {
        self.deleted.lock().unwrap().push(image_url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_deletions() {
        let mock = MockMediaServiceConnector::default();
        mock.delete_image("https://cdn.example.com/products/a.jpg")
            .await
            .unwrap();

        assert_eq!(
            *mock.deleted.lock().unwrap(),
            vec!["https://cdn.example.com/products/a.jpg".to_string()]
        );
    }
}
