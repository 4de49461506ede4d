use crate::configuration::MediaSettings;
use crate::connectors::MediaServiceConnector;
use async_trait::async_trait;

pub struct MediaServiceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    folder: String,
}

impl MediaServiceClient {
    pub fn new(settings: &MediaSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            folder: settings.folder.clone(),
        }
    }
}

// The store addresses images by public id: the URL's last path segment
// without its extension.
pub(crate) fn public_id(image_url: &str) -> Option<&str> {
    let segment = image_url.rsplit('/').next()?;
    let id = segment.split('.').next().unwrap_or(segment);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[async_trait]
impl MediaServiceConnector for MediaServiceClient {
    #[tracing::instrument(name = "Delete stored image.", skip(self))]
    async fn delete_image(&self, image_url: &str) -> Result<(), String> {
        if image_url.is_empty() {
            return Ok(());
        }

        let public_id = public_id(image_url)
            .ok_or_else(|| format!("can't derive public id from {}", image_url))?;

        let url = format!("{}/{}/{}", self.base_url, self.folder, public_id);
        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|err| format!("media service unreachable: {}", err))?;

        if !response.status().is_success() {
            return Err(format!("media service answered {}", response.status()));
        }

        tracing::info!("Deleted image {}", public_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_id_strips_extension() {
        assert_eq!(
            public_id("https://cdn.example.com/products/abc123.jpg"),
            Some("abc123")
        );
    }

    #[test]
    fn test_public_id_without_extension() {
        assert_eq!(
            public_id("https://cdn.example.com/products/abc123"),
            Some("abc123")
        );
    }

    #[test]
    fn test_public_id_rejects_trailing_slash() {
        assert_eq!(public_id("https://cdn.example.com/products/"), None);
    }
}
