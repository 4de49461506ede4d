//! Media service connector module
//!
//! Product images live in an external object store; the marketplace only
//! ever asks it to drop an image it no longer references.

use async_trait::async_trait;

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::MediaServiceClient;
#[cfg(test)]
pub use mock::MockMediaServiceConnector;

#[async_trait]
pub trait MediaServiceConnector: Send + Sync {
    /// Remove a stored image, addressed by the public URL kept on the
    /// product record.
    async fn delete_image(&self, image_url: &str) -> Result<(), String>;
}
