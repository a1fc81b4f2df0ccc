//! S3-backed object store for production deployments.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::{validate_key, ObjectStore, StorageError};

/// Stores objects in an S3 bucket.
///
/// Public URLs use `public_base_url` when configured (CDN or website
/// endpoint), otherwise the bucket's virtual-hosted S3 URL.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    region: String,
    public_base_url: Option<String>,
}

impl S3ObjectStore {
    /// Build a store from the ambient AWS environment (credentials chain,
    /// `AWS_REGION`).
    pub async fn from_env(bucket: impl Into<String>, public_base_url: Option<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let region = config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "us-east-1".to_string());
        Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket: bucket.into(),
            region,
            public_base_url,
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        validate_key(key)?;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;
        tracing::debug!(key, bucket = %self.bucket, "Stored S3 object");
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            ),
        }
    }

    fn key_for_url(&self, url: &str) -> Option<String> {
        let base = match &self.public_base_url {
            Some(base) => format!("{}/", base.trim_end_matches('/')),
            None => format!("https://{}.s3.{}.amazonaws.com/", self.bucket, self.region),
        };
        url.strip_prefix(&base)
            .filter(|key| validate_key(key).is_ok())
            .map(str::to_string)
    }
}
