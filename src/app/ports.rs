use crate::common::error::Result;
use async_trait::async_trait;

// Fetch-side port: listing pages and poster images both go through here
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpGetResult>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl HttpGetResult {
    /// Body decoded as UTF-8, replacing invalid sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}
