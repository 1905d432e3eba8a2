use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::internal::media::structs::{MediaServiceError, RawMediaInfo};
use crate::internal::media::traits::collaborators::MetadataExtractor;

use super::raw_response::TikwmEnvelope;

/// 基于 tikwm.com 的元数据提取器。
#[derive(Debug, Clone)]
pub struct TikwmExtractor {
    client: Client,
    base_url: String,
}

impl TikwmExtractor {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MetadataExtractor for TikwmExtractor {
    async fn extract(&self, url: &str) -> Result<RawMediaInfo, MediaServiceError> {
        debug!(url, "请求元数据提取接口");

        let res = self
            .client
            .get(&self.base_url)
            .query(&[("url", url)])
            .send()
            .await?;

        // 接口出错时也会返回 JSON 信封，状态码不作为判断依据
        let text = res.text().await?;
        let envelope: TikwmEnvelope = serde_json::from_str(&text)?;

        envelope.into_media_info()
    }
}
