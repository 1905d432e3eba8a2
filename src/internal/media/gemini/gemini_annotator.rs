use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use crate::internal::media::structs::{Annotation, MediaServiceError};
use crate::internal::media::traits::collaborators::MediaAnnotator;

use super::raw_response::GenerateContentResponse;

/// 基于 Gemini REST 接口的标注器，要求模型按 JSON Schema 输出。
#[derive(Debug, Clone)]
pub struct GeminiAnnotator {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiAnnotator {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/models/{}:generateContent", self.model)
    }

    fn request_body(url: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{
                    "text": format!(
                        "Analyze TikTok URL: {url}. Return metadata (title, author, tags) as JSON."
                    )
                }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "author": { "type": "STRING" },
                        "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["title", "author"]
                }
            }
        })
    }
}

#[async_trait]
impl MediaAnnotator for GeminiAnnotator {
    async fn annotate(&self, url: &str) -> Result<Annotation, MediaServiceError> {
        if self.api_key.is_empty() {
            return Err(MediaServiceError::UpstreamFailure(
                "未配置标注服务的 API Key".to_string(),
            ));
        }

        debug!(url, model = %self.model, "请求标注接口");

        let res = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(url))
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(MediaServiceError::UpstreamFailure(format!(
                "标注服务返回 {status}"
            )));
        }

        let response: GenerateContentResponse = serde_json::from_str(&text)?;
        let annotation_json = response.text().unwrap_or_else(|| "{}".to_string());
        let annotation: Annotation = serde_json::from_str(&annotation_json)?;

        Ok(annotation)
    }
}
