//! 媒体服务：校验链接，并发调用元数据提取与 AI 标注，合并为 [`MediaResult`]。
//!
//! 提取失败直接返回错误（此时还没有可以回退的下载目标）；标注只是锦上添花，
//! 失败时记录日志并退回提取接口的原始字段。

use std::sync::Arc;

use reqwest::Client;
use tracing::{error, warn};

use crate::internal::media::functions::link::parse_video_id;
use crate::internal::media::gemini::GeminiAnnotator;
use crate::internal::media::tikwm::TikwmExtractor;
use crate::internal::media::traits::collaborators::{MediaAnnotator, MetadataExtractor};

use super::annotation::Annotation;
use super::media_result::MediaResult;
use super::media_service_error::MediaServiceError;
use super::raw_media_info::RawMediaInfo;
use super::ServiceConfig;

/// 链接中解析不出视频 id 时的提示
pub const INVALID_URL_MESSAGE: &str = "Invalid TikTok URL.";

/// 标注与原始字段都没有标题时使用的标题
pub const FALLBACK_TITLE: &str = "TikTok Video";

/// 标注没有给出标签时使用的标签
pub const FALLBACK_TAG: &str = "#tiktok";

#[derive(Clone)]
pub struct MediaService {
    extractor: Arc<dyn MetadataExtractor>,
    annotator: Arc<dyn MediaAnnotator>,
}

impl MediaService {
    /// 按配置创建真实的 HTTP 协作者，两者共用一个连接池。
    pub fn from_config(config: &ServiceConfig) -> Result<Self, MediaServiceError> {
        let client = Client::builder().build()?;
        let extractor =
            TikwmExtractor::new(client.clone(), config.extractor_base_url.clone());
        let annotator = GeminiAnnotator::new(
            client,
            config.annotator_base_url.clone(),
            config.annotator_model.clone(),
            config.api_key.clone(),
        );
        Ok(Self::with_collaborators(
            Arc::new(extractor),
            Arc::new(annotator),
        ))
    }

    pub fn with_collaborators(
        extractor: Arc<dyn MetadataExtractor>,
        annotator: Arc<dyn MediaAnnotator>,
    ) -> Self {
        Self {
            extractor,
            annotator,
        }
    }

    /// 解析链接对应的媒体。两个协作者并发请求，全部返回后再合并。
    pub async fn extract_media(&self, url: &str) -> Result<MediaResult, MediaServiceError> {
        if parse_video_id(url).is_none() {
            return Err(MediaServiceError::InvalidInput(
                INVALID_URL_MESSAGE.to_string(),
            ));
        }

        let (annotation, info) =
            tokio::join!(self.annotator.annotate(url), self.extractor.extract(url));

        let info = info.inspect_err(|e| error!(url, error = %e, "元数据提取失败"))?;

        let annotation = annotation.unwrap_or_else(|e| {
            warn!(url, error = %e, "标注失败，使用提取接口的原始字段");
            Annotation::default()
        });

        Ok(merge(url, info, annotation))
    }
}

/// 标注字段优先，缺失或为空时退回原始字段。
fn merge(url: &str, info: RawMediaInfo, annotation: Annotation) -> MediaResult {
    let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

    let title = non_empty(annotation.title)
        .or_else(|| non_empty(Some(info.title.clone())))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());
    let author = non_empty(annotation.author)
        .unwrap_or_else(|| format!("@{}", info.author_unique_id));
    let tags = annotation
        .tags
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| vec![FALLBACK_TAG.to_string()]);

    MediaResult {
        title,
        author,
        thumbnail: info.cover,
        audio_url: info.music,
        video_url: info.play,
        duration: Some(format!("{}s", info.duration)),
        description: Some(info.title),
        tags: Some(tags),
        url: Some(url.to_string()),
    }
}
