//! 外部协作服务接口：元数据提取与 AI 标注。
//!
//! 具体实现见 [`crate::media::TikwmExtractor`] 与 [`crate::media::GeminiAnnotator`]；测试中可替换为内存实现。

use async_trait::async_trait;

use crate::internal::media::structs::{Annotation, MediaServiceError, RawMediaInfo};

/// 把视频链接解析为可下载的媒体地址。
#[async_trait]
pub trait MetadataExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<RawMediaInfo, MediaServiceError>;
}

/// 为视频链接生成标题、作者、标签。失败时由调用方退回提取结果的原始字段。
#[async_trait]
pub trait MediaAnnotator: Send + Sync {
    async fn annotate(&self, url: &str) -> Result<Annotation, MediaServiceError>;
}
